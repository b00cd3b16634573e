//! その他費用の抽出
//!
//! 支払い手数料・月額費用1〜10・初期費用1〜10をこの順で集め、
//! 名目が空か金額が0以下のスロットは読み飛ばす。

use crate::model::Room;

/// 税区分ID: 税別（出力時に税込へ換算する）
const TAX_EXCLUSIVE: i64 = 1;

/// その他費用の1件
#[derive(Debug, Clone, PartialEq)]
pub struct CostEntry {
    pub name: String,
    pub amount: i64,
    pub tax_type_id: i64,
}

/// 部屋のその他費用一覧
#[derive(Debug, Clone, Default)]
pub struct OtherCostSet {
    costs: Vec<CostEntry>,
}

impl OtherCostSet {
    pub fn new(room: &Room) -> Self {
        let mut costs = Vec::new();

        // 支払い手数料（種別が対象のものだけ）
        let type_id = room.payment_fee_type.id;
        if matches!(type_id, 10 | 20 | 30) && room.payment_fee > 0 {
            costs.push(CostEntry {
                name: room.payment_fee_type.name.clone(),
                amount: room.payment_fee,
                tax_type_id: room.payment_fee_tax_type.id,
            });
        }

        // 月額費用
        for i in 1..=10 {
            let (name, amount, tax_type_id) = room.monthly_cost(i);
            if !name.is_empty() && amount > 0 {
                costs.push(CostEntry {
                    name: name.to_string(),
                    amount,
                    tax_type_id,
                });
            }
        }

        // 初期費用
        for i in 1..=10 {
            let (name, amount, tax_type_id) = room.initial_cost(i);
            if !name.is_empty() && amount > 0 {
                costs.push(CostEntry {
                    name: name.to_string(),
                    amount,
                    tax_type_id,
                });
            }
        }

        Self { costs }
    }

    /// 費用名（範囲外は空文字）
    pub fn cost_name(&self, index: usize) -> String {
        self.costs
            .get(index)
            .map(|c| c.name.clone())
            .unwrap_or_default()
    }

    /// 費用額（税別は税込換算して切り捨て、範囲外は空文字）
    pub fn cost(&self, index: usize, tax_rate: f64) -> String {
        let Some(entry) = self.costs.get(index) else {
            return String::new();
        };

        let amount = if entry.tax_type_id == TAX_EXCLUSIVE {
            tax_included(entry.amount, tax_rate)
        } else {
            entry.amount
        };
        amount.to_string()
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

/// 税込金額（切り捨て）
pub fn tax_included(amount: i64, tax_rate: f64) -> i64 {
    (amount as f64 * (1.0 + tax_rate)).floor() as i64
}
