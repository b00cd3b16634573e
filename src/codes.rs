//! コードマスタ
//!
//! 物件データ側のIDをHOME'S側の出力コードへ変換する対応表の集まり。
//! 起動時に一度だけ読み込み、以後は読み取り専用。マスタにテーブルが
//! 欠けている場合は起動エラー、個々のIDが無い場合は空文字を返す。

use crate::error::{ConvertError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// 同梱のコードマスタ（設定でパスを指定すると差し替え可能）
const DEFAULT_CODE_MASTER: &str = include_str!("../assets/code_master.json");

type CodeTable = HashMap<String, String>;

/// コード変換テーブル一式
#[derive(Debug, Clone, Deserialize)]
pub struct CodeTables {
    cities: CodeTable,
    railways: CodeTable,
    stations: CodeTable,
    structures: CodeTable,
    directions: CodeTable,
    layout_types: CodeTable,
    kitchen_types: CodeTable,
    equipments: CodeTable,
    guarantee_types: CodeTable,
    picture_types: CodeTable,
    panorama_types: CodeTable,
    live_start_month_days: CodeTable,
}

fn lookup(table: &CodeTable, id: &str) -> String {
    table.get(id).cloned().unwrap_or_default()
}

impl CodeTables {
    /// コードマスタの読み込み
    ///
    /// パス未指定なら同梱マスタを使う。指定ファイルが読めない場合や
    /// テーブルが欠けている場合は致命エラー。
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let content = match path {
            Some(p) => std::fs::read_to_string(p).map_err(|e| {
                ConvertError::CodeMaster(format!("{}: {}", p.display(), e))
            })?,
            None => DEFAULT_CODE_MASTER.to_string(),
        };

        serde_json::from_str(&content).map_err(|e| ConvertError::CodeMaster(e.to_string()))
    }

    /// 所在地コード
    pub fn city(&self, id: &str) -> String {
        lookup(&self.cities, id)
    }

    /// 路線コード
    pub fn railway(&self, id: &str) -> String {
        lookup(&self.railways, id)
    }

    /// 駅コード
    pub fn station(&self, id: &str) -> String {
        lookup(&self.stations, id)
    }

    /// 建物構造コード
    pub fn structure(&self, id: &str) -> String {
        lookup(&self.structures, id)
    }

    /// 向きコード
    pub fn direction(&self, id: &str) -> String {
        lookup(&self.directions, id)
    }

    /// 間取種別コード
    pub fn layout_type(&self, id: &str) -> String {
        lookup(&self.layout_types, id)
    }

    /// キッチン種別コード
    pub fn kitchen_type(&self, id: &str) -> String {
        lookup(&self.kitchen_types, id)
    }

    /// 設備コード
    pub fn equipment(&self, id: &str) -> String {
        lookup(&self.equipments, id)
    }

    /// 保証会社種別コード
    pub fn guarantee_type(&self, id: &str) -> String {
        lookup(&self.guarantee_types, id)
    }

    /// 画像種別コード
    pub fn picture_type(&self, id: &str) -> String {
        lookup(&self.picture_types, id)
    }

    /// パノラマ種別コード
    pub fn panorama_type(&self, id: &str) -> String {
        lookup(&self.panorama_types, id)
    }

    /// 入居可能旬日コード
    pub fn live_start_day(&self, id: &str) -> String {
        lookup(&self.live_start_month_days, id)
    }
}
