//! 部屋データの正規化
//!
//! 生の部屋レコード1件から出力セル値を導出する層。各メソッドが
//! CSVの1フィールドに対応し、値が導けない場合は空文字に落とす
//! （ここで失敗してバッチ全体を止めることはない）。
//!
//! 敷金・礼金などの金額は「表記種別」を介して解決する。表記1は
//! 「なし」で0、表記2は実額（100以上のときだけ有効）、表記3は
//! 月数倍率（100未満のときだけ有効）。100を境に実額と倍率を
//! 見分けるのは受け側フォーマットの取り決めで、比較の向きも
//! 含めてそのまま踏襲する。

use super::costs::{tax_included, OtherCostSet};
use super::geo;
use super::layout::LayoutSet;
use super::media::{ImageSet, PanoramaSet};
use super::text::{float_normalize, floor2, sanitize, year_month};
use super::ConvertContext;
use crate::download::url_file_name;
use crate::model::{opt_int_str, Panorama, Picture, Room, Trader};
use chrono::{Datelike, Months, NaiveDate};

/// 設備コード列の最大長
const EQUIPMENT_CODES_MAX_LEN: usize = 200;

/// 正規化済みの部屋ビュー
///
/// 1部屋のレコード変換の間だけ生き、行の組み立てが終わったら捨てる。
pub struct RoomData<'a> {
    room: &'a Room,
    ctx: &'a ConvertContext,
    image_set: ImageSet<'a>,
    panorama_set: PanoramaSet<'a>,
    layout_set: LayoutSet,
    other_cost_set: OtherCostSet,
}

impl<'a> RoomData<'a> {
    pub fn new(room: &'a Room, ctx: &'a ConvertContext) -> Self {
        Self {
            room,
            ctx,
            image_set: ImageSet::new(room),
            panorama_set: PanoramaSet::new(room),
            layout_set: LayoutSet::new(room, &ctx.codes),
            other_cost_set: OtherCostSet::new(room),
        }
    }

    // ----- 管理情報 -----

    /// 自社物フラグ
    pub fn is_managed(&self) -> &'static str {
        let building = &self.room.building;
        if building.management_type.is_own || building.management_type.is_entrusted {
            "1"
        } else if building.management_type.id == 70 {
            // 家主直
            "1"
        } else if self.room.is_sublease || self.room.is_condo_management || self.room.is_entrusted
        {
            "1"
        } else {
            "0"
        }
    }

    /// 賃貸管理他業者
    ///
    /// 先物物件のみ。分譲管理の業者を優先し、停止中・削除済みは除く。
    pub fn trader(&self) -> Option<&'a Trader> {
        if self.is_managed() != "0" {
            return None;
        }

        let trader = if self.room.is_condo_management && self.room.condo_trader.id != 0 {
            &self.room.condo_trader
        } else if self.room.building.trader.id != 0 {
            &self.room.building.trader
        } else {
            return None;
        };

        if trader.is_stopped || trader.is_deleted {
            None
        } else {
            Some(trader)
        }
    }

    /// 他業者物件で掲載禁止業者ならtrue
    pub fn is_forbidden_trader(&self) -> bool {
        self.trader()
            .map(|t| t.no_trading || t.no_portal)
            .unwrap_or(false)
    }

    /// 他社元付会社名
    pub fn trader_company(&self) -> String {
        if self.is_managed() != "0" {
            return String::new();
        }

        let ans = self
            .trader()
            .map(|t| sanitize(&t.trader_name))
            .unwrap_or_default();
        if ans.is_empty() {
            self.ctx.config.management_company.clone()
        } else {
            ans
        }
    }

    /// 他社元付会社電話番号
    pub fn trader_company_tel(&self) -> String {
        if self.is_managed() != "0" {
            return String::new();
        }

        let ans = self.trader().map(|t| t.tel1.clone()).unwrap_or_default();
        if ans.is_empty() {
            self.ctx.config.management_company_tel.clone()
        } else {
            ans
        }
    }

    /// 他社元付会社担当者
    pub fn trader_company_staff(&self) -> String {
        if self.is_managed() == "0" {
            "管理担当者".to_string()
        } else {
            String::new()
        }
    }

    // ----- 建物情報 -----

    /// 建物コード
    pub fn building_code(&self) -> String {
        sanitize(&self.room.building.building_code)
    }

    /// 建物名称
    pub fn building_name(&self) -> String {
        sanitize(&self.room.building.building_name)
    }

    /// 建物名称カナ
    pub fn building_kana(&self) -> String {
        sanitize(&self.room.building.building_kana)
    }

    /// 総戸数
    pub fn building_rooms(&self) -> String {
        opt_int_str(self.room.building.building_rooms)
    }

    /// 郵便番号
    pub fn postal_code(&self) -> String {
        super::text::normalize_postal_code(&self.room.building.postal_code)
    }

    /// 市区町村コード（未対応の市区町村は全0の番兵値）
    pub fn city_code(&self) -> String {
        let ans = self.ctx.codes.city(&self.room.building.city.id.to_string());
        if ans.is_empty() {
            "00000000000".to_string()
        } else {
            ans
        }
    }

    /// 町域名
    pub fn town_address(&self) -> String {
        sanitize(&self.room.building.town_address)
    }

    /// 番地
    pub fn house_no(&self) -> String {
        let ans = &self.room.building.house_no;
        if ans.is_empty() {
            "99999番地".to_string()
        } else {
            sanitize(ans)
        }
    }

    /// 緯度経度（日本測地系）
    pub fn lat_lng(&self) -> String {
        geo::lat_lng_cell(self.room.building.lat, self.room.building.lng)
    }

    /// 沿線コード
    pub fn railway_code(&self, index: usize) -> String {
        let Some(station) = self.station(index) else {
            return String::new();
        };
        self.ctx.codes.railway(&station.railway.id.to_string())
    }

    /// 駅コード
    pub fn station_code(&self, index: usize) -> String {
        let Some(station) = self.station(index) else {
            return String::new();
        };
        self.ctx.codes.station(&station.id.to_string())
    }

    /// バス停名（バス利用の場合のみ）
    pub fn bus_stop(&self, index: usize) -> String {
        match index {
            1 if self.room.building.arrival_type1.id == 2 => {
                sanitize(&self.room.building.bus_stop1)
            }
            2 if self.room.building.arrival_type2.id == 2 => {
                sanitize(&self.room.building.bus_stop2)
            }
            _ => String::new(),
        }
    }

    /// バス時間（バス利用の場合のみ）
    pub fn bus_time(&self, index: usize) -> String {
        match index {
            1 if self.room.building.arrival_type1.id == 2 => {
                opt_int_str(self.room.building.station_time1)
            }
            2 if self.room.building.arrival_type2.id == 2 => {
                opt_int_str(self.room.building.station_time2)
            }
            _ => String::new(),
        }
    }

    /// 徒歩時間（バス利用はバス停からの時間、それ以外は駅からの時間）
    pub fn walk_time(&self, index: usize) -> String {
        match index {
            1 => {
                if self.room.building.arrival_type1.id == 2 {
                    opt_int_str(self.room.building.bus_stop_time1)
                } else {
                    opt_int_str(self.room.building.station_time1)
                }
            }
            2 => {
                if self.room.building.arrival_type2.id == 2 {
                    opt_int_str(self.room.building.bus_stop_time2)
                } else {
                    opt_int_str(self.room.building.station_time2)
                }
            }
            _ => String::new(),
        }
    }

    fn station(&self, index: usize) -> Option<&crate::model::Station> {
        match index {
            1 => Some(&self.room.building.station1),
            2 => Some(&self.room.building.station2),
            _ => None,
        }
    }

    /// 構造コード
    pub fn structure_code(&self) -> String {
        self.ctx
            .codes
            .structure(&self.room.building.structure.id.to_string())
    }

    /// 建物構造が「その他」の場合の補足
    pub fn structure_addition(&self) -> String {
        if self.structure_code() != "9" {
            return String::new();
        }

        let mut ans = self.room.building.structure.name.clone();
        let comment = sanitize(&self.room.building.structure_comment);
        if !comment.is_empty() {
            ans += &format!("（{}）", comment);
        }
        ans
    }

    /// 建物階数（地上）
    pub fn building_floors(&self) -> String {
        opt_int_str(self.room.building.building_floors)
    }

    /// 建物階数（地下、0は非表示）
    pub fn building_undergrounds(&self) -> String {
        let undergrounds = self.room.building.building_undergrounds;
        if undergrounds == 0 {
            String::new()
        } else {
            undergrounds.to_string()
        }
    }

    /// 築年月
    pub fn build_year_month(&self) -> String {
        year_month(self.room.building.build_year, self.room.building.build_month)
    }

    /// 新築未入居扱いなら1（築3ヶ月以内）
    pub fn new_build(&self) -> &'static str {
        let Some(build_date) = NaiveDate::from_ymd_opt(
            self.room.building.build_year as i32,
            self.room.building.build_month as u32,
            1,
        ) else {
            return "0";
        };
        let Some(new_build_date) = self.ctx.today().checked_sub_months(Months::new(3)) else {
            return "0";
        };

        if build_date >= new_build_date {
            "1"
        } else {
            "0"
        }
    }

    /// コンビニ距離
    pub fn convenience_distance(&self) -> String {
        self.facility_distance(10)
    }

    /// スーパー距離
    pub fn super_distance(&self) -> String {
        self.facility_distance(20)
    }

    /// ドラッグストア距離
    pub fn drug_store_distance(&self) -> String {
        self.facility_distance(30)
    }

    /// 商店街距離
    pub fn shopping_street_distance(&self) -> String {
        self.facility_distance(50)
    }

    /// 銀行距離
    pub fn bank_distance(&self) -> String {
        self.facility_distance(100)
    }

    /// 総合病院距離
    pub fn hospital_distance(&self) -> String {
        self.facility_distance(120)
    }

    /// 公園距離
    pub fn park_distance(&self) -> String {
        self.facility_distance(160)
    }

    fn facility_distance(&self, facility_id: i64) -> String {
        self.room
            .building
            .facilities
            .iter()
            .find(|f| f.facility.id == facility_id)
            .map(|f| f.distance.to_string())
            .unwrap_or_default()
    }

    // ----- 部屋情報 -----

    /// 自社管理物件番号（建物コード-部屋ID）
    pub fn room_code(&self) -> String {
        let building_code = &self.room.building.building_code;
        let room_id = format!("{:07}", self.room.id);
        let ans = if building_code.is_empty() {
            room_id
        } else {
            format!("{}-{}", building_code, room_id)
        };
        sanitize(&ans)
    }

    /// 部屋番号
    pub fn room_no(&self) -> String {
        let ans = &self.room.room_no;
        if ans.is_empty() {
            String::new()
        } else {
            sanitize(&format!("{}号室", ans))
        }
    }

    /// 専有面積
    pub fn room_area(&self) -> String {
        float_normalize(floor2(self.room.room_area))
    }

    /// 部屋階数
    pub fn room_floor(&self) -> String {
        opt_int_str(self.room.room_floor)
    }

    /// バルコニー面積
    pub fn balcony_area(&self) -> String {
        float_normalize(floor2(self.room.balcony_area))
    }

    /// 向きコード
    pub fn direction_code(&self) -> String {
        self.ctx
            .codes
            .direction(&self.room.direction.id.to_string())
    }

    /// 間取り部屋数
    pub fn room_count(&self) -> String {
        self.room.layout_type.room_count.to_string()
    }

    /// 間取種別コード
    pub fn layout_type_code(&self) -> String {
        self.ctx
            .codes
            .layout_type(&self.room.layout_type.id.to_string())
    }

    /// 間取り部屋帖数
    pub fn layout_room_area(&self, index: usize) -> String {
        self.layout_set.layout_room_area(index)
    }

    /// 間取り部屋種別
    pub fn layout_room_type_code(&self, index: usize) -> String {
        self.layout_set.layout_room_type_code(index)
    }

    /// WEB用キャッチコピー
    pub fn web_catch_copy(&self) -> String {
        sanitize(&self.room.web_catch_copy)
    }

    /// WEB用アピール
    pub fn web_appeal(&self) -> String {
        sanitize(&self.room.web_appeal)
    }

    /// 賃料
    pub fn rent(&self) -> String {
        opt_int_str(self.room.rent)
    }

    /// 共益費
    pub fn condo_fees(&self) -> String {
        match self.room.condo_fees_type.id {
            10 => opt_int_str(self.room.condo_fees),
            20 | 21 => "0".to_string(),
            _ => String::new(),
        }
    }

    /// 礼金
    pub fn reikin(&self) -> String {
        if matches!(self.room.key_money_type1.id, 10 | 11 | 12) {
            resolve_notation(
                self.room.key_money_notation1.id,
                self.room.key_money_value1,
                false,
            )
        } else {
            String::new()
        }
    }

    /// 敷金
    pub fn shikikin(&self) -> String {
        if self.room.deposit_type1.id == 10 {
            resolve_notation(
                self.room.deposit_notation1.id,
                self.room.deposit_value1,
                false,
            )
        } else {
            String::new()
        }
    }

    /// 保証金
    pub fn hosyokin(&self) -> String {
        if matches!(self.room.deposit_type1.id, 20 | 30) {
            resolve_notation(
                self.room.deposit_notation1.id,
                self.room.deposit_value1,
                false,
            )
        } else {
            String::new()
        }
    }

    /// 敷引・償却金
    pub fn shikibiki(&self) -> String {
        if matches!(self.room.key_money_type1.id, 20 | 21 | 22) {
            resolve_notation(
                self.room.key_money_notation1.id,
                self.room.key_money_value1,
                false,
            )
        } else {
            String::new()
        }
    }

    /// 更新料（表記4=実費も月数扱い）
    pub fn renewal_fee(&self) -> String {
        resolve_notation(
            self.room.renewal_fee_notation.id,
            self.room.renewal_fee_value,
            true,
        )
    }

    /// 火災保険期間
    pub fn insurance_span(&self) -> String {
        positive_int_str(self.room.insurance_years)
    }

    /// 契約期間（年）
    pub fn contract_years(&self) -> String {
        positive_int_str(self.room.contract_years)
    }

    /// 契約期間（月）
    pub fn contract_months(&self) -> String {
        positive_int_str(self.room.contract_months)
    }

    /// その他費用名
    pub fn other_cost_name(&self, index: usize) -> String {
        self.other_cost_set.cost_name(index)
    }

    /// その他費用
    pub fn other_cost(&self, index: usize) -> String {
        self.other_cost_set.cost(index, self.ctx.config.tax_rate)
    }

    /// 駐車場料金（有料は上限額を税込で、無料は0）
    pub fn garage_fee(&self) -> String {
        let building = &self.room.building;
        match building.garage_type.id {
            1 => {
                let mut fee = building.garage_fee_lower.max(building.garage_fee_upper);
                if building.garage_fee_tax_type.id == 1 {
                    fee = tax_included(fee, self.ctx.config.tax_rate);
                }
                fee.to_string()
            }
            5 => "0".to_string(),
            _ => String::new(),
        }
    }

    /// 駐車場料金税（有料の場合は税込で出力する）
    pub fn garage_fee_tax_code(&self) -> String {
        if self.room.building.garage_type.id == 1 {
            "2".to_string()
        } else {
            String::new()
        }
    }

    /// 駐車場距離
    pub fn garage_distance(&self) -> String {
        if self.room.building.garage_type.is_exist {
            opt_int_str(self.room.building.garage_distance)
        } else {
            String::new()
        }
    }

    /// ガレージ込み契約なら1
    pub fn include_garage(&self) -> String {
        if matches!(self.room.building.garage_type.id, 3 | 4 | 5) {
            "1".to_string()
        } else {
            String::new()
        }
    }

    /// 入居開始時期種別（1:即入居可 2:相談 3:期日指定）
    pub fn live_start_type(&self) -> &'static str {
        if self.room.room_status.id == 1 && self.room.vacancy_status.id == 10 {
            "1"
        } else if self.room.vacancy_status.id == 80 {
            "2"
        } else if self.room.live_start_year > 0 && self.room.live_start_month > 0 {
            "3"
        } else {
            "2"
        }
    }

    /// 入居可能年月（期日指定の場合のみ）
    pub fn live_start_year_month(&self) -> String {
        if self.live_start_type() == "3" {
            year_month(self.room.live_start_year, self.room.live_start_month)
        } else {
            String::new()
        }
    }

    /// 入居可能旬日（期日指定の場合のみ）
    pub fn live_start_day(&self) -> String {
        if self.live_start_type() == "3" {
            self.ctx
                .codes
                .live_start_day(&self.room.live_start_day.id.to_string())
        } else {
            String::new()
        }
    }

    /// 小学校名
    pub fn elementary_school(&self) -> String {
        if self.has_elementary_school() {
            sanitize(&self.room.elementary_school.name)
        } else {
            String::new()
        }
    }

    /// 小学校距離
    pub fn elementary_school_distance(&self) -> String {
        if self.has_elementary_school() {
            self.room.building.elementary_school_distance.to_string()
        } else {
            String::new()
        }
    }

    fn has_elementary_school(&self) -> bool {
        self.room.building.elementary_school.id != 0
            && self.room.building.elementary_school_distance > 0
    }

    /// 中学校名
    pub fn junior_high_school(&self) -> String {
        if self.has_junior_high_school() {
            sanitize(&self.room.junior_high_school.name)
        } else {
            String::new()
        }
    }

    /// 中学校距離
    pub fn junior_high_school_distance(&self) -> String {
        if self.has_junior_high_school() {
            self.room.building.junior_high_school_distance.to_string()
        } else {
            String::new()
        }
    }

    fn has_junior_high_school(&self) -> bool {
        self.room.building.junior_high_school.id != 0
            && self.room.building.junior_high_school_distance > 0
    }

    /// 掲載確認日
    pub fn publish_date(&self) -> String {
        self.ctx.today().format("%Y/%m/%d").to_string()
    }

    /// 設備・条件コード列
    ///
    /// 先頭は「設備条件を削除」の99900固定。以降、部屋の属性から
    /// 決まるコードと設備リストのコードを順に追加する。
    pub fn equipment_codes(&self) -> String {
        let mut ans = "99900".to_string();
        let room = self.room;

        // バス・トイレ別
        if room.bath_type.id == 4 {
            add_equipment_code("20501", &mut ans);
        }

        // 室内洗濯機置き場・室外洗濯機置き場
        match room.washer_type.id {
            10 => add_equipment_code("21801", &mut ans),
            20 | 30 => add_equipment_code("21802", &mut ans),
            _ => {}
        }

        // バルコニー・専用庭
        match room.balcony_type.id {
            2 | 3 => add_equipment_code("22701", &mut ans),
            4 => add_equipment_code("22501", &mut ans),
            _ => {}
        }

        // インターネット対応・光ファイバー対応・インターネット無料
        match room.internet_type.id {
            1 => add_equipment_code("26301", &mut ans),
            2 => add_equipment_code("23403", &mut ans),
            3 => add_equipment_code("23401", &mut ans),
            _ => {}
        }

        // オール電化
        if room.gas_type.id == 30 {
            add_equipment_code("24401", &mut ans);
        }

        // 駐輪場
        if room.building.bike_parking_type.is_exist {
            add_equipment_code("23101", &mut ans);
        }

        // バイク置き場
        if matches!(
            room.building.bike_parking_type.id,
            30 | 31 | 40 | 41 | 50 | 51
        ) {
            add_equipment_code("23201", &mut ans);
        }

        // ペット可・ペット相談
        if room.pet_type.is_ok {
            add_equipment_code("10901", &mut ans);
        } else if room.pet_type.id == 20 {
            add_equipment_code("10902", &mut ans);
        }

        // 分譲賃貸
        if room.building.building_type.id == 40 {
            add_equipment_code("12201", &mut ans);
        }

        // マンスリー可
        if matches!(room.rental_type.id, 40 | 41 | 42) {
            add_equipment_code("12301", &mut ans);
        }

        // 楽器相談可
        if matches!(room.instrument_type.id, 1 | 3) {
            add_equipment_code("10001", &mut ans);
        }

        // 二人入居可
        if matches!(room.live_together_type.id, 1 | 3) {
            add_equipment_code("10301", &mut ans);
        }

        // ルームシェア可
        if matches!(room.share_type.id, 1 | 3) {
            add_equipment_code("26601", &mut ans);
        }

        // 事務所可
        if matches!(room.office_use_type.id, 1 | 3) {
            add_equipment_code("10101", &mut ans);
        }

        // 男性限定
        if room.only_man_type.id == 4 {
            add_equipment_code("10401", &mut ans);
        }

        // 女性限定
        if room.only_woman_type.id == 4 {
            add_equipment_code("10402", &mut ans);
        }

        // 法人限定
        if room.corp_contract_type.id == 4 {
            add_equipment_code("10601", &mut ans);
        }

        // その他（設備リストより）
        for item in &room.equipments {
            let code = self
                .ctx
                .codes
                .equipment(&item.equipment.id.to_string());
            add_equipment_code(&code, &mut ans);
        }

        ans
    }

    /// 保証会社種別コード
    pub fn guarantee_fee_type_code(&self) -> String {
        self.ctx
            .codes
            .guarantee_type(&self.room.guarantee_type.id.to_string())
    }

    /// 保証会社利用料
    pub fn guarantee_fee(&self) -> String {
        let mut ans = String::new();
        if matches!(self.guarantee_fee_type_code().as_str(), "1" | "2") {
            ans = sanitize(&self.room.guarantee_fee);
        }

        if ans.is_empty() {
            "保証会社利用料は確認が必要。".to_string()
        } else {
            ans
        }
    }

    /// リノベーション情報があればtrue
    pub fn is_reformed(&self) -> bool {
        self.room.reform_year >= 1000
            && (1..=12).contains(&self.room.reform_month)
            && !self.room.reform_comment.is_empty()
    }

    /// リノベーション実施年月
    pub fn reform_year_month(&self) -> String {
        if self.is_reformed() {
            year_month(self.room.reform_year, self.room.reform_month)
        } else {
            String::new()
        }
    }

    /// リノベーション内容
    pub fn reform_comment(&self) -> String {
        if self.is_reformed() {
            sanitize(&self.room.reform_comment)
        } else {
            String::new()
        }
    }

    /// 鍵交換費用
    pub fn key_change_cost(&self) -> String {
        if self.room.key_change_cost_existence.id != 1 {
            return String::new();
        }

        let cost = self.room.key_change_cost;
        if cost <= 0 {
            return String::new();
        }

        let cost = if self.room.key_change_cost_tax_type.id == 1 {
            tax_included(cost, self.ctx.config.tax_rate)
        } else {
            cost
        };
        cost.to_string()
    }

    /// 退去時清掃費用
    pub fn cleaning_cost(&self) -> String {
        if !self.room.cleaning_type.is_paid {
            return String::new();
        }

        let cost = self.room.cleaning_cost;
        if cost <= 0 {
            return String::new();
        }

        let cost = if self.room.cleaning_cost_tax_type.id == 1 {
            tax_included(cost, self.ctx.config.tax_rate)
        } else {
            cost
        };
        cost.to_string()
    }

    /// フリーレント期間（月数指定の場合）
    pub fn free_rent_span(&self) -> String {
        if self.room.free_rent_type.id == 1 {
            positive_int_str(self.room.free_rent_months)
        } else {
            String::new()
        }
    }

    /// フリーレント賃料発生年月（期限指定の場合、期限の翌月）
    pub fn free_rent_next_month(&self) -> String {
        if self.room.free_rent_type.id != 2 {
            return String::new();
        }

        let mut year = self.room.free_rent_limit_year;
        let mut month = self.room.free_rent_limit_month;
        if year < self.ctx.today().year() as i64 || !(1..=12).contains(&month) {
            return String::new();
        }

        month += 1;
        if month > 12 {
            year += 1;
            month = 1;
        }
        year_month(year, month)
    }

    // ----- 画像情報 -----

    /// 次の画像の取得（取得時にダウンロードされる）
    pub fn next_image(&mut self) -> Option<&'a Picture> {
        self.image_set.next_image(self.ctx)
    }

    /// 画像データからファイル名を取得
    pub fn image_file_name(&self, image: Option<&Picture>) -> String {
        image
            .and_then(|i| url_file_name(i.url_for(&self.ctx.config.download_image_url)))
            .unwrap_or_default()
            .to_string()
    }

    /// 画像データの画像種別コードを取得
    pub fn image_picture_type_code(&self, image: Option<&Picture>) -> String {
        image
            .map(|i| self.ctx.codes.picture_type(&i.picture_type.id.to_string()))
            .unwrap_or_default()
    }

    /// 画像データのコメントを取得
    pub fn image_comment(&self, image: Option<&Picture>) -> String {
        image.map(|i| sanitize(&i.comment)).unwrap_or_default()
    }

    // ----- パノラマ情報 -----

    /// パノラマがあればtrue
    pub fn has_panoramas(&self) -> bool {
        !self.room.panoramas.is_empty() || !self.room.building.panoramas.is_empty()
    }

    /// パノラマローカルID（自社管理物件番号と同じ）
    pub fn panorama_local_code(&self) -> String {
        self.room_code()
    }

    /// パノラマ掲載フラグ
    pub fn publish_panoramas(&self) -> String {
        if self.has_panoramas() {
            "1".to_string()
        } else {
            String::new()
        }
    }

    /// パノラマセット名
    pub fn panorama_set_name(&self) -> String {
        format!("{} {}", self.building_name(), self.room_no())
    }

    /// 次のパノラマの取得（取得時にダウンロードされる）
    pub fn next_panorama(&mut self) -> Option<&'a Panorama> {
        self.panorama_set.next_panorama(self.ctx)
    }

    /// パノラマデータからファイル名を取得
    pub fn panorama_file_name(&self, panorama: Option<&Panorama>) -> String {
        panorama
            .and_then(|p| url_file_name(&p.file_url))
            .unwrap_or_default()
            .to_string()
    }

    /// パノラマデータのレンズ種別コードを取得
    pub fn panorama_lens_type(&self, panorama: Option<&Panorama>) -> String {
        panorama
            .map(|_| self.ctx.config.panorama_lens_type.clone())
            .unwrap_or_default()
    }

    /// パノラマデータのパノラマ種別コードを取得
    pub fn panorama_type_code(&self, panorama: Option<&Panorama>) -> String {
        panorama
            .map(|p| {
                self.ctx
                    .codes
                    .panorama_type(&p.panorama_type.id.to_string())
            })
            .unwrap_or_default()
    }
}

/// 表記種別による金額解決
///
/// 表記1=なし、表記2=実額（100以上）、表記3=月数倍率（100未満）。
/// どの分岐にも入らない組み合わせは空文字。
fn resolve_notation(notation_id: i64, value: f64, allow_actual_cost: bool) -> String {
    if notation_id == 1 {
        "0".to_string()
    } else if notation_id == 2 && value >= 100.0 {
        float_normalize(value)
    } else if (notation_id == 3 || (allow_actual_cost && notation_id == 4)) && value < 100.0 {
        float_normalize(value)
    } else {
        String::new()
    }
}

/// 正の整数のみ表示、それ以外は空文字
fn positive_int_str(value: i64) -> String {
    if value > 0 {
        value.to_string()
    } else {
        String::new()
    }
}

/// 設備コードの追加（上限200文字、超える分は黙って捨てる）
fn add_equipment_code(code: &str, codes: &mut String) {
    if code.is_empty() {
        return;
    }
    if codes.len() + code.len() + 1 > EQUIPMENT_CODES_MAX_LEN {
        return;
    }

    if !codes.is_empty() {
        codes.push('/');
    }
    codes.push_str(code);
}
