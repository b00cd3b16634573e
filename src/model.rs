//! 空室APIレスポンスのスキーマ
//!
//! 元データは深い入れ子のJSON。変換ルール側でnullガードを繰り返さずに
//! 済むよう、全フィールドを`#[serde(default)]`で受けて取り込み時に
//! 既定値へ畳み込む。番号付きスロット（月額費用1〜10など）は
//! インデックスアクセサで引く。

use serde::Deserialize;

/// 空室APIのバッチレスポンス
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RoomList {
    pub count: i64,
    pub list: Vec<Room>,
}

/// ID+名称のみの汎用種別レコード
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TypeCode {
    pub id: i64,
    pub name: String,
}

/// 管理形態
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ManagementType {
    pub id: i64,
    pub is_own: bool,
    pub is_entrusted: bool,
}

/// 駐車場種別
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GarageType {
    pub id: i64,
    pub is_exist: bool,
}

/// 駐輪場・バイク置き場種別
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BikeParkingType {
    pub id: i64,
    pub is_exist: bool,
}

/// ペット種別
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PetType {
    pub id: i64,
    pub is_ok: bool,
}

/// 退去時清掃種別
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CleaningType {
    pub id: i64,
    pub is_paid: bool,
}

/// 間取り種別
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LayoutType {
    pub id: i64,
    pub room_count: i64,
}

/// 画像種別
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PictureType {
    pub id: i64,
    pub is_building_exterior: bool,
    pub is_layout: bool,
}

/// 業者（元付・分譲管理）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Trader {
    pub id: i64,
    pub trader_name: String,
    pub tel1: String,
    pub is_stopped: bool,
    pub is_deleted: bool,
    pub no_trading: bool,
    pub no_portal: bool,
}

/// 駅（所属路線付き）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Station {
    pub id: i64,
    pub railway: TypeCode,
}

/// 学区の学校参照
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SchoolRef {
    pub id: i64,
    pub name: String,
}

/// 周辺施設
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Facility {
    pub facility: TypeCode,
    pub distance: i64,
}

/// 設備リストの1件
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Equipment {
    pub equipment: TypeCode,
}

/// 画像（部屋・建物共通）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Picture {
    pub picture_type: PictureType,
    pub file_url: String,
    pub medium_file_url: String,
    pub small_file_url: String,
    pub comment: String,
}

impl Picture {
    /// 設定のフィールド名でダウンロードURLを引く（未知キーはfile_url）
    pub fn url_for(&self, key: &str) -> &str {
        match key {
            "medium_file_url" => &self.medium_file_url,
            "small_file_url" => &self.small_file_url,
            _ => &self.file_url,
        }
    }
}

/// パノラマ（部屋・建物共通）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Panorama {
    pub panorama_type: TypeCode,
    pub file_url: String,
}

/// 建物レコード（同一建物の全部屋で共有される情報）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Building {
    pub building_code: String,
    pub building_name: String,
    pub building_kana: String,
    pub building_rooms: Option<i64>,
    pub building_type: TypeCode,

    pub postal_code: String,
    pub city: TypeCode,
    pub town_address: String,
    pub house_no: String,
    pub lat: f64,
    pub lng: f64,

    pub station1: Station,
    pub station2: Station,
    pub arrival_type1: TypeCode,
    pub arrival_type2: TypeCode,
    pub bus_stop1: String,
    pub bus_stop2: String,
    pub bus_stop_time1: Option<i64>,
    pub bus_stop_time2: Option<i64>,
    pub station_time1: Option<i64>,
    pub station_time2: Option<i64>,

    pub structure: TypeCode,
    pub structure_comment: String,
    pub building_floors: Option<i64>,
    pub building_undergrounds: i64,
    pub build_year: i64,
    pub build_month: i64,

    pub management_type: ManagementType,
    pub trader: Trader,

    pub garage_type: GarageType,
    pub garage_fee_lower: i64,
    pub garage_fee_upper: i64,
    pub garage_fee_tax_type: TypeCode,
    pub garage_distance: Option<i64>,
    pub bike_parking_type: BikeParkingType,

    pub elementary_school: SchoolRef,
    pub elementary_school_distance: i64,
    pub junior_high_school: SchoolRef,
    pub junior_high_school_distance: i64,
    pub facilities: Vec<Facility>,

    pub pictures: Vec<Picture>,
    pub panoramas: Vec<Panorama>,
}

/// 部屋レコード
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Room {
    pub id: i64,
    pub building: Building,

    pub room_no: String,
    pub room_floor: Option<i64>,
    pub room_area: f64,
    pub balcony_area: f64,
    pub balcony_type: TypeCode,
    pub direction: TypeCode,
    pub layout_type: LayoutType,

    pub web_catch_copy: String,
    pub web_appeal: String,

    pub rent: Option<i64>,
    pub condo_fees_type: TypeCode,
    pub condo_fees: Option<i64>,

    pub key_money_type1: TypeCode,
    pub key_money_notation1: TypeCode,
    pub key_money_value1: f64,
    pub deposit_type1: TypeCode,
    pub deposit_notation1: TypeCode,
    pub deposit_value1: f64,
    pub renewal_fee_notation: TypeCode,
    pub renewal_fee_value: f64,

    pub insurance_years: i64,
    pub contract_years: i64,
    pub contract_months: i64,

    pub payment_fee_type: TypeCode,
    pub payment_fee: i64,
    pub payment_fee_tax_type: TypeCode,

    pub monthly_cost_name1: String,
    pub monthly_cost_name2: String,
    pub monthly_cost_name3: String,
    pub monthly_cost_name4: String,
    pub monthly_cost_name5: String,
    pub monthly_cost_name6: String,
    pub monthly_cost_name7: String,
    pub monthly_cost_name8: String,
    pub monthly_cost_name9: String,
    pub monthly_cost_name10: String,
    pub monthly_cost1: i64,
    pub monthly_cost2: i64,
    pub monthly_cost3: i64,
    pub monthly_cost4: i64,
    pub monthly_cost5: i64,
    pub monthly_cost6: i64,
    pub monthly_cost7: i64,
    pub monthly_cost8: i64,
    pub monthly_cost9: i64,
    pub monthly_cost10: i64,
    pub monthly_cost_tax_type1: TypeCode,
    pub monthly_cost_tax_type2: TypeCode,
    pub monthly_cost_tax_type3: TypeCode,
    pub monthly_cost_tax_type4: TypeCode,
    pub monthly_cost_tax_type5: TypeCode,
    pub monthly_cost_tax_type6: TypeCode,
    pub monthly_cost_tax_type7: TypeCode,
    pub monthly_cost_tax_type8: TypeCode,
    pub monthly_cost_tax_type9: TypeCode,
    pub monthly_cost_tax_type10: TypeCode,

    pub initial_cost_name1: String,
    pub initial_cost_name2: String,
    pub initial_cost_name3: String,
    pub initial_cost_name4: String,
    pub initial_cost_name5: String,
    pub initial_cost_name6: String,
    pub initial_cost_name7: String,
    pub initial_cost_name8: String,
    pub initial_cost_name9: String,
    pub initial_cost_name10: String,
    pub initial_cost1: i64,
    pub initial_cost2: i64,
    pub initial_cost3: i64,
    pub initial_cost4: i64,
    pub initial_cost5: i64,
    pub initial_cost6: i64,
    pub initial_cost7: i64,
    pub initial_cost8: i64,
    pub initial_cost9: i64,
    pub initial_cost10: i64,
    pub initial_cost_tax_type1: TypeCode,
    pub initial_cost_tax_type2: TypeCode,
    pub initial_cost_tax_type3: TypeCode,
    pub initial_cost_tax_type4: TypeCode,
    pub initial_cost_tax_type5: TypeCode,
    pub initial_cost_tax_type6: TypeCode,
    pub initial_cost_tax_type7: TypeCode,
    pub initial_cost_tax_type8: TypeCode,
    pub initial_cost_tax_type9: TypeCode,
    pub initial_cost_tax_type10: TypeCode,

    pub western_style_room1: f64,
    pub western_style_room2: f64,
    pub western_style_room3: f64,
    pub western_style_room4: f64,
    pub western_style_room5: f64,
    pub western_style_room6: f64,
    pub western_style_room7: f64,
    pub western_style_room8: f64,
    pub western_style_room9: f64,
    pub western_style_room10: f64,
    pub japanese_style_room1: f64,
    pub japanese_style_room2: f64,
    pub japanese_style_room3: f64,
    pub japanese_style_room4: f64,
    pub japanese_style_room5: f64,
    pub japanese_style_room6: f64,
    pub japanese_style_room7: f64,
    pub japanese_style_room8: f64,
    pub japanese_style_room9: f64,
    pub japanese_style_room10: f64,
    pub kitchen1: f64,
    pub kitchen2: f64,
    pub kitchen3: f64,
    pub kitchen_type1: TypeCode,
    pub kitchen_type2: TypeCode,
    pub kitchen_type3: TypeCode,

    pub bath_type: TypeCode,
    pub washer_type: TypeCode,
    pub internet_type: TypeCode,
    pub gas_type: TypeCode,
    pub pet_type: PetType,
    pub rental_type: TypeCode,
    pub instrument_type: TypeCode,
    pub live_together_type: TypeCode,
    pub share_type: TypeCode,
    pub office_use_type: TypeCode,
    pub only_man_type: TypeCode,
    pub only_woman_type: TypeCode,
    pub corp_contract_type: TypeCode,

    pub room_status: TypeCode,
    pub vacancy_status: TypeCode,
    pub live_start_year: i64,
    pub live_start_month: i64,
    pub live_start_day: TypeCode,

    pub elementary_school: SchoolRef,
    pub junior_high_school: SchoolRef,

    pub guarantee_type: TypeCode,
    pub guarantee_fee: String,

    pub reform_year: i64,
    pub reform_month: i64,
    pub reform_comment: String,

    pub key_change_cost_existence: TypeCode,
    pub key_change_cost: i64,
    pub key_change_cost_tax_type: TypeCode,
    pub cleaning_type: CleaningType,
    pub cleaning_cost: i64,
    pub cleaning_cost_tax_type: TypeCode,

    pub free_rent_type: TypeCode,
    pub free_rent_months: i64,
    pub free_rent_limit_year: i64,
    pub free_rent_limit_month: i64,

    pub is_sublease: bool,
    pub is_condo_management: bool,
    pub is_entrusted: bool,
    pub condo_trader: Trader,

    pub equipments: Vec<Equipment>,
    pub pictures: Vec<Picture>,
    pub panoramas: Vec<Panorama>,
}

impl Room {
    /// 月額費用スロット（1〜10）
    pub fn monthly_cost(&self, index: usize) -> (&str, i64, i64) {
        match index {
            1 => (&self.monthly_cost_name1, self.monthly_cost1, self.monthly_cost_tax_type1.id),
            2 => (&self.monthly_cost_name2, self.monthly_cost2, self.monthly_cost_tax_type2.id),
            3 => (&self.monthly_cost_name3, self.monthly_cost3, self.monthly_cost_tax_type3.id),
            4 => (&self.monthly_cost_name4, self.monthly_cost4, self.monthly_cost_tax_type4.id),
            5 => (&self.monthly_cost_name5, self.monthly_cost5, self.monthly_cost_tax_type5.id),
            6 => (&self.monthly_cost_name6, self.monthly_cost6, self.monthly_cost_tax_type6.id),
            7 => (&self.monthly_cost_name7, self.monthly_cost7, self.monthly_cost_tax_type7.id),
            8 => (&self.monthly_cost_name8, self.monthly_cost8, self.monthly_cost_tax_type8.id),
            9 => (&self.monthly_cost_name9, self.monthly_cost9, self.monthly_cost_tax_type9.id),
            10 => (&self.monthly_cost_name10, self.monthly_cost10, self.monthly_cost_tax_type10.id),
            _ => ("", 0, 0),
        }
    }

    /// 初期費用スロット（1〜10）
    pub fn initial_cost(&self, index: usize) -> (&str, i64, i64) {
        match index {
            1 => (&self.initial_cost_name1, self.initial_cost1, self.initial_cost_tax_type1.id),
            2 => (&self.initial_cost_name2, self.initial_cost2, self.initial_cost_tax_type2.id),
            3 => (&self.initial_cost_name3, self.initial_cost3, self.initial_cost_tax_type3.id),
            4 => (&self.initial_cost_name4, self.initial_cost4, self.initial_cost_tax_type4.id),
            5 => (&self.initial_cost_name5, self.initial_cost5, self.initial_cost_tax_type5.id),
            6 => (&self.initial_cost_name6, self.initial_cost6, self.initial_cost_tax_type6.id),
            7 => (&self.initial_cost_name7, self.initial_cost7, self.initial_cost_tax_type7.id),
            8 => (&self.initial_cost_name8, self.initial_cost8, self.initial_cost_tax_type8.id),
            9 => (&self.initial_cost_name9, self.initial_cost9, self.initial_cost_tax_type9.id),
            10 => (&self.initial_cost_name10, self.initial_cost10, self.initial_cost_tax_type10.id),
            _ => ("", 0, 0),
        }
    }

    /// 洋室の帖数スロット（1〜10）
    pub fn western_style_room(&self, index: usize) -> f64 {
        match index {
            1 => self.western_style_room1,
            2 => self.western_style_room2,
            3 => self.western_style_room3,
            4 => self.western_style_room4,
            5 => self.western_style_room5,
            6 => self.western_style_room6,
            7 => self.western_style_room7,
            8 => self.western_style_room8,
            9 => self.western_style_room9,
            10 => self.western_style_room10,
            _ => 0.0,
        }
    }

    /// 和室の帖数スロット（1〜10）
    pub fn japanese_style_room(&self, index: usize) -> f64 {
        match index {
            1 => self.japanese_style_room1,
            2 => self.japanese_style_room2,
            3 => self.japanese_style_room3,
            4 => self.japanese_style_room4,
            5 => self.japanese_style_room5,
            6 => self.japanese_style_room6,
            7 => self.japanese_style_room7,
            8 => self.japanese_style_room8,
            9 => self.japanese_style_room9,
            10 => self.japanese_style_room10,
            _ => 0.0,
        }
    }

    /// キッチンスロット（1〜3、帖数と種別）
    pub fn kitchen(&self, index: usize) -> (f64, &TypeCode) {
        match index {
            1 => (self.kitchen1, &self.kitchen_type1),
            2 => (self.kitchen2, &self.kitchen_type2),
            3 => (self.kitchen3, &self.kitchen_type3),
            _ => (0.0, &self.kitchen_type1),
        }
    }
}

/// Option<i64>の表示（欠損は空文字）
pub fn opt_int_str(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
