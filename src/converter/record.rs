//! CSVレコードの組み立て
//!
//! HOME'S賃貸CSVは位置固定の約390セル。列の並びは受け側の
//! バージョン付きフォーマットそのものなので、ここでは並び順を
//! 1箇所に閉じ込めて他のモジュールからは触らせない。
//! 常に空や`*`（対象外マーク）を出す列もすべて明示的に出力する。

use super::room::RoomData;
use super::ConvertContext;
use crate::config::Config;
use crate::model::Room;

/// 賃貸データレコードのセル数
pub const DATA_RECORD_CELLS: usize = 391;
/// 賃貸ヘッダーレコードのセル数
pub const HEADER_RECORD_CELLS: usize = 9;
/// パノラマデータレコードのセル数
pub const PANORAMA_RECORD_CELLS: usize = 34;

/// ダブルクォート囲みのCSV行ビルダー
///
/// セル値は事前にサニタイズ済みでダブルクォートを含まない前提。
#[derive(Debug, Default)]
pub struct CsvRow {
    cells: Vec<String>,
}

impl CsvRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cell: impl Into<String>) {
        self.cells.push(cell.into());
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// `"a","b",...` 形式の1行（改行つき）
    pub fn into_line(self) -> String {
        let mut line = String::new();
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                line.push(',');
            }
            line.push('"');
            line.push_str(cell);
            line.push('"');
        }
        line.push('\n');
        line
    }
}

/// 賃貸CSVのヘッダーレコード
pub fn header_record(config: &Config) -> String {
    let mut row = CsvRow::new();
    row.push("header"); // ヘッダ識別文字列
    row.push(config.csv_version.as_str()); // バージョン番号
    row.push("0"); // 処理種別
    row.push(config.homes_id.as_str()); // HOME'S会員番号
    row.push("0"); // 文字コード
    row.push(""); // 画像ファイルパス
    row.push("0"); // 路線設定パターン
    row.push("0"); // 書換モード
    row.push(config.test_mode.as_str()); // テストモード
    row.into_line()
}

/// パノラマCSVのヘッダーレコード
pub fn panorama_header_record(config: &Config) -> String {
    let mut row = CsvRow::new();
    row.push("header"); // ヘッダ識別文字列
    row.push(config.panorama_csv_version.as_str()); // バージョン番号
    row.push("0"); // 処理種別
    row.push(config.homes_id.as_str()); // HOME'S会員番号
    row.push("0"); // 文字コード
    row.push(""); // 画像ファイルパス
    row.push(config.panorama_test_mode.as_str()); // テストモード
    row.into_line()
}

/// 画像4セル（ローカルファイル名・修正日時・画像種別・コメント）
fn push_image_cells(row: &mut CsvRow, data: &mut RoomData) {
    let image = data.next_image();
    row.push(data.image_file_name(image));
    row.push(""); // ローカル修正日時は未使用
    row.push(data.image_picture_type_code(image));
    row.push(data.image_comment(image));
}

/// 賃貸CSVのデータレコード
///
/// 掲載禁止業者の物件はNone（行ごと除外）。
pub fn data_record(room: &Room, ctx: &ConvertContext) -> Option<String> {
    let mut data = RoomData::new(room, ctx);
    if data.is_forbidden_trader() {
        // 掲載禁止業者なら何もしない
        return None;
    }

    let now = ctx.now.format("%Y/%m/%d %H:%M:%S").to_string();
    let today = ctx.today().format("%Y/%m/%d").to_string();

    let mut row = CsvRow::new();

    // 物件基本情報
    row.push(data.room_code()); // 自社管理物件番号
    row.push(now); // 自社管理修正日時
    row.push(today); // 情報掲載期限日
    row.push("1"); // 公開可否
    row.push(data.is_managed()); // 自社物フラグ
    row.push("1"); // 状態
    row.push(""); // 物件種別
    row.push("0"); // 一括入力フラグ
    row.push("0"); // 投資用物件
    row.push(data.building_name()); // 建物名・物件名
    row.push(data.building_kana()); // 建物名フリガナ
    row.push("1"); // 物件名公開
    row.push(data.building_rooms()); // 総戸数・総区画数
    row.push("0"); // 空き物件数
    row.push(data.room_no()); // 空き物件内容（部屋番号）

    // 所在地
    row.push(data.postal_code()); // 郵便番号
    row.push(data.city_code()); // 所在地コード
    row.push(data.town_address()); // 所在地名称
    row.push(""); // 所在地詳細_表示部
    row.push(data.house_no()); // 所在地詳細_非表示部
    row.push(data.lat_lng()); // 緯度/経度

    // 交通
    row.push(data.railway_code(1)); // 路線1
    row.push(data.station_code(1)); // 駅1
    row.push(data.bus_stop(1)); // バス停名1
    row.push(data.bus_time(1)); // バス時間1
    row.push(data.walk_time(1)); // 徒歩距離1
    row.push(data.railway_code(2)); // 路線2
    row.push(data.station_code(2)); // 駅2
    row.push(data.bus_stop(2)); // バス停名2
    row.push(data.bus_time(2)); // バス時間2
    row.push(data.walk_time(2)); // 徒歩距離2
    row.push(""); // その他交通
    row.push(""); // 車所要時間

    // 土地関連（賃貸住居では未使用）
    row.push(""); // 地目
    row.push(""); // 用途地域
    row.push(""); // 都市計画
    row.push(""); // 構造・性能・仕様
    row.push(""); // 土地面積計測方式
    row.push(""); // 区画面積
    row.push(""); // 私道負担面積
    row.push(""); // 私道負担割合(分子/分母)
    row.push(""); // 土地持分(分子/分母)
    row.push(""); // セットバック
    row.push(""); // 構造・性能・仕様
    row.push(""); // 建ぺい率
    row.push(""); // 容積率

    // 接道関連（対象外マーク）
    row.push("*"); // 接道状況
    row.push("*"); // 接道方向1
    row.push("*"); // 接道間口1
    row.push("*"); // 接道種別1
    row.push("*"); // 接道幅員1
    row.push("*"); // 共有
    row.push("*"); // 接道方向2
    row.push("*"); // バス・トイレ
    row.push("*"); // 接道種別2
    row.push("*"); // バス・トイレ
    row.push("*"); // 位置指定道路2
    row.push("*"); // 接道方向3
    row.push("*"); // セキュリティ
    row.push("*"); // 接道種別3
    row.push("*"); // 接道幅員3
    row.push("*"); // 位置指定道路3
    row.push("*"); // 接道方向4
    row.push("*"); // 接道間口4
    row.push("*"); // 接道種別4
    row.push("*"); // 接道幅員4
    row.push("*"); // 位置指定道路4
    row.push(""); // 土地権利(借地権種類)
    row.push(""); // 国土法届出
    row.push("*"); // 法令上の制限

    // 建物
    row.push(data.structure_code()); // 建物構造
    row.push("*"); // 建物面積計測方式
    row.push(data.room_area()); // 建物面積・専有面積
    row.push(""); // 敷地全体面積
    row.push(""); // 延べ床面積
    row.push(""); // 建築面積
    row.push(data.building_floors()); // 建物階数(地上)
    row.push(data.building_undergrounds()); // 建物階数(地下)
    row.push(data.build_year_month()); // 築年月
    row.push(data.new_build()); // 新築・未入居フラグ
    row.push(""); // 管理人
    row.push(""); // 管理形態
    row.push(""); // 管理組合有無
    row.push(""); // 管理会社名

    // 部屋
    row.push(data.room_floor()); // 部屋階数
    row.push(data.balcony_area()); // バルコニー面積
    row.push(data.direction_code()); // 向き
    row.push(data.room_count()); // 間取部屋数
    row.push(data.layout_type_code()); // 間取部屋種類

    // 間取1〜10（種類・畳数・所在階・室数）
    for i in 0..10 {
        row.push(data.layout_room_type_code(i));
        row.push(data.layout_room_area(i));
        row.push(""); // 間取(所在階)
        row.push(""); // 間取(室数)
    }
    row.push(""); // 間取り備考

    // 紹介文
    row.push(data.web_catch_copy()); // 物件の特徴
    row.push(""); // 物件の特徴_A
    row.push(""); // 物件の特徴_B
    row.push(data.web_appeal()); // 備考
    row.push(""); // 備考OEM_A
    row.push(""); // 備考OEM_B
    row.push(""); // URL
    row.push(""); // 社内用メモ

    // 賃料・費用
    row.push(data.rent()); // 賃料・価格
    row.push("1"); // 価格公開フラグ
    row.push(""); // 価格状態
    row.push(""); // 税金
    row.push(""); // 税額
    row.push(""); // 坪単価
    row.push(data.condo_fees()); // 共益費・管理費
    row.push(""); // 共益費・管理費 税
    row.push(data.reikin()); // 礼金・月数
    row.push(""); // 礼金 税
    row.push(data.shikikin()); // 敷金・月数
    row.push(data.hosyokin()); // 保証金・月数
    row.push(""); // 権利金
    row.push(""); // 権利金 税
    row.push(""); // 造作譲渡金
    row.push(""); // 造作譲渡金 税
    row.push(data.shikibiki()); // 償却・敷引金
    row.push(""); // 償却時期
    row.push(data.renewal_fee()); // 更新料
    row.push(""); // 満室時表面利回り
    row.push(""); // 現行利回り
    row.push(""); // 住宅保険料
    row.push(data.insurance_span()); // 住宅保険期間
    row.push(""); // 借地料
    row.push(data.contract_years()); // 契約期間(年)
    row.push(data.contract_months()); // 契約期間(月)
    row.push(""); // 契約期間(区分)
    row.push(""); // 修繕積立金
    row.push(""); // 修繕積立基金

    // その他費用1〜3
    for i in 0..3 {
        row.push(data.other_cost_name(i)); // その他費用名目
        row.push(data.other_cost(i)); // その他費用
    }

    // 成約情報（未使用）
    row.push(""); // 成約価格
    row.push(""); // 成約日
    row.push(""); // 成約税金フラグ
    row.push(""); // 成約税額

    // 駐車場
    row.push(data.garage_fee()); // 駐車場料金
    row.push(data.garage_fee_tax_code()); // 駐車場料金 税
    row.push(""); // 駐車場区分
    row.push(data.garage_distance()); // 駐車場距離
    row.push(""); // 駐車場空き台数
    row.push(""); // 駐車場備考

    // 入居時期
    row.push(""); // 現況
    row.push(data.live_start_type()); // 引渡/入居時期
    row.push(data.live_start_year_month()); // 引渡/入居年月
    row.push(data.live_start_day()); // 引渡/入居旬

    // 学区・周辺施設
    row.push(data.elementary_school()); // 小学校名
    row.push(data.elementary_school_distance()); // 小学校距離
    row.push(""); // 小学校 学区コード
    row.push(data.junior_high_school()); // 中学校名
    row.push(data.junior_high_school_distance()); // 中学校距離
    row.push(""); // 中学校 学区コード
    row.push(data.convenience_distance()); // コンビニ距離
    row.push(data.super_distance()); // スーパー距離
    row.push(data.hospital_distance()); // 総合病院距離

    // 取引情報
    row.push(""); // 物件担当者名
    row.push("6"); // 取引態様
    row.push(data.publish_date()); // 掲載確認日
    row.push("0"); // 客付
    row.push(""); // 媒介契約年月日
    row.push(""); // 仲介手数料
    row.push("0"); // 分配率(客付分)
    row.push("0"); // 手数料負担(借主)
    row.push(""); // 客付け業者へのメッセージ

    // 元付
    row.push(data.trader_company()); // 元付名称
    row.push(""); // 元付郵便番号
    row.push(""); // 元付所在地コード
    row.push(""); // 元付所在地詳細
    row.push(data.trader_company_tel()); // 元付電話番号
    row.push(""); // 元付FAX番号
    row.push(data.trader_company_staff()); // 元付担当者名
    row.push(""); // 元付備考

    // オーナー（未使用）
    row.push(""); // オーナー名称
    row.push(""); // オーナー郵便番号
    row.push(""); // オーナー所在地コード
    row.push(""); // オーナー所在地詳細
    row.push(""); // オーナー電話番号
    row.push(""); // オーナーFAX番号
    row.push(""); // オーナー備考

    // オープンハウス（未使用）
    row.push(""); // 開始日
    row.push(""); // 終了日
    row.push(""); // 実施時間
    row.push(""); // 備考

    // 画像1〜6
    for _ in 0..6 {
        push_image_cells(&mut row, &mut data);
    }

    row.push(""); // 所属グループ
    row.push(data.equipment_codes()); // 設備・条件
    row.push(""); // おすすめポイント数
    row.push(""); // 容積率制限備考
    row.push(""); // 建築条件備考
    row.push(""); // 施工会社名
    row.push(""); // 建築確認番号
    row.push(data.building_code()); // 自社管理建物番号

    // 保証会社
    row.push(data.guarantee_fee_type_code()); // 保証会社の利用
    row.push(""); // 保証会社名
    row.push(data.guarantee_fee()); // 保証会社利用料
    row.push(""); // 引渡/入居時期相談内容

    // 特優賃（未使用）
    row.push(""); // 入居負担額上限
    row.push(""); // 入居負担額下限
    row.push(""); // 料金変動区分
    row.push(""); // 上昇率
    row.push(""); // 家賃補助年数
    row.push(""); // 備考

    // リフォーム・リノベーション
    row.push(""); // リフォーム実施年月
    row.push(""); // リフォーム箇所
    row.push(""); // リフォーム箇所その他
    row.push(""); // リフォーム備考
    row.push(data.reform_year_month()); // リノベーション実施年月
    row.push(data.reform_comment()); // リノベーション内容

    // 画像7〜30
    for _ in 0..24 {
        push_image_cells(&mut row, &mut data);
    }

    // 追加項目
    row.push(""); // 広告料
    row.push(data.structure_addition()); // 建物構造その他
    row.push(data.key_change_cost()); // 鍵交換費用
    row.push(data.cleaning_cost()); // 室内清掃費用
    row.push(data.shopping_street_distance()); // 商店街距離
    row.push(data.drug_store_distance()); // ドラッグストア距離
    row.push(data.park_distance()); // 公園距離
    row.push(data.bank_distance()); // 銀行距離
    row.push(""); // その他名
    row.push(""); // その他距離
    row.push(data.include_garage()); // 契約形態
    row.push(data.free_rent_span()); // フリーレント期間
    row.push(data.free_rent_next_month()); // フリーレント賃料発生タイミング
    row.push(""); // フリーレント備考
    row.push(""); // カスタマイズ
    row.push(""); // カスタマイズ
    row.push(""); // カスタマイズ
    row.push(""); // 鍵保管場所
    row.push(""); // 鍵保管場所
    row.push(""); // 鍵備考
    row.push(""); // 物件公開区分
    row.push(""); // 画像ダウンロード許可
    row.push("1"); // レコード終了マーク

    Some(row.into_line())
}

/// パノラマCSVのデータレコード
///
/// パノラマを持たない物件・掲載禁止業者の物件はNone。
pub fn panorama_record(room: &Room, ctx: &ConvertContext) -> Option<String> {
    let mut data = RoomData::new(room, ctx);
    if data.is_forbidden_trader() || !data.has_panoramas() {
        return None;
    }

    let mut row = CsvRow::new();
    row.push(data.panorama_local_code()); // パノラマローカルID
    row.push(data.panorama_set_name()); // セット名
    row.push(data.publish_panoramas()); // 掲載フラグ

    // パノラマ1〜10（ファイル名・レンズ種別・パノラマ種別）
    for _ in 0..10 {
        let panorama = data.next_panorama();
        row.push(data.panorama_file_name(panorama));
        row.push(data.panorama_lens_type(panorama));
        row.push(data.panorama_type_code(panorama));
    }

    row.push("1"); // レコード終了マーク
    Some(row.into_line())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_row_quoting() {
        let mut row = CsvRow::new();
        row.push("header");
        row.push("");
        row.push("4.1");
        assert_eq!(row.into_line(), "\"header\",\"\",\"4.1\"\n");
    }

    #[test]
    fn test_header_record_layout() {
        let config = Config {
            csv_version: "4.1".into(),
            homes_id: "M123456".into(),
            test_mode: "1".into(),
            ..Default::default()
        };

        let line = header_record(&config);
        assert_eq!(
            line,
            "\"header\",\"4.1\",\"0\",\"M123456\",\"0\",\"\",\"0\",\"0\",\"1\"\n"
        );
        assert_eq!(line.matches('"').count() / 2, HEADER_RECORD_CELLS);
    }

    #[test]
    fn test_panorama_header_record_layout() {
        let config = Config {
            panorama_csv_version: "1.0".into(),
            homes_id: "M123456".into(),
            panorama_test_mode: "0".into(),
            ..Default::default()
        };

        assert_eq!(
            panorama_header_record(&config),
            "\"header\",\"1.0\",\"0\",\"M123456\",\"0\",\"\",\"0\"\n"
        );
    }
}
