//! データレコードの統合テスト
//!
//! 固定スキーマの列数・位置が崩れていないことを行単位で検証する。

use chrono::Local;
use homes_converter::codes::CodeTables;
use homes_converter::config::Config;
use homes_converter::converter::record::{
    self, DATA_RECORD_CELLS, HEADER_RECORD_CELLS, PANORAMA_RECORD_CELLS,
};
use homes_converter::converter::ConvertContext;
use homes_converter::download::RemoteFetcher;
use homes_converter::error::Result;
use homes_converter::model::{Building, Panorama, Picture, Room, Trader};
use homes_converter::paths::OutputPaths;
use std::path::Path;
use tempfile::tempdir;

struct StubFetcher;

impl RemoteFetcher for StubFetcher {
    fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
        Ok(b"test-image".to_vec())
    }
}

fn context(dir: &Path) -> ConvertContext {
    let paths = OutputPaths::under(dir.to_path_buf());
    paths.prepare().expect("出力ディレクトリの準備に失敗");

    ConvertContext {
        config: Config {
            homes_id: "M123456".into(),
            ..Default::default()
        },
        codes: CodeTables::load(None).expect("コードマスタの読み込みに失敗"),
        paths,
        now: Local::now().naive_local(),
        fetcher: Box::new(StubFetcher),
    }
}

/// `"a","b",...` 形式の行をセルに分解する
fn split_cells(line: &str) -> Vec<String> {
    let trimmed = line
        .trim_end_matches('\n')
        .trim_start_matches('"')
        .trim_end_matches('"');
    trimmed.split("\",\"").map(|s| s.to_string()).collect()
}

fn sample_room() -> Room {
    Room {
        id: 123,
        room_no: "101".into(),
        room_area: 25.539,
        rent: Some(58000),
        building: Building {
            building_code: "B0001".into(),
            building_name: "山田ハイツ".into(),
            postal_code: "6008001".into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[test]
fn test_data_record_cell_count() {
    let dir = tempdir().expect("Failed to create temp dir");
    let ctx = context(dir.path());

    let room = sample_room();
    let line = record::data_record(&room, &ctx).expect("データレコードが生成されない");
    let cells = split_cells(&line);

    assert_eq!(cells.len(), DATA_RECORD_CELLS);
}

#[test]
fn test_key_cell_positions() {
    let dir = tempdir().expect("Failed to create temp dir");
    let ctx = context(dir.path());

    let room = sample_room();
    let line = record::data_record(&room, &ctx).unwrap();
    let cells = split_cells(&line);

    assert_eq!(cells[0], "B0001-0000123"); // 自社管理物件番号
    assert_eq!(cells[3], "1"); // 公開可否
    assert_eq!(cells[4], "0"); // 自社物フラグ（先物）
    assert_eq!(cells[9], "山田ハイツ"); // 建物名
    assert_eq!(cells[14], "101号室"); // 部屋番号
    assert_eq!(cells[15], "600-8001"); // 郵便番号
    assert_eq!(cells[16], "00000000000"); // 所在地コード（未対応→番兵値）
    assert_eq!(cells[72], "25.53"); // 専有面積（切り捨て）
    assert_eq!(cells[138], "58000"); // 賃料
    assert_eq!(cells[197], "6"); // 取引態様
    assert!(cells[249].starts_with("99900")); // 設備・条件
    assert_eq!(cells[390], "1"); // レコード終了マーク
}

#[test]
fn test_image_quadruplets_start_at_fixed_position() {
    let dir = tempdir().expect("Failed to create temp dir");
    let ctx = context(dir.path());

    let mut room = sample_room();
    room.pictures = vec![
        Picture {
            file_url: "http://x.jp/media/r1.jpg".into(),
            medium_file_url: "http://x.jp/media/m_r1.jpg".into(),
            comment: "南向きの居室".into(),
            ..Default::default()
        },
        Picture {
            file_url: "http://x.jp/media/r2.jpg".into(),
            medium_file_url: "http://x.jp/media/m_r2.jpg".into(),
            ..Default::default()
        },
    ];

    let line = record::data_record(&room, &ctx).unwrap();
    let cells = split_cells(&line);

    // 画像1（ローカルファイル名・修正日時・画像種別・コメント）
    assert_eq!(cells[224], "m_r1.jpg");
    assert_eq!(cells[225], "");
    assert_eq!(cells[227], "南向きの居室");
    // 画像2
    assert_eq!(cells[228], "m_r2.jpg");
    // 画像3以降は空
    assert_eq!(cells[232], "");

    // 設定のURLキーのファイル名でダウンロードされている
    assert!(ctx.paths.image_dir.join("m_r1.jpg").exists());
    assert!(ctx.paths.image_log_dir.join("m_r2.jpg").exists());
}

#[test]
fn test_forbidden_trader_yields_no_record() {
    let dir = tempdir().expect("Failed to create temp dir");
    let ctx = context(dir.path());

    let mut room = sample_room();
    room.building.trader = Trader {
        id: 9,
        no_portal: true,
        ..Default::default()
    };

    assert!(record::data_record(&room, &ctx).is_none());
}

#[test]
fn test_header_record_cell_count() {
    let config = Config::default();
    let cells = split_cells(&record::header_record(&config));
    assert_eq!(cells.len(), HEADER_RECORD_CELLS);
    assert_eq!(cells[0], "header");
}

#[test]
fn test_panorama_record_layout() {
    let dir = tempdir().expect("Failed to create temp dir");
    let ctx = context(dir.path());

    let mut room = sample_room();
    room.panoramas = vec![Panorama {
        file_url: "http://x.jp/pano/p1.jpg".into(),
        ..Default::default()
    }];

    let line = record::panorama_record(&room, &ctx).expect("パノラマレコードが生成されない");
    let cells = split_cells(&line);

    assert_eq!(cells.len(), PANORAMA_RECORD_CELLS);
    assert_eq!(cells[0], "B0001-0000123"); // ローカルID
    assert_eq!(cells[1], "山田ハイツ 101号室"); // セット名
    assert_eq!(cells[2], "1"); // 掲載フラグ
    assert_eq!(cells[3], "p1.jpg"); // パノラマ1ファイル名
    assert_eq!(cells[33], "1"); // レコード終了マーク
}

#[test]
fn test_panorama_record_absent_without_panoramas() {
    let dir = tempdir().expect("Failed to create temp dir");
    let ctx = context(dir.path());

    let room = sample_room();
    assert!(record::panorama_record(&room, &ctx).is_none());
}
