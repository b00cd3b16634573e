//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use homes_converter::codes::CodeTables;
use homes_converter::error::ConvertError;
use std::path::Path;

/// コードマスタのファイルが無い場合
#[test]
fn test_missing_code_master_file() {
    let result = CodeTables::load(Some(Path::new("/nonexistent/code_master.json")));
    assert!(matches!(result, Err(ConvertError::CodeMaster(_))));
}

/// コードマスタのテーブルが欠けている場合
#[test]
fn test_incomplete_code_master() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("codes.json");
    std::fs::write(&path, r#"{"cities": {}, "railways": {}}"#).unwrap();

    let result = CodeTables::load(Some(&path));
    assert!(matches!(result, Err(ConvertError::CodeMaster(_))));
}

/// ConvertErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        ConvertError::Config("テスト設定エラー".to_string()),
        ConvertError::CodeMaster("codes.json".to_string()),
        ConvertError::EmptyBatch,
        ConvertError::CsvOutput(std::io::Error::new(std::io::ErrorKind::Other, "disk full")),
        ConvertError::SentFile(std::io::Error::new(std::io::ErrorKind::Other, "disk full")),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty());
    }
}

/// バッチ取得失敗のメッセージは利用者向けの文言
#[test]
fn test_empty_batch_message() {
    assert_eq!(
        format!("{}", ConvertError::EmptyBatch),
        "データの取得に失敗しました。"
    );
}
