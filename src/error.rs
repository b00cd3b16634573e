use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("コードマスタの読み込みに失敗しました: {0}")]
    CodeMaster(String),

    #[error("データの取得に失敗しました。")]
    EmptyBatch,

    #[error("API呼び出しエラー: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("CSVデータ出力に失敗しました。")]
    CsvOutput(#[source] std::io::Error),

    #[error("物件送信制御ファイルの出力に失敗しました。")]
    SentFile(#[source] std::io::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
