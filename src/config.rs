use crate::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 変換設定
///
/// 旧システムのconfig.iniに相当する。`~/.config/homes-converter/config.json`
/// に保存し、APIエンドポイントとHOME'S出力の各種識別子を持つ。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 空室APIのURLテンプレート（`{key}`がアクセスキーに置換される）
    pub api_url: String,
    /// APIアクセスキー
    pub api_key: String,
    /// ダウンロードに使う画像URLのフィールド名（file_url / medium_file_url）
    pub download_image_url: String,
    /// 建物画像より優先する部屋画像の枚数（0で制限なし）
    pub prioritized_room_image_count: usize,
    /// 消費税率
    pub tax_rate: f64,

    /// 賃貸CSVのバージョン番号
    pub csv_version: String,
    /// HOME'S会員番号
    pub homes_id: String,
    /// 賃貸CSVのテストモード
    pub test_mode: String,
    /// パノラマCSVのバージョン番号
    pub panorama_csv_version: String,
    /// パノラマCSVのテストモード
    pub panorama_test_mode: String,
    /// パノラマレンズ種別
    pub panorama_lens_type: String,

    /// 元付名称の既定値（業者情報が無い先物物件用）
    pub management_company: String,
    /// 元付電話番号の既定値
    pub management_company_tel: String,

    /// HTTPタイムアウト（秒）
    pub timeout_seconds: u64,
    /// コードマスタJSONのパス（未指定なら同梱マスタ）
    pub code_master_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8004/api/vacancy_rooms/{key}/".into(),
            api_key: String::new(),
            download_image_url: "medium_file_url".into(),
            prioritized_room_image_count: 0,
            tax_rate: 0.10,
            csv_version: "4.1".into(),
            homes_id: String::new(),
            test_mode: "0".into(),
            panorama_csv_version: "1.0".into(),
            panorama_test_mode: "0".into(),
            panorama_lens_type: "1".into(),
            management_company: String::new(),
            management_company_tel: String::new(),
            timeout_seconds: 120,
            code_master_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ConvertError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("homes-converter").join("config.json"))
    }

    /// アクセスキーを埋め込んだAPIエンドポイント
    pub fn endpoint(&self) -> String {
        self.api_url.replace("{key}", &self.api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_embeds_key() {
        let config = Config {
            api_url: "http://example.jp/api/rooms/{key}/".into(),
            api_key: "abc123".into(),
            ..Default::default()
        };
        assert_eq!(config.endpoint(), "http://example.jp/api/rooms/abc123/");
    }

    #[test]
    fn test_default_roundtrip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let loaded: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.csv_version, config.csv_version);
        assert_eq!(loaded.tax_rate, config.tax_rate);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let loaded: Config = serde_json::from_str(r#"{"api_key": "xyz"}"#).unwrap();
        assert_eq!(loaded.api_key, "xyz");
        assert_eq!(loaded.download_image_url, "medium_file_url");
        assert_eq!(loaded.timeout_seconds, 120);
    }
}
