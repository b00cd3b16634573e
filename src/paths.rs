use crate::error::{ConvertError, Result};
use std::path::PathBuf;

/// 出力先ディレクトリ構成
///
/// `~/Documents/Convert/Homes/<CSVバージョン>/` の下に賃貸用とパノラマ用の
/// ツリーを持つ。logディレクトリは送信済み履歴の置き場で、実行をまたいで
/// 消去しない。
#[derive(Debug, Clone)]
pub struct OutputPaths {
    /// 賃貸データ出力ディレクトリ
    pub output_dir: PathBuf,
    /// 賃貸画像ディレクトリ（当回送信分）
    pub image_dir: PathBuf,
    /// 賃貸ログディレクトリ
    pub log_dir: PathBuf,
    /// 賃貸画像ログディレクトリ（送信済み履歴）
    pub image_log_dir: PathBuf,

    /// パノラマ出力ディレクトリ
    pub panorama_output_dir: PathBuf,
    /// パノラマ画像ディレクトリ
    pub panorama_image_dir: PathBuf,
    /// パノラマログディレクトリ
    pub panorama_log_dir: PathBuf,
    /// パノラマ画像ログディレクトリ
    pub panorama_image_log_dir: PathBuf,
}

impl OutputPaths {
    pub fn new(csv_version: &str) -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| ConvertError::Config("ホームディレクトリが見つかりません".into()))?;
        let base = home
            .join("Documents")
            .join("Convert")
            .join("Homes")
            .join(csv_version);
        Ok(Self::under(base))
    }

    /// 指定ディレクトリの下に構成を組む（テスト用にも使う）
    pub fn under(base: PathBuf) -> Self {
        let output_dir = base.join("rent");
        let log_dir = output_dir.join("log");
        let panorama_output_dir = base.join("panorama");
        let panorama_log_dir = panorama_output_dir.join("log");

        Self {
            image_dir: output_dir.join("image"),
            image_log_dir: log_dir.join("image"),
            panorama_image_dir: panorama_output_dir.join("image"),
            panorama_image_log_dir: panorama_log_dir.join("image"),
            output_dir,
            log_dir,
            panorama_output_dir,
            panorama_log_dir,
        }
    }

    /// 出力用ディレクトリの準備（無ければ作成）
    pub fn prepare(&self) -> Result<()> {
        for dir in [
            &self.output_dir,
            &self.image_dir,
            &self.log_dir,
            &self.image_log_dir,
            &self.panorama_output_dir,
            &self.panorama_image_dir,
            &self.panorama_log_dir,
            &self.panorama_image_log_dir,
        ] {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_tree_layout() {
        let paths = OutputPaths::under(PathBuf::from("/base/4.1"));
        assert_eq!(paths.image_dir, PathBuf::from("/base/4.1/rent/image"));
        assert_eq!(paths.image_log_dir, PathBuf::from("/base/4.1/rent/log/image"));
        assert_eq!(
            paths.panorama_image_log_dir,
            PathBuf::from("/base/4.1/panorama/log/image")
        );
    }

    #[test]
    fn test_prepare_creates_all_dirs() {
        let dir = tempdir().expect("Failed to create temp dir");
        let paths = OutputPaths::under(dir.path().to_path_buf());
        paths.prepare().expect("ディレクトリ準備に失敗");

        assert!(paths.image_dir.is_dir());
        assert!(paths.image_log_dir.is_dir());
        assert!(paths.panorama_image_dir.is_dir());
        assert!(paths.panorama_image_log_dir.is_dir());

        // 既存でもエラーにならない
        paths.prepare().expect("再実行で失敗");
    }
}
