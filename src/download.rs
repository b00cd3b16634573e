//! 画像ダウンロードと送信済み履歴
//!
//! ログディレクトリ内の同名ファイルの存在が「送信済み」の印。実行を
//! またいだ重複送信はこのマーカーで防ぐ。ダウンロードと書き込みの失敗は
//! すべて握りつぶし、該当物件は画像なしで処理を続行する（仕様通り）。

use crate::error::Result;
use chrono::{DateTime, Local, NaiveDate};
use std::path::Path;
use std::time::Duration;
use walkdir::WalkDir;

/// リモート取得の差し替え点（テストではスタブに置き換える）
pub trait RemoteFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}

/// reqwestによる実フェッチャ
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self { client })
    }
}

impl RemoteFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let bytes = self.client.get(url).send()?.error_for_status()?.bytes()?;
        Ok(bytes.to_vec())
    }
}

/// URL末尾のファイル名
pub fn url_file_name(url: &str) -> Option<&str> {
    let name = url.rsplit('/').next().unwrap_or("");
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// 画像を一度だけダウンロードする
///
/// - ログディレクトリに同名ファイルがあれば送信済みとして何もしない
/// - 画像ディレクトリへは存在しない場合のみ書く（同一実行内の重複対策）
/// - ログは常に書き、送信済みとして記録する
///
/// 失敗はすべて無視（エラーも戻り値もなし）。
pub fn ensure_downloaded(
    fetcher: &dyn RemoteFetcher,
    url: &str,
    image_dir: &Path,
    log_dir: &Path,
) {
    let Some(file_name) = url_file_name(url) else {
        return;
    };

    let log_path = log_dir.join(file_name);
    if log_path.exists() {
        // 過去に送信した履歴がある
        return;
    }

    let Ok(image) = fetcher.fetch(url) else {
        return;
    };

    let image_path = image_dir.join(file_name);
    if !image_path.exists() && std::fs::write(&image_path, &image).is_err() {
        return;
    }

    let _ = std::fs::write(&log_path, &image);
}

/// 当日より古いファイルを送信対象ディレクトリから削除する
///
/// 個々の削除失敗は無視する。
pub fn prune_stale_files(dir: &Path, today: NaiveDate) {
    for entry in WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Ok(metadata) = entry.metadata() else {
            continue;
        };
        let Ok(modified) = metadata.modified() else {
            continue;
        };

        let file_date = DateTime::<Local>::from(modified).date_naive();
        if file_date < today {
            let _ = std::fs::remove_file(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use std::cell::RefCell;
    use tempfile::tempdir;

    /// フェッチ回数を数えるスタブ
    struct CountingFetcher {
        calls: RefCell<usize>,
        fail: bool,
    }

    impl CountingFetcher {
        fn new(fail: bool) -> Self {
            Self {
                calls: RefCell::new(0),
                fail,
            }
        }

        fn call_count(&self) -> usize {
            *self.calls.borrow()
        }
    }

    impl RemoteFetcher for CountingFetcher {
        fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            *self.calls.borrow_mut() += 1;
            if self.fail {
                Err(ConvertError::Config("fetch failure".into()))
            } else {
                Ok(b"image-bytes".to_vec())
            }
        }
    }

    #[test]
    fn test_url_file_name() {
        assert_eq!(
            url_file_name("http://example.jp/media/room/101.jpg"),
            Some("101.jpg")
        );
        assert_eq!(url_file_name("http://example.jp/media/"), None);
        assert_eq!(url_file_name(""), None);
    }

    #[test]
    fn test_download_writes_image_and_marker() {
        let dir = tempdir().expect("Failed to create temp dir");
        let image_dir = dir.path().join("image");
        let log_dir = dir.path().join("log");
        std::fs::create_dir_all(&image_dir).unwrap();
        std::fs::create_dir_all(&log_dir).unwrap();

        let fetcher = CountingFetcher::new(false);
        ensure_downloaded(&fetcher, "http://x.jp/p/a.jpg", &image_dir, &log_dir);

        assert_eq!(fetcher.call_count(), 1);
        assert_eq!(std::fs::read(image_dir.join("a.jpg")).unwrap(), b"image-bytes");
        assert_eq!(std::fs::read(log_dir.join("a.jpg")).unwrap(), b"image-bytes");
    }

    #[test]
    fn test_marker_skips_second_download() {
        let dir = tempdir().expect("Failed to create temp dir");
        let image_dir = dir.path().join("image");
        let log_dir = dir.path().join("log");
        std::fs::create_dir_all(&image_dir).unwrap();
        std::fs::create_dir_all(&log_dir).unwrap();

        let fetcher = CountingFetcher::new(false);
        ensure_downloaded(&fetcher, "http://x.jp/p/a.jpg", &image_dir, &log_dir);
        ensure_downloaded(&fetcher, "http://x.jp/p/a.jpg", &image_dir, &log_dir);

        // 2回目はマーカーで打ち切られフェッチされない
        assert_eq!(fetcher.call_count(), 1);
    }

    #[test]
    fn test_marker_from_previous_run_skips_image_write() {
        let dir = tempdir().expect("Failed to create temp dir");
        let image_dir = dir.path().join("image");
        let log_dir = dir.path().join("log");
        std::fs::create_dir_all(&image_dir).unwrap();
        std::fs::create_dir_all(&log_dir).unwrap();

        // 前回実行の送信済み履歴
        std::fs::write(log_dir.join("a.jpg"), b"old").unwrap();

        let fetcher = CountingFetcher::new(false);
        ensure_downloaded(&fetcher, "http://x.jp/p/a.jpg", &image_dir, &log_dir);

        assert_eq!(fetcher.call_count(), 0);
        assert!(!image_dir.join("a.jpg").exists());
    }

    #[test]
    fn test_fetch_failure_is_swallowed_and_leaves_no_marker() {
        let dir = tempdir().expect("Failed to create temp dir");
        let image_dir = dir.path().join("image");
        let log_dir = dir.path().join("log");
        std::fs::create_dir_all(&image_dir).unwrap();
        std::fs::create_dir_all(&log_dir).unwrap();

        let fetcher = CountingFetcher::new(true);
        ensure_downloaded(&fetcher, "http://x.jp/p/a.jpg", &image_dir, &log_dir);

        // エラーは握りつぶされ、マーカーも残らない（次回再試行できる）
        assert!(!image_dir.join("a.jpg").exists());
        assert!(!log_dir.join("a.jpg").exists());
    }

    #[test]
    fn test_prune_keeps_todays_files() {
        let dir = tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("today.jpg"), b"x").unwrap();

        prune_stale_files(dir.path(), Local::now().date_naive());

        assert!(dir.path().join("today.jpg").exists());
    }

    #[test]
    fn test_prune_removes_files_modified_before_given_date() {
        let dir = tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("old.jpg"), b"x").unwrap();

        // 基準日を翌日にすると今日書いたファイルは「前日以前」になる
        let tomorrow = Local::now().date_naive().succ_opt().unwrap();
        prune_stale_files(dir.path(), tomorrow);

        assert!(!dir.path().join("old.jpg").exists());
    }

    #[test]
    fn test_prune_ignores_missing_dir() {
        prune_stale_files(Path::new("/nonexistent/image-dir"), Local::now().date_naive());
    }

    #[test]
    fn test_existing_image_not_overwritten() {
        let dir = tempdir().expect("Failed to create temp dir");
        let image_dir = dir.path().join("image");
        let log_dir = dir.path().join("log");
        std::fs::create_dir_all(&image_dir).unwrap();
        std::fs::create_dir_all(&log_dir).unwrap();

        std::fs::write(image_dir.join("a.jpg"), b"current-run").unwrap();

        let fetcher = CountingFetcher::new(false);
        ensure_downloaded(&fetcher, "http://x.jp/p/a.jpg", &image_dir, &log_dir);

        // 画像ディレクトリは温存、ログは新しい内容で書かれる
        assert_eq!(std::fs::read(image_dir.join("a.jpg")).unwrap(), b"current-run");
        assert_eq!(std::fs::read(log_dir.join("a.jpg")).unwrap(), b"image-bytes");
    }
}
