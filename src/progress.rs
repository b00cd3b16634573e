//! 進捗通知
//!
//! 変換処理は節目ごとに同期的にオブザーバを呼ぶ。CLIではindicatifの
//! プログレスバーに流し、テストでは無音の実装を使う。

use indicatif::{ProgressBar, ProgressStyle};

/// 変換処理からの進捗通知を受けるオブザーバ
pub trait ProgressObserver {
    /// 状態メッセージ（データ取得中、など）
    fn message(&mut self, text: &str);

    /// 件数つき工程の開始
    fn begin_stage(&mut self, total: u64);

    /// 処理済み件数の更新
    fn advance(&mut self, current: u64);
}

/// コンソール用プログレス表示
pub struct ConsoleProgress {
    bar: Option<ProgressBar>,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self { bar: None }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for ConsoleProgress {
    fn message(&mut self, text: &str) {
        match &self.bar {
            Some(bar) if !bar.is_finished() => bar.println(format!("【{}】", text)),
            _ => println!("【{}】", text),
        }
    }

    fn begin_stage(&mut self, total: u64) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }

        let bar = ProgressBar::new(total);
        let style = ProgressStyle::with_template("{bar:40} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        self.bar = Some(bar);
    }

    fn advance(&mut self, current: u64) {
        if let Some(bar) = &self.bar {
            bar.set_position(current);
        }
    }
}

/// 何もしないオブザーバ（テスト用）
#[derive(Debug, Default)]
pub struct SilentProgress;

impl ProgressObserver for SilentProgress {
    fn message(&mut self, _text: &str) {}
    fn begin_stage(&mut self, _total: u64) {}
    fn advance(&mut self, _current: u64) {}
}
