use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "homes-converter")]
#[command(about = "賃貸物件データHOME'S CSVコンバータ", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 空室データを取得してCSVと画像を出力
    Convert {
        /// コードマスタJSONを差し替える
        #[arg(long)]
        code_master: Option<PathBuf>,
    },

    /// 設定を表示/初期化
    Config {
        /// 既定値で設定ファイルを作成
        #[arg(long)]
        init: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
