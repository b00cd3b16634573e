use clap::Parser;
use homes_converter::cli::{Cli, Commands};
use homes_converter::config::Config;
use homes_converter::converter::{ConvertContext, Converter};
use homes_converter::error::Result;
use homes_converter::progress::ConsoleProgress;

fn main() {
    if let Err(e) = run() {
        // どの段階の失敗もここで1つのメッセージに集約する
        eprintln!("\n❌ エラーが発生しました: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert { code_master } => {
            println!("🏠 homes-converter - 空室データ変換\n");

            let mut config = Config::load()?;
            if let Some(path) = code_master {
                config.code_master_path = Some(path);
            }

            if cli.verbose {
                println!("APIエンドポイント: {}", config.api_url);
                println!("CSVバージョン: {}\n", config.csv_version);
            }

            let ctx = ConvertContext::new(config)?;
            let converter = Converter::new(&ctx);
            let mut progress = ConsoleProgress::new();
            converter.run(&mut progress)?;

            println!("\n✅ 変換完了: {}", ctx.paths.output_dir.display());
        }

        Commands::Config { init, show } => {
            let config = Config::load()?;

            if init {
                config.save()?;
                println!("✔ 設定ファイルを作成しました: {}", Config::config_path()?.display());
            }

            if show || !init {
                println!("設定:");
                println!("  APIエンドポイント: {}", config.api_url);
                println!("  APIキー: {}", if config.api_key.is_empty() { "未設定" } else { "設定済み" });
                println!("  CSVバージョン: {}", config.csv_version);
                println!("  HOME'S会員番号: {}", config.homes_id);
                println!("  消費税率: {}", config.tax_rate);
                println!("  部屋画像優先数: {}", config.prioritized_room_image_count);
                println!("  ダウンロード画像URL: {}", config.download_image_url);
            }
        }
    }

    Ok(())
}
