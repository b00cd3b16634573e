//! 変換処理
//!
//! 取得→準備→加工→確定の一本道で1バッチを処理する。途中での
//! リトライは無く、未処理のエラーはバッチ全体の中止になる。

pub mod costs;
pub mod geo;
pub mod layout;
pub mod media;
pub mod record;
pub mod room;
pub mod text;

use crate::api;
use crate::codes::CodeTables;
use crate::config::Config;
use crate::download::{self, HttpFetcher, RemoteFetcher};
use crate::error::{ConvertError, Result};
use crate::model::Room;
use crate::paths::OutputPaths;
use crate::progress::ProgressObserver;
use chrono::{Local, NaiveDate, NaiveDateTime};
use std::fs::File;
use std::io::{BufWriter, Write};

/// 賃貸CSVのファイル名
const RENT_CSV_NAME: &str = "homes.csv";
/// パノラマCSVのファイル名
const PANORAMA_CSV_NAME: &str = "panorama.csv";
/// 送信制御ファイルのファイル名
const SENT_FILE_NAME: &str = "sent";

/// 変換コンテキスト
///
/// 設定・コードマスタ・出力先・時刻・フェッチャを1つにまとめ、
/// 起動時に組んで各コンポーネントへ参照で渡す。時刻は実行中
/// 1サンプルに固定し、全行で同じタイムスタンプを使う。
pub struct ConvertContext {
    pub config: Config,
    pub codes: CodeTables,
    pub paths: OutputPaths,
    pub now: NaiveDateTime,
    pub fetcher: Box<dyn RemoteFetcher>,
}

impl ConvertContext {
    pub fn new(config: Config) -> Result<Self> {
        let codes = CodeTables::load(config.code_master_path.as_deref())?;
        let paths = OutputPaths::new(&config.csv_version)?;
        let fetcher: Box<dyn RemoteFetcher> =
            Box::new(HttpFetcher::new(config.timeout_seconds)?);

        Ok(Self {
            config,
            codes,
            paths,
            now: Local::now().naive_local(),
            fetcher,
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }
}

/// バッチコンバータ
pub struct Converter<'a> {
    ctx: &'a ConvertContext,
}

impl<'a> Converter<'a> {
    pub fn new(ctx: &'a ConvertContext) -> Self {
        Self { ctx }
    }

    /// コンバートの実行
    ///
    /// 取得以降の失敗は1つの失敗通知に集約してから呼び出し元へ返す。
    pub fn run(&self, progress: &mut dyn ProgressObserver) -> Result<()> {
        progress.message("データ取得中");
        let rooms = match api::fetch_rooms(&self.ctx.config) {
            Ok(rooms) => rooms,
            Err(e) => {
                progress.message("データ取得失敗");
                return Err(e);
            }
        };
        progress.message("データ取得済");

        match self.convert_rooms(&rooms.list, progress) {
            Ok(()) => Ok(()),
            Err(e) => {
                progress.message("エラーが発生しました。");
                Err(e)
            }
        }
    }

    /// 準備→加工→確定の実行
    fn convert_rooms(
        &self,
        rooms: &[Room],
        progress: &mut dyn ProgressObserver,
    ) -> Result<()> {
        progress.message("画像ディレクトリ準備中");
        self.prepare_image_dirs()?;
        progress.message("画像ディレクトリ準備済");

        let room_count = rooms.len();
        progress.message(&format!("データ加工中： {}件", room_count));
        progress.begin_stage(room_count as u64);

        self.output_csv_data(rooms, progress)?;
        self.output_panorama_csv_data(rooms)?;
        self.output_sent_files()?;

        progress.message(&format!("データ加工済： {}件", room_count));
        Ok(())
    }

    /// 送信対象画像ディレクトリの準備
    ///
    /// ツリーを作成し、前日以前の画像を削除する（削除失敗は無視）。
    fn prepare_image_dirs(&self) -> Result<()> {
        self.ctx.paths.prepare()?;
        download::prune_stale_files(&self.ctx.paths.image_dir, self.ctx.today());
        download::prune_stale_files(&self.ctx.paths.panorama_image_dir, self.ctx.today());
        Ok(())
    }

    /// 賃貸CSVの出力
    pub fn output_csv_data(
        &self,
        rooms: &[Room],
        progress: &mut dyn ProgressObserver,
    ) -> Result<()> {
        let path = self.ctx.paths.output_dir.join(RENT_CSV_NAME);
        let file = File::create(&path).map_err(ConvertError::CsvOutput)?;
        let mut writer = BufWriter::new(file);

        // ヘッダー部
        write_shift_jis(&mut writer, &record::header_record(&self.ctx.config))
            .map_err(ConvertError::CsvOutput)?;

        // データ部
        let mut count = 0;
        for room in rooms {
            if let Some(line) = record::data_record(room, self.ctx) {
                write_shift_jis(&mut writer, &line).map_err(ConvertError::CsvOutput)?;
            }

            count += 1;
            progress.advance(count);
        }

        writer.flush().map_err(ConvertError::CsvOutput)?;
        Ok(())
    }

    /// パノラマCSVの出力
    pub fn output_panorama_csv_data(&self, rooms: &[Room]) -> Result<()> {
        let path = self.ctx.paths.panorama_output_dir.join(PANORAMA_CSV_NAME);
        let file = File::create(&path).map_err(ConvertError::CsvOutput)?;
        let mut writer = BufWriter::new(file);

        write_shift_jis(&mut writer, &record::panorama_header_record(&self.ctx.config))
            .map_err(ConvertError::CsvOutput)?;

        for room in rooms {
            if let Some(line) = record::panorama_record(room, self.ctx) {
                write_shift_jis(&mut writer, &line).map_err(ConvertError::CsvOutput)?;
            }
        }

        writer.flush().map_err(ConvertError::CsvOutput)?;
        Ok(())
    }

    /// 物件送信制御ファイルの出力（空ファイルの存在が完了の合図）
    pub fn output_sent_files(&self) -> Result<()> {
        for dir in [
            &self.ctx.paths.output_dir,
            &self.ctx.paths.panorama_output_dir,
        ] {
            File::create(dir.join(SENT_FILE_NAME)).map_err(ConvertError::SentFile)?;
        }
        Ok(())
    }
}

/// Shift_JISに変換して書き込む
fn write_shift_jis(writer: &mut impl Write, text: &str) -> std::io::Result<()> {
    let (bytes, _, _) = encoding_rs::SHIFT_JIS.encode(text);
    writer.write_all(&bytes)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::path::Path;

    /// 固定バイト列を返すスタブフェッチャ
    pub struct StubFetcher;

    impl RemoteFetcher for StubFetcher {
        fn fetch(&self, _url: &str) -> Result<Vec<u8>> {
            Ok(b"test-image".to_vec())
        }
    }

    /// テスト用の変換コンテキスト（出力先は指定ディレクトリ）
    pub fn test_context(dir: &Path) -> ConvertContext {
        let codes = CodeTables::load(None).expect("同梱マスタの読み込みに失敗");
        let paths = OutputPaths::under(dir.to_path_buf());
        paths.prepare().expect("出力ディレクトリの準備に失敗");

        ConvertContext {
            config: Config::default(),
            codes,
            paths,
            now: Local::now().naive_local(),
            fetcher: Box::new(StubFetcher),
        }
    }
}
