//! 空室APIからのバッチ取得

use crate::config::Config;
use crate::error::{ConvertError, Result};
use crate::model::RoomList;
use std::time::Duration;

/// 空室データを一括取得する
///
/// レスポンスが空（0件）の場合は変換全体を中止する。
pub fn fetch_rooms(config: &Config) -> Result<RoomList> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()?;

    let response = client.get(config.endpoint()).send()?.error_for_status()?;
    let rooms: RoomList = response.json()?;

    if rooms.list.is_empty() {
        return Err(ConvertError::EmptyBatch);
    }

    Ok(rooms)
}
