//! 画像・パノラマの送出順決定
//!
//! 部屋と建物それぞれの画像プールから、外観→間取図→優先ルールに
//! 沿った順で1枚ずつ取り出す。取り出した画像はその場でダウンロード
//! される（送信済み履歴があればスキップ）。プールは取り出しのたびに
//! 消費され、尽きたら以降はNoneを返す。

use super::ConvertContext;
use crate::download;
use crate::model::{Panorama, Picture, Room};
use std::collections::VecDeque;

/// 部屋の画像セット
pub struct ImageSet<'a> {
    main_building_image: Option<&'a Picture>,
    layout_image: Option<&'a Picture>,
    room_images: VecDeque<&'a Picture>,
    building_images: VecDeque<&'a Picture>,
    room_image_count: usize,
}

impl<'a> ImageSet<'a> {
    pub fn new(room: &'a Room) -> Self {
        let mut room_images: Vec<&Picture> = room.pictures.iter().collect();
        let mut building_images: Vec<&Picture> = room.building.pictures.iter().collect();

        // メイン建物外観（部屋側優先、無ければ建物側）
        let mut main_building_image = None;
        if let Some(pos) = room_images
            .iter()
            .position(|p| p.picture_type.is_building_exterior)
        {
            main_building_image = Some(room_images.remove(pos));
        } else if let Some(pos) = building_images
            .iter()
            .position(|p| p.picture_type.is_building_exterior)
        {
            main_building_image = Some(building_images.remove(pos));
        }

        // 間取図（部屋側のみ）
        let mut layout_image = None;
        if let Some(pos) = room_images.iter().position(|p| p.picture_type.is_layout) {
            layout_image = Some(room_images.remove(pos));
        }

        Self {
            main_building_image,
            layout_image,
            room_images: room_images.into(),
            building_images: building_images.into(),
            room_image_count: 0,
        }
    }

    /// 次の画像の取得
    ///
    /// 外観→間取図→（優先ルールに従い）建物画像または部屋画像の順。
    /// 返す画像はダウンロード済みにしてから返す。
    pub fn next_image(&mut self, ctx: &ConvertContext) -> Option<&'a Picture> {
        let ans = if let Some(image) = self.main_building_image.take() {
            Some(image)
        } else if let Some(image) = self.layout_image.take() {
            Some(image)
        } else if self.building_image_is_prioritized(ctx.config.prioritized_room_image_count)
            && !self.building_images.is_empty()
        {
            self.building_images.pop_front()
        } else if let Some(image) = self.room_images.pop_front() {
            self.room_image_count += 1;
            Some(image)
        } else {
            None
        };

        if let Some(image) = ans {
            download::ensure_downloaded(
                ctx.fetcher.as_ref(),
                image.url_for(&ctx.config.download_image_url),
                &ctx.paths.image_dir,
                &ctx.paths.image_log_dir,
            );
        }

        ans
    }

    /// 建物画像を優先する場合はtrue
    ///
    /// 部屋画像が尽きたか、部屋画像の優先数が設定されていて既に
    /// その枚数を取得済みの場合。
    fn building_image_is_prioritized(&self, prioritized_room_image_count: usize) -> bool {
        if self.room_images.is_empty() {
            return true;
        }
        prioritized_room_image_count > 0 && self.room_image_count >= prioritized_room_image_count
    }
}

/// 部屋のパノラマセット
pub struct PanoramaSet<'a> {
    room_panoramas: VecDeque<&'a Panorama>,
    building_panoramas: VecDeque<&'a Panorama>,
}

impl<'a> PanoramaSet<'a> {
    pub fn new(room: &'a Room) -> Self {
        Self {
            room_panoramas: room.panoramas.iter().collect(),
            building_panoramas: room.building.panoramas.iter().collect(),
        }
    }

    /// 次のパノラマの取得（部屋側を使い切ってから建物側）
    pub fn next_panorama(&mut self, ctx: &ConvertContext) -> Option<&'a Panorama> {
        let ans = if self.room_panoramas.is_empty() {
            self.building_panoramas.pop_front()
        } else {
            self.room_panoramas.pop_front()
        };

        if let Some(panorama) = ans {
            download::ensure_downloaded(
                ctx.fetcher.as_ref(),
                &panorama.file_url,
                &ctx.paths.panorama_image_dir,
                &ctx.paths.panorama_image_log_dir,
            );
        }

        ans
    }
}
