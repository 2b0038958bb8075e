//! Thumbnail strip geometry

use crate::config::OverviewConfig;
use crate::math::{Rect, Size, Vec2};

/// One desktop thumbnail in the overview strip
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thumbnail {
    pub index: usize,
    pub rect: Rect,
    /// Scale from desktop coordinates to thumbnail coordinates
    pub scale: f32,
}

impl Thumbnail {
    /// Map a desktop-space point into this thumbnail
    pub fn project(&self, point: Vec2) -> Vec2 {
        self.rect.position() + point * self.scale
    }
}

/// Lay out `count` thumbnails centred on the viewport's midline
///
/// Thumbnails share the viewport's aspect ratio and are scaled to
/// `thumbnail_height`.
pub fn thumbnail_layout(count: usize, viewport: Size, config: &OverviewConfig) -> Vec<Thumbnail> {
    if count == 0 || viewport.height <= 0.0 {
        return Vec::new();
    }
    let scale = config.thumbnail_height / viewport.height;
    let width = viewport.width * scale;
    let pitch = width + config.thumbnail_gap;
    let mid = (count as f32 - 1.0) / 2.0;
    let left = viewport.width / 2.0 - width / 2.0;

    (0..count)
        .map(|index| Thumbnail {
            index,
            rect: Rect::new(
                left + (index as f32 - mid) * pitch,
                config.thumbnail_gap,
                width,
                config.thumbnail_height,
            ),
            scale,
        })
        .collect()
}

/// Index of the thumbnail under `point`
pub fn thumbnail_at(thumbnails: &[Thumbnail], point: Vec2) -> Option<usize> {
    thumbnails
        .iter()
        .find(|t| t.rect.contains(point))
        .map(|t| t.index)
}
