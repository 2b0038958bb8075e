//! Pure geometry for user drags and edge resizes

use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Margins};
use crate::math::{Rect, Size, Vec2};

/// Edge or corner grabbed by a resize
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeEdge {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeEdge {
    /// Parse a compass direction ("n", "se", ...)
    pub fn from_direction(direction: &str) -> Option<Self> {
        match direction {
            "n" => Some(ResizeEdge::Top),
            "s" => Some(ResizeEdge::Bottom),
            "w" => Some(ResizeEdge::Left),
            "e" => Some(ResizeEdge::Right),
            "nw" => Some(ResizeEdge::TopLeft),
            "ne" => Some(ResizeEdge::TopRight),
            "sw" => Some(ResizeEdge::BottomLeft),
            "se" => Some(ResizeEdge::BottomRight),
            _ => None,
        }
    }

    pub fn moves_left(self) -> bool {
        matches!(
            self,
            ResizeEdge::Left | ResizeEdge::TopLeft | ResizeEdge::BottomLeft
        )
    }

    pub fn moves_right(self) -> bool {
        matches!(
            self,
            ResizeEdge::Right | ResizeEdge::TopRight | ResizeEdge::BottomRight
        )
    }

    pub fn moves_top(self) -> bool {
        matches!(
            self,
            ResizeEdge::Top | ResizeEdge::TopLeft | ResizeEdge::TopRight
        )
    }

    pub fn moves_bottom(self) -> bool {
        matches!(
            self,
            ResizeEdge::Bottom | ResizeEdge::BottomLeft | ResizeEdge::BottomRight
        )
    }
}

/// Size constraints of a window
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeLimits {
    pub min: Size,
    pub max: Option<Size>,
}

impl SizeLimits {
    pub fn max_width(&self) -> f32 {
        self.max.map_or(f32::INFINITY, |m| m.width)
    }

    pub fn max_height(&self) -> f32 {
        self.max.map_or(f32::INFINITY, |m| m.height)
    }

    /// Clamp a size into the limits; the minimum wins over a smaller maximum
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.min(self.max_width()).max(self.min.width),
            size.height.min(self.max_height()).max(self.min.height),
        )
    }
}

/// Allowed range for a dragged window's top-left corner
///
/// Horizontally the window stays fully inside the viewport; vertically it
/// never goes above `top_offset`.
pub fn drag_bounds(viewport: Size, window: Size, top_offset: f32) -> Bounds {
    Bounds::for_element(viewport, Margins::new(0.0, top_offset, 0.0, 0.0), window)
}

/// Geometry for one resize step
///
/// `start` is the rectangle at pointer down and `delta` the total pointer
/// travel since then. Right and bottom edges clamp to the limits. A left or
/// top edge that would shrink below the minimum keeps `previous` on that
/// axis so the opposite edge never moves.
pub fn resize_rect(
    start: Rect,
    previous: Rect,
    edge: ResizeEdge,
    delta: Vec2,
    limits: &SizeLimits,
    top_offset: f32,
) -> Rect {
    let mut next = previous;

    if edge.moves_right() {
        next.x = start.x;
        next.width = (start.width + delta.x)
            .min(limits.max_width())
            .max(limits.min.width);
    } else if edge.moves_left() {
        let width = start.width - delta.x;
        if width >= limits.min.width {
            let width = width.min(limits.max_width());
            next.x = start.right() - width;
            next.width = width;
        }
    }

    if edge.moves_bottom() {
        next.y = start.y;
        next.height = (start.height + delta.y)
            .min(limits.max_height())
            .max(limits.min.height);
    } else if edge.moves_top() {
        let height = start.height - delta.y;
        if height >= limits.min.height {
            let mut height = height.min(limits.max_height());
            let mut y = start.bottom() - height;
            if y < top_offset {
                y = top_offset;
                height = start.bottom() - top_offset;
            }
            if height >= limits.min.height {
                next.y = y;
                next.height = height;
            }
        }
    }

    next
}
