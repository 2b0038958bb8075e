use serde::{Deserialize, Serialize};

use crate::math::{Size, Vec2};

/// Distance kept between an element and each viewport edge
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Margins {
    pub const fn uniform(m: f32) -> Self {
        Self {
            left: m,
            top: m,
            right: m,
            bottom: m,
        }
    }

    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

/// Allowed range for an element's top-left corner
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Range `[margin, viewport - margin - element]` on each axis
    pub fn for_element(viewport: Size, margins: Margins, element: Size) -> Self {
        Self {
            min: Vec2::new(margins.left, margins.top),
            max: Vec2::new(
                viewport.width - margins.right - element.width,
                viewport.height - margins.bottom - element.height,
            ),
        }
    }
}

/// Clamp one axis; an element larger than its range pins to the minimum
pub fn clamp_axis(value: f32, min: f32, max: f32) -> f32 {
    if max < min {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Clamp a top-left position into `bounds`
pub fn clamp_to_bounds(pos: Vec2, bounds: &Bounds) -> Vec2 {
    Vec2::new(
        clamp_axis(pos.x, bounds.min.x, bounds.max.x),
        clamp_axis(pos.y, bounds.min.y, bounds.max.y),
    )
}

/// Live position while dragging: pointer minus grab offset, clamped
pub fn drag_position(pointer: Vec2, grab_offset: Vec2, bounds: &Bounds) -> Vec2 {
    clamp_to_bounds(pointer - grab_offset, bounds)
}
