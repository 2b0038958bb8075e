use crate::math::Vec2;

use super::clamp::{clamp_to_bounds, Bounds};

/// Snap one axis onto the grid: `margin + round((raw - margin) / cell) * cell`
pub fn snap_axis(raw: f32, margin: f32, cell_size: f32) -> f32 {
    margin + ((raw - margin) / cell_size).round() * cell_size
}

/// Snap a raw position onto the grid, then clamp
///
/// Clamping after snapping is required: rounding at the grid edge can
/// land one cell outside the viewport.
pub fn snap_to_grid(raw: Vec2, origin: Vec2, cell_size: f32, bounds: &Bounds) -> Vec2 {
    let snapped = Vec2::new(
        snap_axis(raw.x, origin.x, cell_size),
        snap_axis(raw.y, origin.y, cell_size),
    );
    clamp_to_bounds(snapped, bounds)
}
