//! Core geometry types for the desktop environment
//!
//! All coordinates are CSS pixels in viewport space: origin at the
//! top-left corner, x grows right, y grows down.

mod rect;
mod size;
mod vec2;

pub use rect::Rect;
pub use size::Size;
pub use vec2::Vec2;
