//! Geometry and snap engine
//!
//! Pure functions shared by windows and desktop icons:
//! - clamping a proposed position into the viewport
//! - snapping a raw position onto the icon grid
//! - the debounced edge-snap state machine for windows

mod clamp;
mod edge_snap;
mod snap;

pub use clamp::{clamp_axis, clamp_to_bounds, drag_position, Bounds, Margins};
pub use edge_snap::{band_at, snap_target, EdgeSnap, SnapDirection, SnapPhase};
pub use snap::{snap_axis, snap_to_grid};
