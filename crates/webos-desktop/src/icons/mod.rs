//! Desktop icon grid engine
//!
//! Icons live on a sparse grid. The grid coordinate is the source of truth;
//! pixel positions are derived from it and only diverge while a drag is in
//! flight. Collisions are resolved at drop time:
//!
//! - single-icon drops onto an occupied cell are rejected and revert
//! - group drops search outward for the nearest free cell per icon
//! - a viewport shrink relocates icons that fell off the grid
//!
//! A full grid never stacks icons: inserts report `GridFull`, and icons
//! with nowhere to go are removed until room frees up.

mod grid;
mod icon;
mod layout;
mod marquee;
mod search;

pub use grid::{IconGrid, Placement};
pub use icon::{GridCoord, IconRecord};
pub use layout::GridLayout;
pub use marquee::Marquee;
pub use search::{nearest_free_cell, OccupiedSet};
