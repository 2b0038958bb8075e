//! Mission Control
//!
//! Virtual desktop bookkeeping, the overview's open/close timeline, and the
//! thumbnail strip layout.

mod desktops;
mod layout;
mod overview;

pub use desktops::{Desktop, DesktopEntry, MissionControl};
pub use layout::{thumbnail_at, thumbnail_layout, Thumbnail};
pub use overview::{Overview, OverviewEvent, OverviewPhase};
