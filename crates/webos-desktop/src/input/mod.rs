//! Pointer interaction primitives
//!
//! Low-level gesture detection shared by desktop icons and windows:
//! - [`HoldGesture`]: press-and-hold threshold before a drag starts
//! - [`TapTracker`]: single versus double tap classification
//! - [`SessionSlot`]: owner of the one live pointer session per surface

mod hold;
mod session;
mod tap;

pub use hold::HoldGesture;
pub use session::{SessionId, SessionSlot};
pub use tap::{TapKind, TapTracker};
