//! Window management module
//!
//! Provides the window registry (lifecycle, z-order, loading overlays,
//! programmatic geometry) and the pure interaction math used while a window
//! is dragged or resized.

mod animation;
mod config;
pub mod content;
mod interaction;
mod lifecycle;
mod loading;
mod registry;
#[allow(clippy::module_inception)]
mod window;

pub use animation::GeometryAnimation;
pub use config::WindowConfig;
pub use content::{refocus_frame, FocusTier, FrameAccessError, FrameHost, WindowContent};
pub use interaction::{drag_bounds, resize_rect, ResizeEdge, SizeLimits};
pub use lifecycle::WindowLifecycle;
pub use loading::LoadingOverlay;
pub use registry::WindowRegistry;
pub use window::{MoveTransition, Window};

pub use crate::types::WindowId;
