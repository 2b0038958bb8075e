//! Desktop core for a browser-hosted desktop environment
//!
//! This crate provides the state machines behind a webOS-style desktop:
//! - Window management (open, close, focus, z-order, loading overlays)
//! - Pointer-driven window drag and resize with debounced edge snapping
//! - Desktop icons on a sparse grid with hold-to-drag, group drag and
//!   marquee selection
//! - Virtual desktops and the Mission Control overview
//! - Persisted UI flags behind a host-provided key/value store
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`)
//! - [`geometry`]: Clamping, grid snapping and edge-snap state machine
//! - [`input`]: Hold, tap and pointer-session primitives
//! - [`icons`]: Icon grid engine
//! - [`window`]: Window registry and interaction math
//! - [`wrap`]: Per-desktop icon namespace and gestures
//! - [`mission_control`]: Desktop list and overview timeline
//! - [`persistence`]: Typed view over the host store
//! - [`catalog`]: Launchable applications
//!
//! ## Example
//!
//! ```rust
//! use webos_desktop::{DesktopEngine, PointerOutcome, Size, Vec2, WindowConfig};
//!
//! let mut engine = DesktopEngine::new(Size::new(1280.0, 800.0), 0.0);
//! let id = engine.open_window(WindowConfig::named("notes", "Notes").at(10.0, 10.0));
//!
//! let session = engine.begin_window_drag(&id, Vec2::new(50.0, 20.0), 0.0).unwrap();
//! engine.pointer_move(session, Vec2::new(30.0, 0.0), 16.0);
//! let outcome = engine.pointer_up(session, Vec2::new(30.0, 0.0), 32.0);
//! assert!(matches!(outcome, PointerOutcome::WindowMoved { .. }));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: Everything but the `wasm` bindings runs without a browser
//! 2. **Injected Time**: Every timed operation takes `now` in milliseconds
//! 3. **One Session**: A single pointer session per engine; starting one ends the last

pub mod catalog;
pub mod config;
pub mod error;
pub mod focus;
pub mod geometry;
pub mod icons;
pub mod input;
pub mod math;
pub mod mission_control;
pub mod persistence;
pub mod transition;
pub mod types;
pub mod window;
pub mod wrap;

mod engine;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

pub use catalog::{AppCatalog, AppEntry, AppTarget};
pub use config::{DesktopConfig, GridConfig, OverviewConfig, PointerConfig, WindowBehavior};
pub use engine::{DesktopEngine, LaunchAction, PointerOutcome, PointerSession, WindowHandle};
pub use error::{DesktopError, DesktopResult};
pub use focus::FocusCoordinator;
pub use icons::{GridCoord, IconGrid, IconRecord, Placement};
pub use input::SessionId;
pub use math::{Rect, Size, Vec2};
pub use mission_control::{
    Desktop, DesktopEntry, MissionControl, Overview, OverviewEvent, OverviewPhase,
};
pub use persistence::{ChromeFlags, MemoryStore, StateStore, UiState};
pub use types::{DesktopId, WindowId, WrapId};
pub use window::{
    MoveTransition, ResizeEdge, Window, WindowConfig, WindowContent, WindowLifecycle,
    WindowRegistry,
};
pub use wrap::{DesktopWrap, IconEvent};
