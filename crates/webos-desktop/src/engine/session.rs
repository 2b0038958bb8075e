//! Pointer sessions and their outcomes

use crate::geometry::{EdgeSnap, SnapDirection};
use crate::math::{Rect, Vec2};
use crate::types::{WindowId, WrapId};
use crate::window::ResizeEdge;
use crate::wrap::IconEvent;

/// The one live pointer interaction
#[derive(Clone, Debug)]
pub enum PointerSession {
    /// Title-bar drag of a window
    WindowDrag {
        window: WindowId,
        grab_offset: Vec2,
        snap: EdgeSnap,
    },
    /// Edge or corner resize of a window
    WindowResize {
        window: WindowId,
        edge: ResizeEdge,
        start_rect: Rect,
        start_pointer: Vec2,
    },
    /// Press on a desktop icon (hold, drag or tap)
    Icon { wrap: WrapId },
    /// Rubber-band selection on the desktop background
    Marquee { wrap: WrapId },
}

impl PointerSession {
    pub fn window(&self) -> Option<&WindowId> {
        match self {
            PointerSession::WindowDrag { window, .. }
            | PointerSession::WindowResize { window, .. } => Some(window),
            _ => None,
        }
    }
}

/// What launching an app did
#[derive(Clone, Debug, PartialEq)]
pub enum LaunchAction {
    /// A window was opened or re-focused
    Opened(WindowId),
    /// The host should navigate to this URL
    Navigate(String),
}

/// Result of releasing the pointer
#[derive(Clone, Debug, PartialEq)]
pub enum PointerOutcome {
    /// No session was running
    None,
    WindowMoved {
        id: WindowId,
        rect: Rect,
    },
    WindowSnapped {
        id: WindowId,
        direction: SnapDirection,
        rect: Rect,
    },
    WindowResized {
        id: WindowId,
        rect: Rect,
    },
    Icon(IconEvent),
    Launched(LaunchAction),
    MarqueeSelected(Vec<String>),
}
