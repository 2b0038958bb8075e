//! Keyboard focus arbitration
//!
//! Exactly one named component owns focus at a time. Windows claim focus
//! under their window id; desktop surfaces use the names below.

/// Focus name of the desktop background
pub const DESKTOP_SURFACE: &str = "desktop";

/// Focus name of the mission control overview
pub const MISSION_CONTROL_SURFACE: &str = "mission-control";

/// Single-owner focus state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusCoordinator {
    focused: Option<String>,
}

impl FocusCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give focus to `name`; returns true if the owner changed
    pub fn update_focus(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.focused.as_deref() == Some(name.as_str()) {
            return false;
        }
        tracing::trace!(from = ?self.focused, to = %name, "focus changed");
        self.focused = Some(name);
        true
    }

    pub fn focused_component(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn is_focused(&self, name: &str) -> bool {
        self.focused.as_deref() == Some(name)
    }

    /// Drop focus if `name` holds it; returns true if it did
    pub fn clear_if(&mut self, name: &str) -> bool {
        if self.is_focused(name) {
            self.focused = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.focused = None;
    }
}
