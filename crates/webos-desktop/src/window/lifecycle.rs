use crate::types::WindowId;

/// Callbacks a hosted content can register for window transitions
///
/// Every method has a no-op default so implementors only override what
/// they need.
pub trait WindowLifecycle {
    /// The window entered the registry
    fn on_mount(&mut self, _id: &WindowId) {}

    /// The window left the registry; always follows `on_close`
    fn on_unmount(&mut self, _id: &WindowId) {}

    /// The window is being closed
    fn on_close(&mut self, _id: &WindowId) {}

    /// The committed size changed
    fn on_resize(&mut self, _id: &WindowId, _width: f32, _height: f32) {}
}

impl std::fmt::Debug for dyn WindowLifecycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("WindowLifecycle")
    }
}
