use crate::math::Rect;
use crate::types::WindowId;

use super::DesktopEngine;

/// Controls handed to a window's content
///
/// Every call is forwarded to the engine under this window's id, so a
/// handle outliving its window degrades to no-ops.
pub struct WindowHandle<'a> {
    engine: &'a mut DesktopEngine,
    id: WindowId,
    now: f64,
}

impl<'a> WindowHandle<'a> {
    pub(super) fn new(engine: &'a mut DesktopEngine, id: WindowId, now: f64) -> Self {
        Self { engine, id, now }
    }

    pub fn id(&self) -> &WindowId {
        &self.id
    }

    pub fn show_loading(&mut self) -> bool {
        self.engine.windows.show_loading(&self.id)
    }

    pub fn hide_loading(&mut self) -> bool {
        self.engine.windows.hide_loading(&self.id, self.now)
    }

    pub fn resize_window(&mut self, width: f32, height: f32) -> bool {
        self.engine.windows.resize(&self.id, width, height, self.now)
    }

    pub fn move_window(&mut self, x: f32, y: f32) -> bool {
        self.engine.windows.move_to(&self.id, x, y, self.now)
    }

    pub fn focus(&mut self) -> bool {
        self.engine.focus_window(&self.id)
    }

    pub fn close(&mut self) -> bool {
        self.engine.close_window(&self.id)
    }

    pub fn is_focused(&self) -> bool {
        self.engine.focus.is_focused(self.id.as_str())
    }

    pub fn rect(&self) -> Option<Rect> {
        self.engine.windows.get(&self.id).map(|w| w.rect())
    }
}
