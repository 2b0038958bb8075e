//! Window registry
//!
//! Owns every open window across all desktops. Windows are keyed by their
//! composed id and tagged with the wrap they belong to; z-order is global.

use std::collections::HashMap;

use crate::config::WindowBehavior;
use crate::error::{DesktopError, DesktopResult};
use crate::focus::FocusCoordinator;
use crate::math::{Rect, Size, Vec2};
use crate::types::{WindowId, WrapId};

use super::{SizeLimits, Window, WindowConfig, WindowLifecycle};

/// All open windows
#[derive(Debug)]
pub struct WindowRegistry {
    windows: HashMap<WindowId, Window>,
    /// Bottom to top
    z_order: Vec<WindowId>,
    behavior: WindowBehavior,
}

impl WindowRegistry {
    pub fn new(behavior: WindowBehavior) -> Self {
        Self {
            windows: HashMap::new(),
            z_order: Vec::new(),
            behavior,
        }
    }

    pub fn behavior(&self) -> &WindowBehavior {
        &self.behavior
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Open a window in `wrap`
    ///
    /// Opening an id that is already registered returns the existing id and
    /// leaves that window untouched.
    pub fn open(
        &mut self,
        wrap: &WrapId,
        config: WindowConfig,
        hooks: Option<Box<dyn WindowLifecycle>>,
    ) -> WindowId {
        let suffix = config
            .id
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().simple().to_string());
        let id = WindowId::compose(wrap, &suffix);

        if self.windows.contains_key(&id) {
            tracing::debug!(window = %id, "window already open");
            return id;
        }

        let limits = SizeLimits {
            min: config.min_size.unwrap_or(self.behavior.min_size),
            max: config.max_size,
        };
        let size = limits.constrain(config.size.unwrap_or(self.behavior.default_size));
        let position = config
            .position
            .unwrap_or_else(|| self.cascade_position(wrap));

        let mut window = Window::new(
            id.clone(),
            wrap.clone(),
            config.title,
            Rect::from_pos_size(position, size),
            limits,
            config.content,
        );
        window.app_id = config.app_id;
        if config.loading {
            window.loading_mut().show();
        }
        window.hooks = hooks;
        if let Some(hooks) = window.hooks.as_mut() {
            hooks.on_mount(&id);
        }

        tracing::debug!(window = %id, wrap = %wrap, "window opened");
        self.windows.insert(id.clone(), window);
        self.z_order.push(id.clone());
        id
    }

    /// Close a window; unknown ids are a no-op returning false
    pub fn close(&mut self, id: &WindowId, focus: &mut FocusCoordinator) -> bool {
        let Some(mut window) = self.windows.remove(id) else {
            tracing::debug!(window = %id, "close ignored for unknown window");
            return false;
        };
        self.z_order.retain(|z| z != id);
        focus.clear_if(id.as_str());

        if let Some(hooks) = window.hooks.as_mut() {
            hooks.on_close(id);
            hooks.on_unmount(id);
        }
        tracing::debug!(window = %id, "window closed");
        true
    }

    /// Close every window in `wrap`
    pub fn close_wrap(&mut self, wrap: &WrapId, focus: &mut FocusCoordinator) -> Vec<WindowId> {
        let ids: Vec<WindowId> = self
            .z_order
            .iter()
            .filter(|id| self.windows.get(*id).is_some_and(|w| &w.wrap == wrap))
            .cloned()
            .collect();
        for id in &ids {
            self.close(id, focus);
        }
        ids
    }

    /// Move a window to another wrap; the id string is kept
    pub fn reassign(&mut self, id: &WindowId, wrap: &WrapId) -> bool {
        match self.windows.get_mut(id) {
            Some(window) => {
                tracing::debug!(window = %id, from = %window.wrap, to = %wrap, "window reassigned");
                window.wrap = wrap.clone();
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn get(&self, id: &WindowId) -> Option<&Window> {
        self.windows.get(id)
    }

    pub fn get_mut(&mut self, id: &WindowId) -> Option<&mut Window> {
        self.windows.get_mut(id)
    }

    pub fn try_get(&self, id: &WindowId) -> DesktopResult<&Window> {
        self.windows
            .get(id)
            .ok_or_else(|| DesktopError::WindowNotFound(id.clone()))
    }

    pub fn contains(&self, id: &WindowId) -> bool {
        self.windows.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// All windows, bottom to top
    pub fn windows_by_z(&self) -> impl Iterator<Item = &Window> {
        self.z_order.iter().filter_map(|id| self.windows.get(id))
    }

    /// Windows of one wrap, bottom to top
    pub fn windows_in<'a>(&'a self, wrap: &'a WrapId) -> impl Iterator<Item = &'a Window> + 'a {
        self.windows_by_z().filter(move |w| &w.wrap == wrap)
    }

    /// Topmost window of a wrap
    pub fn top_in(&self, wrap: &WrapId) -> Option<&Window> {
        self.z_order
            .iter()
            .rev()
            .filter_map(|id| self.windows.get(id))
            .find(|w| &w.wrap == wrap)
    }

    /// Topmost window of `wrap` under a point
    pub fn window_at(&self, wrap: &WrapId, point: Vec2, now: f64) -> Option<&WindowId> {
        self.z_order.iter().rev().find(|id| {
            self.windows
                .get(*id)
                .is_some_and(|w| &w.wrap == wrap && w.display_rect(now).contains(point))
        })
    }

    /// Bring a window to the top of the stack
    pub fn raise(&mut self, id: &WindowId) -> bool {
        let Some(pos) = self.z_order.iter().position(|z| z == id) else {
            return false;
        };
        if pos + 1 != self.z_order.len() {
            let id = self.z_order.remove(pos);
            self.z_order.push(id);
        }
        true
    }

    // ========================================================================
    // Loading overlay
    // ========================================================================

    pub fn show_loading(&mut self, id: &WindowId) -> bool {
        match self.windows.get_mut(id) {
            Some(window) => {
                window.loading_mut().show();
                true
            }
            None => false,
        }
    }

    /// Start fading the overlay out; it unmounts after the fade
    pub fn hide_loading(&mut self, id: &WindowId, now: f64) -> bool {
        let fade_ms = self.behavior.loading_fade_ms;
        match self.windows.get_mut(id) {
            Some(window) => {
                window.loading_mut().hide(now, fade_ms);
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Programmatic geometry
    // ========================================================================

    /// Resize a window with an eased transition
    ///
    /// The size is constrained to the window limits; `on_resize` fires with
    /// the committed size.
    pub fn resize(&mut self, id: &WindowId, width: f32, height: f32, now: f64) -> bool {
        let duration = self.behavior.programmatic_move_ms;
        let Some(window) = self.windows.get_mut(id) else {
            return false;
        };
        let size = window.limits.constrain(Size::new(width, height));
        let target = Rect::from_pos_size(window.position(), size);
        window.animate_to(target, now, duration);
        window.notify_resize();
        true
    }

    /// Move a window with an eased transition
    pub fn move_to(&mut self, id: &WindowId, x: f32, y: f32, now: f64) -> bool {
        let duration = self.behavior.programmatic_move_ms;
        let Some(window) = self.windows.get_mut(id) else {
            return false;
        };
        let target = window.rect().with_position(Vec2::new(x, y));
        window.animate_to(target, now, duration);
        true
    }

    /// Commit geometry produced by a user interaction
    pub fn commit_geometry(&mut self, id: &WindowId, rect: Rect) -> bool {
        let Some(window) = self.windows.get_mut(id) else {
            return false;
        };
        let resized = window.size() != rect.size();
        window.set_rect(rect);
        if resized {
            window.notify_resize();
        }
        true
    }

    /// Advance overlays and animations; returns true while anything moves
    pub fn tick(&mut self, now: f64) -> bool {
        let mut active = false;
        for window in self.windows.values_mut() {
            window.loading_mut().tick(now);
            active |= window.tick_animation(now);
            active |= matches!(window.loading(), super::LoadingOverlay::FadingOut { .. });
        }
        active
    }

    /// Staggered default position for the next window in `wrap`
    fn cascade_position(&self, wrap: &WrapId) -> Vec2 {
        let step = (self.windows_in(wrap).count() % 8) as f32 * 30.0;
        Vec2::new(80.0 + step, self.behavior.top_offset + 40.0 + step)
    }
}
