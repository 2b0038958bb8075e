use serde::Serialize;

use crate::math::{Rect, Size, Vec2};
use crate::types::{WindowId, WrapId};

use super::{GeometryAnimation, LoadingOverlay, SizeLimits, WindowContent, WindowLifecycle};

/// How the renderer should move a window to its display rectangle
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveTransition {
    /// Follow the pointer without easing
    Immediate,
    /// Ease towards the target
    Eased { duration_ms: f32 },
}

/// A window instance
///
/// `rect` is the committed geometry. While a pointer session runs the
/// window is drawn from `live`, which is folded back into `rect` exactly
/// once when the session ends.
#[derive(Debug)]
pub struct Window {
    pub id: WindowId,
    pub wrap: WrapId,
    pub title: String,
    pub app_id: Option<String>,
    pub content: WindowContent,
    pub limits: SizeLimits,
    rect: Rect,
    live: Option<Rect>,
    loading: LoadingOverlay,
    animation: Option<GeometryAnimation>,
    pub(super) hooks: Option<Box<dyn WindowLifecycle>>,
}

impl Window {
    pub(super) fn new(
        id: WindowId,
        wrap: WrapId,
        title: String,
        rect: Rect,
        limits: SizeLimits,
        content: WindowContent,
    ) -> Self {
        Self {
            id,
            wrap,
            title,
            app_id: None,
            content,
            limits,
            rect,
            live: None,
            loading: LoadingOverlay::Hidden,
            animation: None,
            hooks: None,
        }
    }

    /// Committed geometry
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn position(&self) -> Vec2 {
        self.rect.position()
    }

    pub fn size(&self) -> Size {
        self.rect.size()
    }

    /// Geometry of the running pointer session, if any
    pub fn live_rect(&self) -> Option<Rect> {
        self.live
    }

    /// Geometry to draw at `now`
    pub fn display_rect(&self, now: f64) -> Rect {
        if let Some(live) = self.live {
            return live;
        }
        match &self.animation {
            Some(anim) => anim.current(now),
            None => self.rect,
        }
    }

    /// Pointer-driven geometry is immediate; programmatic moves ease
    pub fn transition(&self) -> MoveTransition {
        match (&self.live, &self.animation) {
            (None, Some(anim)) => MoveTransition::Eased {
                duration_ms: anim.duration_ms,
            },
            _ => MoveTransition::Immediate,
        }
    }

    pub fn loading(&self) -> LoadingOverlay {
        self.loading
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_loading()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub(super) fn loading_mut(&mut self) -> &mut LoadingOverlay {
        &mut self.loading
    }

    // ========================================================================
    // Live session geometry
    // ========================================================================

    pub(crate) fn begin_live(&mut self) {
        self.animation = None;
        self.live = Some(self.rect);
    }

    pub(crate) fn set_live(&mut self, rect: Rect) {
        self.live = Some(rect);
    }

    /// Fold the live rectangle into the committed one
    pub(crate) fn take_live(&mut self) -> Option<Rect> {
        self.live.take()
    }

    // ========================================================================
    // Committed geometry
    // ========================================================================

    pub(super) fn set_rect(&mut self, rect: Rect) {
        self.live = None;
        self.animation = None;
        self.rect = rect;
    }

    pub(super) fn animate_to(&mut self, target: Rect, now: f64, duration_ms: f32) {
        let from = self.display_rect(now);
        self.live = None;
        self.rect = target;
        self.animation = Some(GeometryAnimation::new(from, target, now, duration_ms));
    }

    /// Drop a finished animation; returns true while one is still running
    pub(super) fn tick_animation(&mut self, now: f64) -> bool {
        match &self.animation {
            Some(anim) if anim.is_complete(now) => {
                self.animation = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    pub(super) fn notify_resize(&mut self) {
        let size = self.rect.size();
        if let Some(hooks) = self.hooks.as_mut() {
            hooks.on_resize(&self.id, size.width, size.height);
        }
    }
}
