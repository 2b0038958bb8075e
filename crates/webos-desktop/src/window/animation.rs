use crate::math::Rect;
use crate::transition::{ease_out_cubic, progress};

/// Eased geometry change for programmatic moves and resizes
///
/// The target is committed to the registry immediately; the animation only
/// drives what is drawn until it completes.
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryAnimation {
    pub from: Rect,
    pub to: Rect,
    pub start_time: f64,
    pub duration_ms: f32,
}

impl GeometryAnimation {
    pub fn new(from: Rect, to: Rect, now: f64, duration_ms: f32) -> Self {
        Self {
            from,
            to,
            start_time: now,
            duration_ms,
        }
    }

    pub fn progress(&self, now: f64) -> f32 {
        progress(self.start_time, self.duration_ms as f64, now)
    }

    pub fn is_complete(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Interpolated rectangle at `now`
    pub fn current(&self, now: f64) -> Rect {
        Rect::lerp(&self.from, &self.to, ease_out_cubic(self.progress(now)))
    }
}
