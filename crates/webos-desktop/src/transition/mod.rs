//! Animation helpers
//!
//! Animations never read a clock. Callers pass `now` (milliseconds) and
//! get back a progress value, so every transition is deterministic in tests.

pub mod easing;

pub use easing::ease_out_cubic;

/// Progress (0.0 to 1.0) of a timed transition
pub fn progress(start_time: f64, duration_ms: f64, now: f64) -> f32 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    ((now - start_time) / duration_ms).clamp(0.0, 1.0) as f32
}
