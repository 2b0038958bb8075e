/// Classification of a tap
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapKind {
    Single,
    Double,
}

/// Double-tap detector
///
/// Every tap is recorded, so a third quick tap after a double tap is
/// measured against the second one.
#[derive(Clone, Debug, Default)]
pub struct TapTracker {
    last_tap: Option<f64>,
}

impl TapTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a tap at `now` and record it
    pub fn handle_tap(&mut self, now: f64, double_tap_ms: f64) -> TapKind {
        let kind = match self.last_tap {
            Some(last) if now - last <= double_tap_ms => TapKind::Double,
            _ => TapKind::Single,
        };
        self.last_tap = Some(now);
        kind
    }

    /// Timestamp of the last recorded tap
    pub fn last_tap(&self) -> Option<f64> {
        self.last_tap
    }

    pub fn reset(&mut self) {
        self.last_tap = None;
    }
}
