//! Debounced edge snapping for dragged windows
//!
//! While a window is dragged, resting the pointer in the top band arms a
//! fullscreen snap; resting in the left or right band arms a half-screen
//! snap. The pointer has to stay in the same band for the debounce period
//! before the snap becomes pending and a preview is shown. Leaving the band
//! clears both the timer and the preview. Releasing while pending commits.
//!
//! ```text
//! None ──enter band──▶ Arming ──debounce──▶ Pending ──release──▶ committed
//!   ▲                    │                     │
//!   └────leave band──────┴─────────────────────┘  (cancelled)
//! ```

use serde::{Deserialize, Serialize};

use crate::config::WindowBehavior;
use crate::math::{Rect, Size, Vec2};

/// Target layout of an edge snap
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapDirection {
    Fullscreen,
    LeftHalf,
    RightHalf,
}

/// Phase of the edge-snap state machine for one drag session
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnapPhase {
    /// Pointer outside every band
    None,
    /// Pointer in a band, debounce running
    Arming { direction: SnapDirection, since: f64 },
    /// Debounce elapsed; preview visible, release commits
    Pending(SnapDirection),
}

/// Which snap band (if any) the pointer is in
///
/// The top band wins over the side bands in the corners.
pub fn band_at(pointer: Vec2, viewport: Size, behavior: &WindowBehavior) -> Option<SnapDirection> {
    if pointer.y < behavior.snap_top_band {
        Some(SnapDirection::Fullscreen)
    } else if pointer.x < behavior.snap_side_band {
        Some(SnapDirection::LeftHalf)
    } else if pointer.x > viewport.width - behavior.snap_side_band {
        Some(SnapDirection::RightHalf)
    } else {
        None
    }
}

/// Geometry a window takes when a snap commits
pub fn snap_target(direction: SnapDirection, viewport: Size, behavior: &WindowBehavior) -> Rect {
    let m = behavior.snap_margin;
    let top = behavior.top_offset + m;
    let height = (viewport.height - behavior.top_offset - 2.0 * m).max(0.0);
    let half_width = (viewport.width / 2.0 - 1.5 * m).max(0.0);

    match direction {
        SnapDirection::Fullscreen => {
            Rect::new(m, top, (viewport.width - 2.0 * m).max(0.0), height)
        }
        SnapDirection::LeftHalf => Rect::new(m, top, half_width, height),
        SnapDirection::RightHalf => {
            Rect::new(viewport.width / 2.0 + 0.5 * m, top, half_width, height)
        }
    }
}

/// Edge-snap state machine
#[derive(Clone, Debug)]
pub struct EdgeSnap {
    phase: SnapPhase,
    debounce_ms: f64,
}

impl EdgeSnap {
    pub fn new(debounce_ms: f64) -> Self {
        Self {
            phase: SnapPhase::None,
            debounce_ms,
        }
    }

    pub fn phase(&self) -> SnapPhase {
        self.phase
    }

    /// Feed the band under the pointer (called on every pointer move)
    pub fn update(&mut self, band: Option<SnapDirection>, now: f64) {
        let Some(direction) = band else {
            if self.phase != SnapPhase::None {
                tracing::trace!("edge snap cancelled: pointer left band");
            }
            self.phase = SnapPhase::None;
            return;
        };

        let same_band = match self.phase {
            SnapPhase::Arming { direction: d, .. } | SnapPhase::Pending(d) => d == direction,
            SnapPhase::None => false,
        };
        if !same_band {
            self.phase = SnapPhase::Arming {
                direction,
                since: now,
            };
        }
        self.tick(now);
    }

    /// Promote an elapsed debounce to pending; returns true on promotion
    pub fn tick(&mut self, now: f64) -> bool {
        if let SnapPhase::Arming { direction, since } = self.phase {
            if now - since >= self.debounce_ms {
                tracing::debug!(?direction, "edge snap pending");
                self.phase = SnapPhase::Pending(direction);
                return true;
            }
        }
        false
    }

    /// Direction to preview, only once the snap is pending
    pub fn pending(&self) -> Option<SnapDirection> {
        match self.phase {
            SnapPhase::Pending(d) => Some(d),
            _ => None,
        }
    }

    /// Preview rectangle for the pending snap
    pub fn preview(&self, viewport: Size, behavior: &WindowBehavior) -> Option<Rect> {
        self.pending()
            .map(|direction| snap_target(direction, viewport, behavior))
    }

    /// Resolve the session on pointer release
    ///
    /// Returns the committed direction, or `None` when the snap was never
    /// pending or the pointer was released outside its band.
    pub fn release(&mut self, band: Option<SnapDirection>, now: f64) -> Option<SnapDirection> {
        self.update(band, now);
        let committed = self.pending();
        self.phase = SnapPhase::None;
        committed
    }

    /// Drop any timer and preview
    pub fn cancel(&mut self) {
        self.phase = SnapPhase::None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn behavior() -> WindowBehavior {
        WindowBehavior::default()
    }

    const VIEWPORT: Size = Size::new(1440.0, 900.0);

    #[test]
    fn test_band_at() {
        let b = behavior();
        assert_eq!(
            band_at(Vec2::new(700.0, 10.0), VIEWPORT, &b),
            Some(SnapDirection::Fullscreen)
        );
        assert_eq!(
            band_at(Vec2::new(5.0, 400.0), VIEWPORT, &b),
            Some(SnapDirection::LeftHalf)
        );
        assert_eq!(
            band_at(Vec2::new(1435.0, 400.0), VIEWPORT, &b),
            Some(SnapDirection::RightHalf)
        );
        assert_eq!(band_at(Vec2::new(700.0, 400.0), VIEWPORT, &b), None);
        // Corner: top band wins
        assert_eq!(
            band_at(Vec2::new(2.0, 2.0), VIEWPORT, &b),
            Some(SnapDirection::Fullscreen)
        );
    }

    #[test]
    fn test_snap_targets() {
        let b = behavior();
        assert_eq!(
            snap_target(SnapDirection::Fullscreen, VIEWPORT, &b),
            Rect::new(0.0, 26.0, 1440.0, 874.0)
        );
        assert_eq!(
            snap_target(SnapDirection::LeftHalf, VIEWPORT, &b),
            Rect::new(0.0, 26.0, 720.0, 874.0)
        );
        assert_eq!(
            snap_target(SnapDirection::RightHalf, VIEWPORT, &b),
            Rect::new(720.0, 26.0, 720.0, 874.0)
        );
    }

    #[test]
    fn test_snap_targets_with_margin() {
        let b = WindowBehavior {
            snap_margin: 10.0,
            ..WindowBehavior::default()
        };
        let left = snap_target(SnapDirection::LeftHalf, VIEWPORT, &b);
        let right = snap_target(SnapDirection::RightHalf, VIEWPORT, &b);
        assert_eq!(left, Rect::new(10.0, 36.0, 705.0, 854.0));
        assert_eq!(right, Rect::new(725.0, 36.0, 705.0, 854.0));
        // 10px gutter between the halves
        assert!((right.x - left.right() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_short_visit_does_not_snap() {
        let mut snap = EdgeSnap::new(250.0);
        snap.update(Some(SnapDirection::Fullscreen), 0.0);
        snap.update(Some(SnapDirection::Fullscreen), 200.0);
        assert_eq!(snap.pending(), None);

        snap.update(None, 240.0);
        assert_eq!(snap.phase(), SnapPhase::None);
        assert_eq!(snap.release(None, 600.0), None);
    }

    #[test]
    fn test_resting_in_band_commits_on_release() {
        let mut snap = EdgeSnap::new(250.0);
        snap.update(Some(SnapDirection::Fullscreen), 0.0);
        assert!(snap.tick(250.0));
        assert_eq!(snap.pending(), Some(SnapDirection::Fullscreen));
        assert!(snap.preview(VIEWPORT, &behavior()).is_some());

        assert_eq!(
            snap.release(Some(SnapDirection::Fullscreen), 300.0),
            Some(SnapDirection::Fullscreen)
        );
        assert_eq!(snap.phase(), SnapPhase::None);
    }

    #[test]
    fn test_release_resolves_elapsed_debounce_without_tick() {
        let mut snap = EdgeSnap::new(250.0);
        snap.update(Some(SnapDirection::LeftHalf), 1000.0);
        assert_eq!(
            snap.release(Some(SnapDirection::LeftHalf), 1260.0),
            Some(SnapDirection::LeftHalf)
        );
    }

    #[test]
    fn test_release_before_debounce_does_not_snap() {
        let mut snap = EdgeSnap::new(250.0);
        snap.update(Some(SnapDirection::Fullscreen), 0.0);
        assert_eq!(snap.release(Some(SnapDirection::Fullscreen), 100.0), None);
    }

    #[test]
    fn test_switching_band_restarts_debounce() {
        let mut snap = EdgeSnap::new(250.0);
        snap.update(Some(SnapDirection::LeftHalf), 0.0);
        snap.update(Some(SnapDirection::Fullscreen), 200.0);
        assert!(!snap.tick(300.0));
        assert!(snap.tick(450.0));
        assert_eq!(snap.pending(), Some(SnapDirection::Fullscreen));
    }

    #[test]
    fn test_leaving_band_after_pending_cancels() {
        let mut snap = EdgeSnap::new(250.0);
        snap.update(Some(SnapDirection::RightHalf), 0.0);
        snap.tick(300.0);
        snap.update(None, 320.0);
        assert_eq!(snap.preview(VIEWPORT, &behavior()), None);
        assert_eq!(snap.release(None, 400.0), None);
    }
}
