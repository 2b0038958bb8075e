use crate::transition::progress;

/// Loading overlay drawn over a window's content
///
/// `hide` does not remove the overlay at once: it fades out and only
/// unmounts once the fade has finished.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LoadingOverlay {
    #[default]
    Hidden,
    Visible,
    FadingOut {
        started_at: f64,
        duration_ms: f64,
    },
}

impl LoadingOverlay {
    pub fn show(&mut self) {
        *self = LoadingOverlay::Visible;
    }

    /// Start fading out; a hidden overlay stays hidden
    pub fn hide(&mut self, now: f64, fade_ms: f64) {
        if matches!(self, LoadingOverlay::Visible) {
            *self = LoadingOverlay::FadingOut {
                started_at: now,
                duration_ms: fade_ms,
            };
        }
    }

    /// Unmount a finished fade; returns true if the state changed
    pub fn tick(&mut self, now: f64) -> bool {
        if let LoadingOverlay::FadingOut {
            started_at,
            duration_ms,
        } = *self
        {
            if now - started_at >= duration_ms {
                *self = LoadingOverlay::Hidden;
                return true;
            }
        }
        false
    }

    /// Content is still loading
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingOverlay::Visible)
    }

    /// Overlay is still in the tree (visible or fading)
    pub fn is_mounted(&self) -> bool {
        !matches!(self, LoadingOverlay::Hidden)
    }

    pub fn opacity(&self, now: f64) -> f32 {
        match *self {
            LoadingOverlay::Hidden => 0.0,
            LoadingOverlay::Visible => 1.0,
            LoadingOverlay::FadingOut {
                started_at,
                duration_ms,
            } => 1.0 - progress(started_at, duration_ms, now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hide_fades_before_unmount() {
        let mut overlay = LoadingOverlay::default();
        overlay.show();
        assert!(overlay.is_loading());

        overlay.hide(500.0, 1000.0);
        assert!(!overlay.is_loading());
        assert!(overlay.is_mounted());
        assert!((overlay.opacity(1000.0) - 0.5).abs() < 0.001);

        assert!(!overlay.tick(1499.0));
        assert!(overlay.tick(1500.0));
        assert_eq!(overlay, LoadingOverlay::Hidden);
    }

    #[test]
    fn test_hide_when_hidden_is_noop() {
        let mut overlay = LoadingOverlay::Hidden;
        overlay.hide(0.0, 1000.0);
        assert_eq!(overlay, LoadingOverlay::Hidden);
    }

    #[test]
    fn test_show_during_fade_restores() {
        let mut overlay = LoadingOverlay::Visible;
        overlay.hide(0.0, 1000.0);
        overlay.show();
        assert!(overlay.is_loading());
        assert!(!overlay.tick(5000.0));
    }
}
