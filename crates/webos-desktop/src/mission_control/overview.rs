//! Overview open/close timeline
//!
//! Opening hides the chrome at once, waits `open_delay_ms`, then
//! cross-fades over `fade_ms`. Leaving slides for `slide_ms` before the
//! selected desktop is committed and the chrome comes back.

use crate::config::OverviewConfig;
use crate::transition::{ease_out_cubic, progress};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverviewPhase {
    Closed,
    Opening { started_at: f64, fading: bool },
    Open,
    Closing { started_at: f64, target: usize },
}

/// Milestones reported by [`Overview::tick`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverviewEvent {
    /// The open delay elapsed; the cross-fade began
    FadeStarted,
    /// The overview is fully shown
    Opened,
    /// The closing slide finished; switch to `target` and restore chrome
    Closed { target: usize },
}

#[derive(Clone, Debug)]
pub struct Overview {
    phase: OverviewPhase,
    config: OverviewConfig,
}

impl Overview {
    pub fn new(config: OverviewConfig) -> Self {
        Self {
            phase: OverviewPhase::Closed,
            config,
        }
    }

    pub fn phase(&self) -> OverviewPhase {
        self.phase
    }

    /// Shown or on its way in or out
    pub fn is_active(&self) -> bool {
        !matches!(self.phase, OverviewPhase::Closed)
    }

    /// Begin opening; ignored unless closed
    pub fn open(&mut self, now: f64) -> bool {
        if self.phase != OverviewPhase::Closed {
            return false;
        }
        self.phase = OverviewPhase::Opening {
            started_at: now,
            fading: false,
        };
        true
    }

    /// Leave towards desktop `target`
    ///
    /// Accepted while opening or open; a second request while already
    /// closing is ignored.
    pub fn select(&mut self, target: usize, now: f64) -> bool {
        match self.phase {
            OverviewPhase::Opening { .. } | OverviewPhase::Open => {
                self.phase = OverviewPhase::Closing {
                    started_at: now,
                    target,
                };
                true
            }
            _ => false,
        }
    }

    /// Leave without changing desktop
    pub fn dismiss(&mut self, active: usize, now: f64) -> bool {
        self.select(active, now)
    }

    /// Advance the timeline; several milestones may be passed in one call
    pub fn tick(&mut self, now: f64) -> Vec<OverviewEvent> {
        let mut events = Vec::new();
        if let OverviewPhase::Opening { started_at, fading } = self.phase {
            let fade_at = started_at + self.config.open_delay_ms;
            if !fading && now >= fade_at {
                events.push(OverviewEvent::FadeStarted);
                self.phase = OverviewPhase::Opening {
                    started_at,
                    fading: true,
                };
            }
            if now >= fade_at + self.config.fade_ms {
                events.push(OverviewEvent::Opened);
                self.phase = OverviewPhase::Open;
            }
        }
        if let OverviewPhase::Closing { started_at, target } = self.phase {
            if now - started_at >= self.config.slide_ms {
                events.push(OverviewEvent::Closed { target });
                self.phase = OverviewPhase::Closed;
            }
        }
        events
    }

    /// Overview layer opacity at `now`
    pub fn opacity(&self, now: f64) -> f32 {
        match self.phase {
            OverviewPhase::Closed => 0.0,
            OverviewPhase::Opening { started_at, .. } => ease_out_cubic(progress(
                started_at + self.config.open_delay_ms,
                self.config.fade_ms,
                now,
            )),
            OverviewPhase::Open => 1.0,
            OverviewPhase::Closing { started_at, .. } => {
                1.0 - ease_out_cubic(progress(started_at, self.config.slide_ms, now))
            }
        }
    }
}
