use crate::math::Vec2;

/// Press-and-hold detector
///
/// `start` arms a deadline. Polling after the deadline yields the offset
/// between the pointer and the target's top-left corner, exactly once.
/// Starting a real drag or releasing the pointer must `cancel` it so a
/// stale hold never fires into a later session.
#[derive(Clone, Debug, Default)]
pub struct HoldGesture {
    armed: Option<ArmedHold>,
}

#[derive(Clone, Copy, Debug)]
struct ArmedHold {
    fires_at: f64,
    offset: Vec2,
    pointer: Vec2,
}

impl HoldGesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the hold timer, replacing any previous one
    pub fn start(&mut self, pointer: Vec2, target_origin: Vec2, now: f64, threshold_ms: f64) {
        self.armed = Some(ArmedHold {
            fires_at: now + threshold_ms,
            offset: pointer - target_origin,
            pointer,
        });
    }

    /// Disarm without firing
    pub fn cancel(&mut self) {
        self.armed = None;
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Pointer position recorded when the hold was armed
    pub fn origin_pointer(&self) -> Option<Vec2> {
        self.armed.map(|h| h.pointer)
    }

    /// Fire if the threshold has elapsed; returns the pointer-to-target offset
    pub fn poll(&mut self, now: f64) -> Option<Vec2> {
        match self.armed {
            Some(hold) if now >= hold.fires_at => {
                self.armed = None;
                Some(hold.offset)
            }
            _ => None,
        }
    }
}
