use crate::math::{Rect, Vec2};

/// Rubber-band selection rectangle grown from the press point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marquee {
    pub anchor: Vec2,
    pub current: Vec2,
}

impl Marquee {
    pub fn new(anchor: Vec2) -> Self {
        Self {
            anchor,
            current: anchor,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.anchor, self.current)
    }
}
