//! Tile Geometry

use std::ops::Sub;

/// A 2D position or translation in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translation that moves something resting at `self` onto `other`
    pub fn delta_to(self, other: Offset) -> Offset {
        other - self
    }

    /// CSS `transform` value for this translation
    pub fn to_translate(self) -> String {
        format!("translate({}px, {}px)", self.x, self.y)
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}
