use crate::angle::orientation_deg;
use serde::{Deserialize, Serialize};

/// Line segment endpoints in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LineSegment {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Orientation of `(x2 - x1, y2 - y1)` in degrees, folded into [0, 180).
    pub fn orientation_deg(&self) -> f64 {
        orientation_deg((self.x2 - self.x1) as f64, (self.y2 - self.y1) as f64)
    }
}
