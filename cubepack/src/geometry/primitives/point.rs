use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::geometry::Axis;

/// Geometric primitive representing a point on the integer grid of a bin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point3(pub u64, pub u64, pub u64);

impl Point3 {
    pub const ORIGIN: Point3 = Point3(0, 0, 0);

    pub fn get(&self, axis: Axis) -> u64 {
        match axis {
            Axis::X => self.0,
            Axis::Y => self.1,
            Axis::Z => self.2,
        }
    }

    /// Returns a copy of the point, shifted by `delta` along `axis`.
    pub fn offset(mut self, axis: Axis, delta: u64) -> Self {
        match axis {
            Axis::X => self.0 += delta,
            Axis::Y => self.1 += delta,
            Axis::Z => self.2 += delta,
        }
        self
    }
}

impl From<[u64; 3]> for Point3 {
    fn from([x, y, z]: [u64; 3]) -> Self {
        Point3(x, y, z)
    }
}

impl From<Point3> for [u64; 3] {
    fn from(p: Point3) -> Self {
        [p.0, p.1, p.2]
    }
}

impl Display for Point3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x: {}, y: {}, z: {}", self.0, self.1, self.2)
    }
}
