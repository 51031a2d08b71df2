use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// One of the six axis-aligned orientations of a cuboid.
///
/// Each variant permutes the intrinsic `(width, height, depth)` of an item onto the `(x, y, z)` axes of a bin.
/// Placement tries them in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    /// (w, h, d)
    #[default]
    RT1,
    /// (h, w, d)
    RT2,
    /// (h, d, w)
    RT3,
    /// (d, h, w)
    RT4,
    /// (d, w, h)
    RT5,
    /// (w, d, h)
    RT6,
}

impl Rotation {
    pub const ALL: [Rotation; 6] = [
        Rotation::RT1,
        Rotation::RT2,
        Rotation::RT3,
        Rotation::RT4,
        Rotation::RT5,
        Rotation::RT6,
    ];

    /// Maps intrinsic dimensions onto the `(x, y, z)` axes.
    pub const fn orient(self, w: u64, h: u64, d: u64) -> [u64; 3] {
        match self {
            Rotation::RT1 => [w, h, d],
            Rotation::RT2 => [h, w, d],
            Rotation::RT3 => [h, d, w],
            Rotation::RT4 => [d, h, w],
            Rotation::RT5 => [d, w, h],
            Rotation::RT6 => [w, d, h],
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short tag, as used in the external representation
    pub const fn tag(self) -> &'static str {
        match self {
            Rotation::RT1 => "RT1",
            Rotation::RT2 => "RT2",
            Rotation::RT3 => "RT3",
            Rotation::RT4 => "RT4",
            Rotation::RT5 => "RT5",
            Rotation::RT6 => "RT6",
        }
    }

    fn permutation(self) -> &'static str {
        match self {
            Rotation::RT1 => "w, h, d",
            Rotation::RT2 => "h, w, d",
            Rotation::RT3 => "h, d, w",
            Rotation::RT4 => "d, h, w",
            Rotation::RT5 => "d, w, h",
            Rotation::RT6 => "w, d, h",
        }
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.tag(), self.permutation())
    }
}
