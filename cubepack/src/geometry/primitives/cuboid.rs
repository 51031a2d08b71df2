use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::Point3;

/// Geometric primitive representing an axis-aligned cuboid, defined by its minimum corner and its extents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cuboid {
    pub origin: Point3,
    pub dims: [u64; 3],
}

impl Cuboid {
    pub fn new(origin: Point3, dims: [u64; 3]) -> Self {
        Cuboid { origin, dims }
    }

    /// The corner opposite of the origin
    pub fn max_corner(&self) -> Point3 {
        let Point3(x, y, z) = self.origin;
        let [w, h, d] = self.dims;
        Point3(x + w, y + h, z + d)
    }

    /// True if `self` lies within `[0, bounds[i]]` on every axis.
    pub fn fits_within(&self, bounds: [u64; 3]) -> bool {
        let origin: [u64; 3] = self.origin.into();
        (0..3).all(|i| {
            origin[i]
                .checked_add(self.dims[i])
                .is_some_and(|max| max <= bounds[i])
        })
    }
}

impl Shape for Cuboid {
    fn origin(&self) -> Point3 {
        self.origin
    }

    fn dims(&self) -> [u64; 3] {
        self.dims
    }
}

impl CollidesWith<Cuboid> for Cuboid {
    /// Two cuboids collide when their projections overlap on the (x,y), (y,z) and (x,z) planes.
    #[inline(always)]
    fn collides_with(&self, other: &Cuboid) -> bool {
        let (Point3(x1, y1, z1), [w1, h1, d1]) = (self.origin, self.dims);
        let (Point3(x2, y2, z2), [w2, h2, d2]) = (other.origin, other.dims);

        rects_intersect((x1, y1), (x2, y2), (w1, h1), (w2, h2))
            && rects_intersect((y1, z1), (y2, z2), (h1, d1), (h2, d2))
            && rects_intersect((x1, z1), (x2, z2), (w1, d1), (w2, d2))
    }
}

/// Overlap test of two axis-aligned rectangles, given their minimum corners `o1`, `o2` and extents `e1`, `e2`.
///
/// The rectangles are compared through their centers, `o + e / 2` with truncating division.
/// They overlap iff on both axes the distance between the centers is strictly smaller than `(e1 + e2) / 2`.
/// Touching rectangles never overlap.
/// With odd extents the truncation makes the test loose: a `1`-wide and a `2`-wide rectangle
/// sharing the same origin are not reported as overlapping.
#[inline(always)]
pub fn rects_intersect(o1: (u64, u64), o2: (u64, u64), e1: (u64, u64), e2: (u64, u64)) -> bool {
    let center_1 = (o1.0 + e1.0 / 2, o1.1 + e1.1 / 2);
    let center_2 = (o2.0 + e2.0 / 2, o2.1 + e2.1 / 2);

    let dx = center_1.0.abs_diff(center_2.0);
    let dy = center_1.1.abs_diff(center_2.1);

    dx < half_sum(e1.0, e2.0) && dy < half_sum(e1.1, e2.1)
}

/// `(a + b) / 2` without overflowing
#[inline(always)]
fn half_sum(a: u64, b: u64) -> u64 {
    a / 2 + b / 2 + (a % 2 + b % 2) / 2
}
