use crate::geometry::primitives::Point3;

/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for shared properties of axis-aligned solids.
pub trait Shape {
    /// The minimum corner of the solid
    fn origin(&self) -> Point3;

    /// Extents along the x, y and z axis
    fn dims(&self) -> [u64; 3];

    /// Volume of the interior of the solid
    fn volume(&self) -> u64 {
        self.dims().iter().product()
    }
}
