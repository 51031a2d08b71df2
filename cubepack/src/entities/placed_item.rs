use std::fmt::Display;

use crate::entities::Item;
use crate::geometry::Rotation;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Cuboid, Point3};

/// An [`Item`] that has been placed in a [`Bin`](crate::entities::Bin), at a position and in a rotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedItem<I> {
    pub item: I,
    /// Minimum corner of the rotated item
    pub position: Point3,
    pub rotation: Rotation,
}

impl<I: Item> PlacedItem<I> {
    pub fn new(item: I, position: Point3, rotation: Rotation) -> Self {
        PlacedItem {
            item,
            position,
            rotation,
        }
    }

    /// Extents of the item along the x, y and z axis after rotation
    pub fn dims(&self) -> [u64; 3] {
        let item = &self.item;
        self.rotation.orient(item.width(), item.height(), item.depth())
    }

    /// The space occupied by the item inside the bin
    pub fn cuboid(&self) -> Cuboid {
        Cuboid::new(self.position, self.dims())
    }
}

impl<I: Item> CollidesWith<PlacedItem<I>> for PlacedItem<I> {
    fn collides_with(&self, other: &PlacedItem<I>) -> bool {
        self.cuboid().collides_with(&other.cuboid())
    }
}

impl<I: Item> Display for PlacedItem<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let item = &self.item;
        write!(
            f,
            "item(w: {}, h: {}, d: {}, weight: {}) pos({}) rotation({})",
            item.width(),
            item.height(),
            item.depth(),
            item.weight(),
            self.position,
            self.rotation
        )
    }
}
