use log::trace;

use crate::entities::{Bin, Item};
use crate::geometry::Rotation;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Cuboid, Point3};

/// Attempts to place `item` in `bin` with its minimum corner at `anchor`.
///
/// Rotations are tried in order, from [`Rotation::RT1`] to [`Rotation::RT6`].
/// Rotations that exceed the bounds of the bin are skipped.
/// The first rotation that stays within bounds decides the outcome: if it does not collide with any
/// placed item, the item is appended to the bin in that rotation, otherwise the placement fails
/// without trying the remaining rotations.
///
/// Known limitation: stopping at the first in-bounds rotation caps the achievable density.
pub fn place<I: Item + Clone>(bin: &mut Bin<I>, item: &I, anchor: Point3) -> bool {
    let bounds = bin.dims();
    for rotation in Rotation::ALL {
        let candidate = Cuboid::new(
            anchor,
            rotation.orient(item.width(), item.height(), item.depth()),
        );
        if !candidate.fits_within(bounds) {
            continue;
        }

        let collides = bin
            .placed_items
            .iter()
            .any(|pi| pi.cuboid().collides_with(&candidate));

        if collides {
            return false;
        }

        trace!(
            "[PLACE] item (w: {}, h: {}, d: {}) placed at ({anchor}) in {rotation}",
            item.width(),
            item.height(),
            item.depth()
        );
        bin.place_item(item.clone(), anchor, rotation);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Container, Parcel};

    fn bin(w: u64, h: u64, d: u64) -> Bin<Parcel> {
        Bin::new(Container::new("test", w, h, d, 0))
    }

    #[test]
    fn first_fitting_rotation_is_taken() {
        let mut bin = bin(20, 100, 30);
        // RT1 (100, 20, 30) exceeds the width, RT2 (20, 100, 30) fits
        let item = Parcel::new(0, 100, 20, 30, 1);
        assert!(place(&mut bin, &item, Point3::ORIGIN));
        assert_eq!(bin.placed_items[0].rotation, Rotation::RT2);
        assert_eq!(bin.placed_items[0].dims(), [20, 100, 30]);
    }

    #[test]
    fn no_rotation_in_bounds() {
        let mut bin = bin(10, 10, 10);
        let item = Parcel::new(0, 5, 5, 5, 1);
        assert!(!place(&mut bin, &item, Point3(6, 0, 0)));
        assert!(bin.is_empty());
    }

    #[test]
    fn collision_on_first_in_bounds_rotation_stops_the_search() {
        let mut bin = bin(20, 20, 20);
        let blocker = Parcel::new(0, 5, 5, 5, 1);
        assert!(place(&mut bin, &blocker, Point3(5, 0, 0)));

        // RT1 (10, 5, 5) collides with the blocker, RT2 (5, 10, 5) would not
        let item = Parcel::new(1, 10, 5, 5, 1);
        assert!(!place(&mut bin, &item, Point3::ORIGIN));
        assert_eq!(bin.placed_items.len(), 1);
    }
}
