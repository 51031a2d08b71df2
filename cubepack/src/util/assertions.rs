use itertools::Itertools;
use log::error;

use crate::entities::{Bin, Item};
use crate::geometry::geo_traits::CollidesWith;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Checks whether the placed item at `index` lies entirely within the bin
pub fn placed_item_within_bounds<I: Item>(bin: &Bin<I>, index: usize) -> bool {
    let pi = &bin.placed_items[index];
    let fits = pi.cuboid().fits_within(bin.dims());
    if !fits {
        error!(
            "placed item {index} exceeds the bounds of bin '{}': {pi}",
            bin.name()
        );
    }
    fits
}

/// Checks whether no two placed items in the bin collide
pub fn bin_has_no_overlap<I: Item>(bin: &Bin<I>) -> bool {
    let overlapping = bin
        .placed_items
        .iter()
        .enumerate()
        .tuple_combinations()
        .find(|((_, a), (_, b))| a.collides_with(b));

    match overlapping {
        Some(((i, a), (j, b))) => {
            error!(
                "placed items {i} and {j} in bin '{}' overlap:\n  {a}\n  {b}",
                bin.name()
            );
            false
        }
        None => true,
    }
}

/// Checks all geometric invariants of a bin: every item within bounds and no overlap between items
pub fn bin_is_feasible<I: Item>(bin: &Bin<I>) -> bool {
    (0..bin.placed_items.len()).all(|i| placed_item_within_bounds(bin, i))
        && bin_has_no_overlap(bin)
}

/// Checks the output of a packing run: no empty bins and every bin feasible
pub fn packing_is_feasible<I: Item>(bins: &[Bin<I>]) -> bool {
    bins.iter().all(|b| !b.is_empty() && bin_is_feasible(b))
}
