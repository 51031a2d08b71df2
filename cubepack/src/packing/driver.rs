use std::cmp::Reverse;
use std::iter;
use std::time::Instant;

use itertools::Itertools;
use log::{debug, info, trace};

use crate::entities::{Bin, Container, Item};
use crate::geometry::Axis;
use crate::geometry::primitives::Point3;
use crate::packing::{PackError, bigger_container, pick_bin, place};
use crate::util::assertions;

/// Packs all `items` into bins opened from the `catalog`.
///
/// Items are sorted by descending volume (items with equal volume keep their relative order).
/// Every round opens a bin for the largest remaining item and fills it with as many of the remaining
/// items as possible, escalating to larger containers when needed. Items that do not make it into the
/// bin are carried over to the next round.
///
/// Fails with [`PackError::ItemTooLarge`] as soon as a round starts with an item that fits in no
/// container of the catalog. No bins are returned in that case.
///
/// The volume of every container and every item must fit in a `u64`.
/// [`import`](crate::io::import::import) verifies this for external instances.
pub fn pack<I: Item + Clone>(
    catalog: &[Container],
    items: impl IntoIterator<Item = I>,
) -> Result<Vec<Bin<I>>, PackError> {
    let start = Instant::now();

    let mut unpacked = items.into_iter().collect_vec();
    unpacked.sort_by_key(|item| Reverse(item.volume()));
    let n_items = unpacked.len();

    let mut bins = vec![];
    while let Some(first) = unpacked.first() {
        let Some(mut bin) = pick_bin(catalog, first) else {
            return Err(PackError::item_too_large(first));
        };
        debug!(
            "[PACK] opened bin '{}' for {} remaining items",
            bin.name(),
            unpacked.len()
        );

        unpacked = fill_bin(catalog, &mut bin, unpacked, true);

        debug_assert!(!bin.is_empty(), "the first item of a round always fits");
        debug_assert!(assertions::bin_is_feasible(&bin));

        if !bin.is_empty() {
            debug!(
                "[PACK] closed bin '{}' with {} items ({:.1}% full), {} items left",
                bin.name(),
                bin.placed_items.len(),
                bin.density() * 100.0,
                unpacked.len()
            );
            bins.push(bin);
        }
    }

    info!(
        "[PACK] packed {} items into {} bins in {:.3}ms",
        n_items,
        bins.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    Ok(bins)
}

/// Fills `bin` with `items`, in order, and returns the items that could not be placed.
///
/// The first item goes to the origin. If it does not fit, `bin` is replaced by the next larger container
/// until it does; when the catalog runs out, all items are returned and `bin` stays empty.
/// Every other item is tried at the anchor points of the items already in the bin.
/// With `escalate`, an item that fits nowhere triggers a search for a larger container that holds
/// the current contents of the bin together with the item.
fn fill_bin<I: Item + Clone>(
    catalog: &[Container],
    bin: &mut Bin<I>,
    items: Vec<I>,
    escalate: bool,
) -> Vec<I> {
    let mut items = items.into_iter();
    let Some(first) = items.next() else {
        return vec![];
    };

    while !place(bin, &first, Point3::ORIGIN) {
        match bigger_container(catalog, bin.volume()) {
            Some(container) => {
                trace!(
                    "[PACK] first item does not fit '{}', retrying with '{}'",
                    bin.name(),
                    container.name
                );
                *bin = Bin::new(container.clone());
            }
            None => return iter::once(first).chain(items).collect(),
        }
    }

    let mut unplaced = vec![];
    for item in items {
        if place_at_anchors(bin, &item) {
            continue;
        }
        if escalate {
            if let Some(larger) = escalate_bin(catalog, bin, &item) {
                *bin = larger;
                continue;
            }
        }
        trace!(
            "[PACK] item (w: {}, h: {}, d: {}) does not fit '{}', deferred",
            item.width(),
            item.height(),
            item.depth(),
            bin.name()
        );
        unplaced.push(item);
    }
    unplaced
}

/// Tries to place `item` against the faces of the items already in the bin.
///
/// For every axis (x, then y, then z) and every placed item (in placement order), the anchor is the
/// position of that placed item shifted by its own rotated extent along the axis.
/// The first anchor at which [`place`] succeeds is taken.
fn place_at_anchors<I: Item + Clone>(bin: &mut Bin<I>, item: &I) -> bool {
    for axis in Axis::ALL {
        for i in 0..bin.placed_items.len() {
            let anchor = {
                let pi = &bin.placed_items[i];
                pi.position.offset(axis, pi.dims()[axis.index()])
            };
            if place(bin, item, anchor) {
                return true;
            }
        }
    }
    false
}

/// Searches the catalog for a container that can hold all items of `bin` plus `item`.
///
/// Candidates are visited with a cursor of strictly increasing volume, so the search always terminates.
/// Each candidate is filled from scratch (without escalation) with the underlying items of `bin` in
/// placement order, followed by `item`. The first candidate that takes all of them is returned.
fn escalate_bin<I: Item + Clone>(catalog: &[Container], bin: &Bin<I>, item: &I) -> Option<Bin<I>> {
    let mut cursor = bigger_container(catalog, bin.volume());
    while let Some(container) = cursor {
        let batch = bin
            .items()
            .cloned()
            .chain(iter::once(item.clone()))
            .collect_vec();

        let mut trial = Bin::new(container.clone());
        let left = fill_bin(catalog, &mut trial, batch, false);

        if left.is_empty() {
            debug!(
                "[ESC] bin '{}' escalated to '{}' ({} items)",
                bin.name(),
                trial.name(),
                trial.placed_items.len()
            );
            return Some(trial);
        }
        cursor = bigger_container(catalog, trial.volume());
    }
    None
}
