use crate::entities::{Bin, Container, Item};
use crate::geometry::primitives::Point3;
use crate::packing::place;

/// Opens a bin for `item`: the first container of the catalog (in declared order) in which the item can be
/// placed at the origin, in any rotation.
/// Containers without volume are skipped.
pub fn pick_bin<I: Item + Clone>(catalog: &[Container], item: &I) -> Option<Bin<I>> {
    catalog
        .iter()
        .filter(|c| c.is_valid())
        .find(|c| {
            let mut probe = Bin::new((*c).clone());
            place(&mut probe, item, Point3::ORIGIN)
        })
        .map(|c| Bin::new(c.clone()))
}

/// The first container of the catalog (in declared order) whose volume strictly exceeds `volume`.
/// The catalog is not required to be sorted, so this is not necessarily the smallest larger container.
pub fn bigger_container(catalog: &[Container], volume: u64) -> Option<&Container> {
    catalog.iter().find(|c| c.volume() > volume)
}
