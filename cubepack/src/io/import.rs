use std::collections::HashSet;

use anyhow::{Result, bail, ensure};
use itertools::Itertools;
use rayon::prelude::*;

use crate::entities::{Container, Instance, Item, Parcel};
use crate::io::ext_repr::{ExtContainer, ExtInstance, ExtItem};

/// Imports an instance into the library
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    ensure!(
        !ext_instance.containers.is_empty(),
        "instance '{}' has no containers",
        ext_instance.name
    );

    let containers = ext_instance
        .containers
        .par_iter()
        .map(import_container)
        .collect::<Result<Vec<Container>>>()?;

    let items = {
        let items = ext_instance
            .items
            .par_iter()
            .map(import_item)
            .collect::<Result<Vec<(Parcel, usize)>>>()?;

        let mut seen = HashSet::new();
        let duplicates = items
            .iter()
            .filter(|(item, _)| !seen.insert(item.id))
            .map(|(item, _)| item.id)
            .sorted()
            .dedup()
            .collect_vec();
        ensure!(
            duplicates.is_empty(),
            "all items should have unique IDs, duplicates: {duplicates:?}"
        );
        items
    };

    ensure!(
        items
            .iter()
            .try_fold(0u64, |acc, (item, qty)| acc.checked_add(item.volume() * *qty as u64))
            .is_some(),
        "total item volume of instance '{}' does not fit in 64 bits",
        ext_instance.name
    );

    Ok(Instance::new(ext_instance.name.clone(), containers, items))
}

pub fn import_container(ext_container: &ExtContainer) -> Result<Container> {
    ensure!(
        checked_volume(ext_container.width, ext_container.height, ext_container.depth).is_some(),
        "volume of container '{}' does not fit in 64 bits: {}x{}x{}",
        ext_container.name,
        ext_container.width,
        ext_container.height,
        ext_container.depth
    );
    let container = Container::new(
        ext_container.name.clone(),
        ext_container.width,
        ext_container.height,
        ext_container.depth,
        ext_container.weight,
    );
    if !container.is_valid() {
        bail!(
            "container '{}' has no volume: {}x{}x{}",
            container.name,
            container.width,
            container.height,
            container.depth
        );
    }
    Ok(container)
}

pub fn import_item(ext_item: &ExtItem) -> Result<(Parcel, usize)> {
    let volume = checked_volume(ext_item.width, ext_item.height, ext_item.depth);
    ensure!(
        volume.and_then(|v| v.checked_mul(ext_item.demand)).is_some(),
        "volume of item {} (x{}) does not fit in 64 bits: {}x{}x{}",
        ext_item.id,
        ext_item.demand,
        ext_item.width,
        ext_item.height,
        ext_item.depth
    );
    let demand = usize::try_from(ext_item.demand)?;
    let parcel = Parcel::new(
        ext_item.id,
        ext_item.width,
        ext_item.height,
        ext_item.depth,
        ext_item.weight,
    );
    Ok((parcel, demand))
}

fn checked_volume(width: u64, height: u64, depth: u64) -> Option<u64> {
    width.checked_mul(height)?.checked_mul(depth)
}
