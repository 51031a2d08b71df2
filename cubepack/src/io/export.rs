use std::time::Duration;

use crate::entities::{Bin, Container, Parcel, PlacedItem};
use crate::io::ext_repr::{ExtBin, ExtContainer, ExtPlacedItem, ExtSolution};

/// Exports the result of a packing run out of the library
pub fn export(bins: &[Bin<Parcel>], run_time: Duration) -> ExtSolution {
    let total_volume = bins.iter().map(|b| b.volume()).sum::<u64>();
    let placed_volume = bins.iter().map(|b| b.placed_volume()).sum::<u64>();
    let density = match total_volume {
        0 => 0.0,
        v => placed_volume as f32 / v as f32,
    };

    ExtSolution {
        bins: bins.iter().map(export_bin).collect(),
        n_items: bins.iter().map(|b| b.placed_items.len()).sum(),
        density,
        run_time_ms: run_time.as_millis() as u64,
    }
}

pub fn export_bin(bin: &Bin<Parcel>) -> ExtBin {
    ExtBin {
        container: export_container(&bin.container),
        total_weight: bin.total_weight(),
        density: bin.density(),
        placed_items: bin.placed_items.iter().map(export_placed_item).collect(),
    }
}

pub fn export_container(container: &Container) -> ExtContainer {
    ExtContainer {
        name: container.name.clone(),
        width: container.width,
        height: container.height,
        depth: container.depth,
        weight: container.weight,
    }
}

pub fn export_placed_item(pi: &PlacedItem<Parcel>) -> ExtPlacedItem {
    ExtPlacedItem {
        item_id: pi.item.id,
        position: pi.position,
        rotation: pi.rotation,
        dims: pi.dims(),
    }
}
