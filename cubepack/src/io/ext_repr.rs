use serde::{Deserialize, Serialize};

use crate::geometry::Rotation;
use crate::geometry::primitives::Point3;

/// External representation of an [`Instance`](crate::entities::Instance).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Catalog of containers, in order of preference
    pub containers: Vec<ExtContainer>,
    /// Set of items to be packed
    pub items: Vec<ExtItem>,
}

/// External representation of a [`Container`](crate::entities::Container).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtContainer {
    pub name: String,
    pub width: u64,
    pub height: u64,
    pub depth: u64,
    /// Weight of the empty container
    #[serde(default)]
    pub weight: u64,
}

/// External representation of a [`Parcel`](crate::entities::Parcel), with its demand.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtItem {
    /// Unique identifier of the item
    pub id: u64,
    pub width: u64,
    pub height: u64,
    pub depth: u64,
    #[serde(default)]
    pub weight: u64,
    /// Number of copies to be packed
    #[serde(default = "default_demand")]
    pub demand: u64,
}

fn default_demand() -> u64 {
    1
}

/// External representation of a packing result.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    /// The bins that were used, in the order they were opened
    pub bins: Vec<ExtBin>,
    /// Total number of items placed
    pub n_items: usize,
    /// Total volume of the placed items over the total volume of the bins
    pub density: f32,
    /// Time it took to pack the items, in milliseconds
    pub run_time_ms: u64,
}

/// External representation of a [`Bin`](crate::entities::Bin).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtBin {
    /// The container the bin was opened from
    pub container: ExtContainer,
    /// Weight of the container and all items in it
    pub total_weight: u64,
    pub density: f32,
    /// The items placed in the bin, in placement order
    pub placed_items: Vec<ExtPlacedItem>,
}

/// External representation of a [`PlacedItem`](crate::entities::PlacedItem).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedItem {
    /// The id of the item in the instance
    pub item_id: u64,
    /// Minimum corner of the placed item: (x, y, z)
    pub position: Point3,
    pub rotation: Rotation,
    /// Extents of the placed item after rotation: (x, y, z)
    pub dims: [u64; 3],
}
