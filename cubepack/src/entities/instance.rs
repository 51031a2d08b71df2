use itertools::Itertools;

use crate::entities::{Container, Item, Parcel};

/// Instance of the 3D bin packing problem: a catalog of containers and the items to be packed.
#[derive(Debug, Clone)]
pub struct Instance {
    pub name: String,
    /// Catalog of containers, in the order bins are selected from it
    pub containers: Vec<Container>,
    /// The items to be packed and their demands
    pub items: Vec<(Parcel, usize)>,
}

impl Instance {
    pub fn new(name: String, containers: Vec<Container>, items: Vec<(Parcel, usize)>) -> Self {
        Self {
            name,
            containers,
            items,
        }
    }

    /// Every item repeated according to its demand, in declaration order
    pub fn expanded_items(&self) -> Vec<Parcel> {
        self.items
            .iter()
            .flat_map(|(item, qty)| std::iter::repeat_n(*item, *qty))
            .collect_vec()
    }

    pub fn total_item_qty(&self) -> usize {
        self.items.iter().map(|(_, qty)| *qty).sum()
    }

    pub fn item_volume(&self) -> u64 {
        self.items
            .iter()
            .map(|(item, qty)| item.volume() * *qty as u64)
            .sum()
    }

    pub fn item(&self, id: u64) -> Option<&Parcel> {
        self.items
            .iter()
            .map(|(item, _)| item)
            .find(|item| item.id == id)
    }
}
