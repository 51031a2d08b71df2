use std::fmt::Display;

use crate::entities::{Container, Item, PlacedItem};
use crate::geometry::Rotation;
use crate::geometry::primitives::Point3;
use crate::util::assertions;

/// A [`Bin`] is a [`Container`] that has been opened and is being filled with items.
/// Items are only ever appended, in the order they were placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bin<I> {
    /// The container this bin was opened from
    pub container: Container,
    /// All items placed in the bin, in placement order
    pub placed_items: Vec<PlacedItem<I>>,
}

impl<I: Item> Bin<I> {
    /// Opens a new, empty bin
    pub fn new(container: Container) -> Self {
        Bin {
            container,
            placed_items: vec![],
        }
    }

    /// Appends an item to the bin without checking whether it fits.
    /// Use [`place`](crate::packing::place) to search for a valid rotation first.
    pub fn place_item(&mut self, item: I, position: Point3, rotation: Rotation) {
        self.placed_items.push(PlacedItem::new(item, position, rotation));

        debug_assert!(assertions::placed_item_within_bounds(
            self,
            self.placed_items.len() - 1
        ));
    }

    pub fn name(&self) -> &str {
        &self.container.name
    }

    pub fn dims(&self) -> [u64; 3] {
        self.container.dims()
    }

    pub fn volume(&self) -> u64 {
        self.container.volume()
    }

    pub fn is_valid(&self) -> bool {
        self.container.is_valid()
    }

    /// True if no items are placed
    pub fn is_empty(&self) -> bool {
        self.placed_items.is_empty()
    }

    /// Weight of the container plus the weight of all placed items
    pub fn total_weight(&self) -> u64 {
        self.container.weight
            + self
                .placed_items
                .iter()
                .map(|pi| pi.item.weight())
                .sum::<u64>()
    }

    /// The sum of the volumes of all placed items
    pub fn placed_volume(&self) -> u64 {
        self.placed_items.iter().map(|pi| pi.item.volume()).sum()
    }

    /// Ratio of the placed volume to the volume of the bin
    pub fn density(&self) -> f32 {
        match self.volume() {
            0 => 0.0,
            v => self.placed_volume() as f32 / v as f32,
        }
    }

    /// The underlying items, in placement order
    pub fn items(&self) -> impl Iterator<Item = &I> {
        self.placed_items.iter().map(|pi| &pi.item)
    }

    /// Empties the bin, returning the underlying items in placement order
    pub fn into_items(self) -> Vec<I> {
        self.placed_items.into_iter().map(|pi| pi.item).collect()
    }
}

impl<I: Item> Display for Bin<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = &self.container;
        write!(
            f,
            "bin (w: {}, h: {}, d: {}, weight: {}, name: {}) items: {}",
            c.width,
            c.height,
            c.depth,
            c.weight,
            c.name,
            self.placed_items.len()
        )?;
        for (i, pi) in self.placed_items.iter().enumerate() {
            write!(f, "\n  item {i}: {pi}")?;
        }
        Ok(())
    }
}
