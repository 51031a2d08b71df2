use serde::{Deserialize, Serialize};

/// Capabilities required from anything that is to be packed.
///
/// The packing engine never mutates an item, it only reads its dimensions.
pub trait Item {
    fn width(&self) -> u64;
    fn height(&self) -> u64;
    fn depth(&self) -> u64;
    fn weight(&self) -> u64;

    fn volume(&self) -> u64 {
        self.width() * self.height() * self.depth()
    }
}

impl<T: Item + ?Sized> Item for &T {
    fn width(&self) -> u64 {
        (**self).width()
    }

    fn height(&self) -> u64 {
        (**self).height()
    }

    fn depth(&self) -> u64 {
        (**self).depth()
    }

    fn weight(&self) -> u64 {
        (**self).weight()
    }
}

/// A cuboid item with an identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parcel {
    pub id: u64,
    pub width: u64,
    pub height: u64,
    pub depth: u64,
    pub weight: u64,
}

impl Parcel {
    pub fn new(id: u64, width: u64, height: u64, depth: u64, weight: u64) -> Self {
        Parcel {
            id,
            width,
            height,
            depth,
            weight,
        }
    }
}

impl Item for Parcel {
    fn width(&self) -> u64 {
        self.width
    }

    fn height(&self) -> u64 {
        self.height
    }

    fn depth(&self) -> u64 {
        self.depth
    }

    fn weight(&self) -> u64 {
        self.weight
    }
}
