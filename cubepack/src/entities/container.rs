use serde::{Deserialize, Serialize};

/// A catalog entry: the dimensions and weight of a type of container that bins can be opened from.
/// Containers are never modified, every [`Bin`](crate::entities::Bin) holds its own copy.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    pub width: u64,
    pub height: u64,
    pub depth: u64,
    /// Weight of the empty container. Informational, no weight limit is enforced.
    pub weight: u64,
}

impl Container {
    pub fn new(name: impl Into<String>, width: u64, height: u64, depth: u64, weight: u64) -> Self {
        Container {
            name: name.into(),
            width,
            height,
            depth,
            weight,
        }
    }

    pub fn dims(&self) -> [u64; 3] {
        [self.width, self.height, self.depth]
    }

    pub fn volume(&self) -> u64 {
        self.width * self.height * self.depth
    }

    /// A container without volume can hold nothing
    pub fn is_valid(&self) -> bool {
        self.volume() != 0
    }
}
