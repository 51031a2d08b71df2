//! Greedy 3D bin packing over a catalog of differently sized containers.
//!
//! Items are sorted by descending volume and placed one by one at anchor points derived
//! from the items already in a bin. When an item does not fit, the bin is escalated to the
//! next strictly larger container of the catalog. Items that still do not fit are carried
//! over into a freshly opened bin.

/// Points, axis-aligned cuboids, rotations and the collision test between them
pub mod geometry;

/// Items, containers, bins and placed items
pub mod entities;

/// Placement, bin selection and the packing driver
pub mod packing;

/// External (serializable) representations, import and export
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use packing::{PackError, pack};
