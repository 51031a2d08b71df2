mod bin;
mod container;
mod instance;
mod item;
mod placed_item;

#[doc(inline)]
pub use bin::Bin;

#[doc(inline)]
pub use container::Container;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use item::Parcel;

#[doc(inline)]
pub use placed_item::PlacedItem;
