mod axis;
mod rotation;

pub mod geo_traits;
pub mod primitives;

#[doc(inline)]
pub use axis::Axis;
#[doc(inline)]
pub use rotation::Rotation;
