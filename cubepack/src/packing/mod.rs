mod driver;
mod error;
mod placement;
mod selection;

#[doc(inline)]
pub use driver::pack;
#[doc(inline)]
pub use error::PackError;
#[doc(inline)]
pub use placement::place;
#[doc(inline)]
pub use selection::{bigger_container, pick_bin};
