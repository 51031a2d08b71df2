use thiserror::Error;

/// Errors that end a packing run. No bins are returned alongside them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    /// No container of the catalog can hold the item, in any rotation.
    #[error(
        "item too large for any container: {{width: {width}, height: {height}, depth: {depth}, weight: {weight}}}"
    )]
    ItemTooLarge {
        width: u64,
        height: u64,
        depth: u64,
        weight: u64,
    },
}

impl PackError {
    pub(crate) fn item_too_large(item: &impl crate::entities::Item) -> Self {
        PackError::ItemTooLarge {
            width: item.width(),
            height: item.height(),
            depth: item.depth(),
            weight: item.weight(),
        }
    }
}
