//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Every variant is recoverable: the state container records an inline
/// message and the catalog is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Image is {size} bytes, which exceeds the {limit} byte limit")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Unknown category: {0} (expected tops, bottoms or shoes)")]
    InvalidCategory(String),

    #[error("No item matches '{0}'")]
    UnknownItem(String),

    #[error("'{0}' matches more than one item; use its number or full id")]
    AmbiguousItem(String),
}
