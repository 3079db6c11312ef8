//! Domain layer for wardrobe-stylist
//!
//! This crate contains the catalog entities, value objects and the session
//! state container. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! - **Catalog**: every clothing item added during the session, append-only
//! - **Selection**: the subset of catalog items chosen for a styling request
//! - **Suggestion**: the markdown text returned by the styling service, or
//!   the inline error that replaced it

pub mod config;
pub mod core;
pub mod prompt;
pub mod wardrobe;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{error::DomainError, string::truncate};
pub use prompt::{OutfitRequest, StylistPrompt};
pub use wardrobe::{
    category::Category,
    grouping::{CategoryGroup, group_by_category},
    image::{DEFAULT_IMAGE_MIME, ImageBlob, InlineImage, MAX_IMAGE_BYTES},
    item::{ClothingItem, ItemId},
    selection::Selection,
    state::{BeginSuggestion, WardrobeState},
    suggestion::{
        FALLBACK_MESSAGE, NO_SELECTION_MESSAGE, SuggestionFailure, SuggestionFailureKind,
        SuggestionStatus,
    },
};
