//! Clothing item entity

use super::category::Category;
use super::image::InlineImage;
use serde::{Deserialize, Serialize};

/// Unique identifier for a clothing item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(format!("item-{}", uuid::Uuid::new_v4()))
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A clothing item in the catalog (Entity)
///
/// Immutable once created; there is no delete operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingItem {
    id: ItemId,
    category: Category,
    image: InlineImage,
}

impl ClothingItem {
    pub fn new(category: Category, image: InlineImage) -> Self {
        Self {
            id: ItemId::generate(),
            category,
            image,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn image(&self) -> &InlineImage {
        &self.image
    }
}
