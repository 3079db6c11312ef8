//! Category value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Clothing category (Value Object)
///
/// A closed set: an item is always exactly one of these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Tops,
    Bottoms,
    Shoes,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 3] = [Category::Tops, Category::Bottoms, Category::Shoes];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tops => "Tops",
            Category::Bottoms => "Bottoms",
            Category::Shoes => "Shoes",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tops" | "top" => Ok(Category::Tops),
            "bottoms" | "bottom" => Ok(Category::Bottoms),
            "shoes" | "shoe" => Ok(Category::Shoes),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }
}
