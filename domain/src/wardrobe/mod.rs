//! Wardrobe domain
//!
//! Clothing items, the selection set, the suggestion state machine and the
//! state container that ties them together.

pub mod category;
pub mod grouping;
pub mod image;
pub mod item;
pub mod selection;
pub mod state;
pub mod suggestion;
