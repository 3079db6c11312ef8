//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod add_item;
pub mod request_suggestion;
pub mod toggle_selection;
