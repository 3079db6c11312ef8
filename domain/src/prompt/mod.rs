//! Prompt domain
//!
//! The fixed stylist instructions and the request shape sent to the
//! styling service.

mod stylist;

pub use stylist::{OutfitRequest, StylistPrompt};
