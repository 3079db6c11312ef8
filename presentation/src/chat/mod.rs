//! Interactive wardrobe session
//!
//! Provides a line-editor REPL for adding items, selecting them and asking
//! for outfit suggestions.

mod repl;

pub use repl::{ReplCommand, ReplReply, WardrobeRepl, parse_command};
