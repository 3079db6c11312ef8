//! Presentation layer for wardrobe-stylist
//!
//! This crate contains CLI definitions, console formatting,
//! progress reporters, and the interactive wardrobe REPL.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ReplCommand, ReplReply, WardrobeRepl, parse_command};
pub use cli::commands::{Cli, OutputFormat};
pub use config::ConsoleConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
