//! Presentation-facing value objects
//!
//! Shared by the config file (infrastructure) and the CLI (presentation).

mod output_format;

pub use output_format::OutputFormat;
