//! Presentation-level configuration
//!
//! How results are printed and how the REPL behaves. Built by the binary
//! from the config file and CLI flags.

use std::path::PathBuf;
use wardrobe_domain::OutputFormat;

/// Console configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// How a suggestion is printed
    pub format: OutputFormat,
    /// Show a spinner while a suggestion is loading
    pub show_progress: bool,
    /// REPL history file; defaults to the platform data directory
    pub history_file: Option<PathBuf>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_progress: true,
            history_file: None,
        }
    }
}

impl ConsoleConfig {
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// History file to use, if any location is available
    pub fn history_path(&self) -> Option<PathBuf> {
        self.history_file.clone().or_else(|| {
            dirs::data_dir().map(|p| p.join("wardrobe-stylist").join("history.txt"))
        })
    }
}
