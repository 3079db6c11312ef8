//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use wardrobe_domain::{MAX_IMAGE_BYTES, OutputFormat};

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default Gemini API host
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("model name cannot be empty")]
    EmptyModelName,

    #[error("base_url must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),

    #[error("temperature must be between 0.0 and 2.0 (got {0})")]
    InvalidTemperature(f32),

    #[error("top_p must be between 0.0 and 1.0 (got {0})")]
    InvalidTopP(f32),

    #[error("top_k must be at least 1")]
    InvalidTopK,

    #[error("max_image_bytes must be between 1 and 4194304 (got {0})")]
    InvalidImageLimit(usize),
}

/// Raw Gemini configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Model name, e.g. "gemini-2.5-flash"
    pub model: String,
    /// API host; overridable for proxies and tests
    pub base_url: String,
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    /// Timeout in seconds for the suggestion call (none by default)
    pub timeout_seconds: Option<u64>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.7,
            top_p: 1.0,
            top_k: 32,
            timeout_seconds: None,
        }
    }
}

/// Raw intake configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileIntakeConfig {
    /// Largest accepted image in bytes (capped at 4 MiB)
    pub max_image_bytes: usize,
}

impl Default for FileIntakeConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: MAX_IMAGE_BYTES,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
    /// Show a spinner while a suggestion is loading
    pub show_progress: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
            show_progress: true,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write a JSONL transcript of styling requests to this path
    pub conversation_log: Option<PathBuf>,
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub gemini: FileGeminiConfig,
    pub intake: FileIntakeConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let gemini = &self.gemini;

        if let Some(0) = gemini.timeout_seconds {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if gemini.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if !(gemini.base_url.starts_with("http://") || gemini.base_url.starts_with("https://")) {
            return Err(ConfigValidationError::InvalidBaseUrl(
                gemini.base_url.clone(),
            ));
        }
        if !(0.0..=2.0).contains(&gemini.temperature) {
            return Err(ConfigValidationError::InvalidTemperature(gemini.temperature));
        }
        if !(0.0..=1.0).contains(&gemini.top_p) {
            return Err(ConfigValidationError::InvalidTopP(gemini.top_p));
        }
        if gemini.top_k == 0 {
            return Err(ConfigValidationError::InvalidTopK);
        }

        let limit = self.intake.max_image_bytes;
        if limit == 0 || limit > MAX_IMAGE_BYTES {
            return Err(ConfigValidationError::InvalidImageLimit(limit));
        }

        Ok(())
    }
}
