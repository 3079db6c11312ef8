//! Infrastructure layer for wardrobe-stylist
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the Gemini gateway, image intake,
//! configuration loading and the JSONL transcript.

pub mod config;
pub mod gemini;
pub mod image;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ApiKey, ConfigLoader, ConfigValidationError, ConfigurationError, FileConfig,
    FileGeminiConfig, FileIntakeConfig, FileLoggingConfig, FileOutputConfig,
};
pub use gemini::{GeminiGateway, GeminiSettings};
pub use image::ImageFileLoader;
pub use logging::JsonlConversationLogger;
