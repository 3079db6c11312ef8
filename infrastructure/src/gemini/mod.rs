//! Gemini adapter for outfit suggestions
//!
//! Talks to the `generateContent` REST endpoint with the API key in the
//! `x-goog-api-key` header. Request timeouts are applied by the caller.

mod gateway;
pub mod types;

pub use gateway::{GeminiGateway, GeminiSettings};
