//! Image loader port
//!
//! Turns what the user typed (a file path or a `data:` URL) into an image
//! payload ready for intake.

use std::path::PathBuf;
use thiserror::Error;
use wardrobe_domain::{DomainError, ImageBlob, InlineImage};

/// Image payload as it reached intake
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Raw bytes (e.g. read from a file)
    Blob(ImageBlob),
    /// Already base64-encoded (e.g. a pasted data URL)
    Inline(InlineImage),
}

/// Why an image could not be added
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not an image ({mime})")]
    UnsupportedType { path: PathBuf, mime: String },

    #[error(transparent)]
    Rejected(#[from] DomainError),
}

pub trait ImageLoader: Send + Sync {
    fn load(&self, source: &str) -> Result<ImageSource, IntakeError>;
}
