//! Image payloads
//!
//! [`ImageBlob`] is what intake receives (raw bytes plus a mime type);
//! [`InlineImage`] is the base64 text form stored on an item and embedded
//! verbatim in outbound requests.

use crate::core::error::DomainError;
use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

/// Maximum accepted image size (4 MiB)
pub const MAX_IMAGE_BYTES: usize = 4 * 1024 * 1024;

/// Mime type used when a data URL doesn't name a recognizable image type
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// Raw image input for intake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlob {
    pub bytes: Vec<u8>,
    pub mime_type: String,
    source_len: usize,
}

impl ImageBlob {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            source_len: bytes.len(),
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Record the full size of the source when only a prefix of it was read
    pub fn with_source_len(mut self, len: usize) -> Self {
        self.source_len = len.max(self.bytes.len());
        self
    }

    /// Size of the source image in bytes
    pub fn len(&self) -> usize {
        self.source_len
    }
}

/// An image encoded as base64 text (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

impl InlineImage {
    /// Encode raw bytes
    pub fn encode(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: STANDARD.encode(bytes),
        }
    }

    /// Parse a `data:<mime>;base64,<payload>` URL.
    ///
    /// The payload is everything after the first comma. When the prefix does not
    /// name an `image/<letters>` type the mime type falls back to
    /// [`DEFAULT_IMAGE_MIME`].
    pub fn from_data_url(url: &str) -> Result<Self, DomainError> {
        let Some((header, payload)) = url.split_once(',') else {
            return Err(DomainError::InvalidImage(
                "data URL has no payload".to_string(),
            ));
        };
        if payload.is_empty() {
            return Err(DomainError::InvalidImage("data URL is empty".to_string()));
        }

        let mime_type = header
            .strip_prefix("data:")
            .and_then(|rest| rest.strip_suffix(";base64"))
            .filter(|mime| is_image_mime(mime))
            .unwrap_or(DEFAULT_IMAGE_MIME);

        Ok(Self {
            mime_type: mime_type.to_string(),
            data: payload.to_string(),
        })
    }

    /// Decode the payload, rejecting anything that isn't standard base64
    pub fn decode(&self) -> Result<Vec<u8>, DomainError> {
        STANDARD
            .decode(&self.data)
            .map_err(|e| DomainError::InvalidImage(format!("payload is not valid base64: {}", e)))
    }

    /// Size of the decoded payload, estimated from the base64 length
    pub fn decoded_len(&self) -> usize {
        let padding = self.data.bytes().rev().take_while(|b| *b == b'=').count();
        (self.data.len() * 3 / 4).saturating_sub(padding)
    }
}

/// `image/` followed by ASCII letters only
fn is_image_mime(mime: &str) -> bool {
    mime.strip_prefix("image/")
        .is_some_and(|sub| !sub.is_empty() && sub.chars().all(|c| c.is_ascii_alphabetic()))
}
