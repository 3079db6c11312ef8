//! Service credential and startup configuration errors

use super::file_config::ConfigValidationError;
use thiserror::Error;

/// Environment variables checked for the API key, in order
pub const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

/// Fatal configuration problems found at startup.
///
/// The binary renders these as a configuration screen instead of running.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("The Gemini API key is missing. Set the API_KEY environment variable to continue.")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigValidationError),

    #[error("Failed to load configuration: {0}")]
    Load(String),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(String),
}

impl From<figment::Error> for ConfigurationError {
    fn from(error: figment::Error) -> Self {
        ConfigurationError::Load(error.to_string())
    }
}

/// The static API credential
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Read the key from the process environment
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the key through an arbitrary lookup (first non-blank wins)
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigurationError> {
        API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .map(ApiKey)
            .ok_or(ConfigurationError::MissingApiKey)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
