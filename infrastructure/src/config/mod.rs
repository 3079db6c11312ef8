//! Configuration file loading and startup credentials
//!
//! Configuration is merged from several sources. The priority order
//! (highest to lowest):
//!
//! 1. `WARDROBE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./wardrobe.toml` or `./.wardrobe.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/wardrobe-stylist/config.toml`
//! 5. Default values
//!
//! The API key is never read from a file; see [`ApiKey`].

mod credentials;
mod file_config;
mod loader;

pub use credentials::{API_KEY_VARS, ApiKey, ConfigurationError};
pub use file_config::{
    ConfigValidationError, DEFAULT_BASE_URL, DEFAULT_MODEL, FileConfig, FileGeminiConfig,
    FileIntakeConfig, FileLoggingConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
