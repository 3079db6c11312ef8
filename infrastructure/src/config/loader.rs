//! Configuration file loader with multi-source merging

use super::credentials::ConfigurationError;
use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["wardrobe.toml", ".wardrobe.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from all sources
    ///
    /// Priority (highest to lowest):
    /// 1. `WARDROBE_*` environment variables (`WARDROBE_GEMINI__MODEL=...`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./wardrobe.toml` or `./.wardrobe.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/wardrobe-stylist/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigurationError> {
        Self::extract(Self::figment(config_path))
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Build the merged provider chain without extracting it
    pub fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("WARDROBE_").split("__"))
    }

    /// Extract and validate a config from a provider chain
    pub fn extract(figment: Figment) -> Result<FileConfig, ConfigurationError> {
        let config: FileConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/wardrobe-stylist/config.toml if set,
    /// otherwise the platform config directory equivalent.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("wardrobe-stylist").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Env:     WARDROBE_* variables");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./wardrobe.toml or ./.wardrobe.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
