//! Configuration module for rentr
//!
//! Manages application configuration: where the catalog and saved searches
//! live, the default output format, and quiet mode. Configuration is stored
//! in the user's config directory and can be overridden with `RENTR_*`
//! environment variables (for example `RENTR_QUIET=true`).

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Result display format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored listing cards
    #[default]
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// Pretty-printed JSON array
    Json,
}

const fn default_auto_backup() -> bool {
    true
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RentrConfig {
    /// Listing catalog (JSON); the bundled catalog is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Saved search storage; `<config_dir>/rentr/searches.toml` when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_searches: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Default format for search results
    #[serde(default)]
    pub format: OutputFormat,

    /// Keep a `.backup` copy of the saved search file before each write
    #[serde(default = "default_auto_backup")]
    pub auto_backup: bool,
}

impl Default for RentrConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            saved_searches: None,
            quiet: false,
            format: OutputFormat::Table,
            auto_backup: true,
        }
    }
}

impl RentrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("rentr").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a file layered with `RENTR_*` environment variables
    ///
    /// A missing file yields the defaults (plus any environment overrides).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or an environment value cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("RENTR").try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        debug!(path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    /// Save configuration to a file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Render the effective configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RentrConfig::default();
        assert!(config.catalog.is_none());
        assert!(config.saved_searches.is_none());
        assert!(!config.quiet);
        assert!(config.auto_backup);
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_config_path() {
        let path = RentrConfig::config_path().unwrap();
        assert!(path.ends_with("rentr/config.toml"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = RentrConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.format, RentrConfig::default().format);
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = RentrConfig {
            catalog: Some(PathBuf::from("/data/listings.json")),
            saved_searches: None,
            quiet: true,
            format: OutputFormat::Csv,
            auto_backup: false,
        };
        config.save_to(&path).unwrap();

        let loaded = RentrConfig::load_from(&path).unwrap();
        assert_eq!(loaded.catalog, Some(PathBuf::from("/data/listings.json")));
        assert_eq!(loaded.format, OutputFormat::Csv);
        assert!(!loaded.auto_backup);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "format = \"json\"\n").unwrap();

        let loaded = RentrConfig::load_from(&path).unwrap();
        assert_eq!(loaded.format, OutputFormat::Json);
        assert!(loaded.auto_backup);
        assert!(loaded.saved_searches.is_none());
    }

    #[test]
    fn test_to_toml_omits_unset_paths() {
        let toml = RentrConfig::default().to_toml().unwrap();
        assert!(toml.contains("format = \"table\""));
        assert!(!toml.contains("catalog"));
    }
}
