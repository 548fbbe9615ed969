//! Configuration module for qbuilder
//!
//! Manages application configuration: the default catalog file, where presets
//! are stored, output verbosity and the labels shown by the terminal views.
//! Configuration is stored in the user's config directory.

mod setup;

pub use setup::first_time_setup;

use crate::builder::Labels;
use crate::presets::{PresetError, default_preset_path};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog file used when `--catalog` is not given
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Preset storage file (defaults to `presets.toml` next to the config)
    #[serde(default)]
    pub presets_path: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Texts used by the terminal views
    #[serde(default)]
    pub labels: Labels,
}

impl AppConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("qbuilder").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it does not exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
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

    /// Catalog to use: the explicit override, else the configured default
    #[must_use]
    pub fn catalog_path(&self, override_path: Option<&Path>) -> Option<PathBuf> {
        override_path
            .map(Path::to_path_buf)
            .or_else(|| self.catalog.clone())
    }

    /// Preset storage file
    ///
    /// # Errors
    ///
    /// Returns `PresetError` if no path is configured and the config directory
    /// cannot be determined.
    pub fn preset_path(&self) -> Result<PathBuf, PresetError> {
        match &self.presets_path {
            Some(path) => Ok(path.clone()),
            None => default_preset_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.catalog.is_none());
        assert!(config.presets_path.is_none());
        assert!(!config.quiet);
        assert_eq!(config.labels, Labels::default());
    }

    #[test]
    fn test_load_from_missing_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qbuilder").join("config.toml");

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.catalog = Some(PathBuf::from("/data/catalog.toml"));
        config.quiet = true;
        config.labels.summary_title = "Filters".to_string();
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "quiet = true\n").unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert!(loaded.quiet);
        assert!(loaded.catalog.is_none());
        assert_eq!(loaded.labels.no_results_text, "No filters found");
    }

    #[test]
    fn test_catalog_override_wins() {
        let config = AppConfig {
            catalog: Some(PathBuf::from("default.toml")),
            ..AppConfig::default()
        };

        assert_eq!(
            config.catalog_path(Some(Path::new("other.json"))),
            Some(PathBuf::from("other.json"))
        );
        assert_eq!(config.catalog_path(None), Some(PathBuf::from("default.toml")));
        assert_eq!(AppConfig::default().catalog_path(None), None);
    }

    #[test]
    fn test_configured_preset_path() {
        let config = AppConfig {
            presets_path: Some(PathBuf::from("/tmp/presets.toml")),
            ..AppConfig::default()
        };
        assert_eq!(config.preset_path().unwrap(), PathBuf::from("/tmp/presets.toml"));
    }
}
