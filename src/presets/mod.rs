//! Saved selections
//!
//! Presets let a selection outlive one builder: save what is selected under a
//! name, and seed a later builder from it. A preset that no longer matches
//! its catalog is rejected when it is used to seed a store, never silently
//! trimmed.
//!
//! # Storage
//!
//! Presets are stored in TOML format at `~/.config/qbuilder/presets.toml` by
//! default. The location can be changed with `presets_path` in the
//! configuration.
//!
//! # Examples
//!
//! ```no_run
//! use qbuilder::presets::PresetManager;
//! use qbuilder::selection::Selection;
//! use std::path::PathBuf;
//!
//! let manager = PresetManager::new(PathBuf::from("presets.toml"));
//! let selection: Selection = [("Sector", "Tech")].into_iter().collect();
//!
//! manager.save("tech", "Technology only", &selection, None, false).unwrap();
//! let preset = manager.get("tech").unwrap();
//! assert_eq!(preset.selection, selection);
//! ```

pub mod error;
pub mod operations;
pub mod types;

pub use error::PresetError;
pub use operations::PresetManager;
pub use types::{Preset, PresetStorage, validate_preset_name};

use std::path::PathBuf;

/// Get the default preset storage path
///
/// Returns `~/.config/qbuilder/presets.toml` (platform-specific)
///
/// # Errors
///
/// Returns `PresetError` if the config directory cannot be determined
pub fn default_preset_path() -> Result<PathBuf, PresetError> {
    let config_dir = dirs::config_dir().ok_or_else(|| {
        PresetError::Config(config::ConfigError::Message(
            "Could not determine config directory".to_string(),
        ))
    })?;

    Ok(config_dir.join("qbuilder").join("presets.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset_path() {
        if let Ok(path) = default_preset_path() {
            assert!(path.to_string_lossy().contains("qbuilder"));
            assert!(path.to_string_lossy().ends_with("presets.toml"));
        }
    }
}
