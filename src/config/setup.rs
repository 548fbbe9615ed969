//! Interactive setup wizard for first-time configuration
//!
//! This module handles the prompts for creating an initial configuration
//! when qbuilder is set up for the first time.

use super::AppConfig;
use config::ConfigError;
use dialoguer::{Input, theme::ColorfulTheme};
use std::path::PathBuf;

/// Interactive first-time setup - prompts for the default catalog
///
/// 1. Prompts for a default catalog file (may be left empty)
/// 2. Prompts for the preset storage file
/// 3. Creates and saves the configuration
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The system config directory cannot be determined
/// - User input cannot be read
/// - The configuration cannot be saved
pub fn first_time_setup() -> Result<AppConfig, ConfigError> {
    println!("Welcome to qbuilder! Let's point it at a catalog.\n");

    let catalog: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Default catalog file (TOML or JSON, empty for none)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let default_presets = crate::presets::default_preset_path()
        .map_err(|e| ConfigError::Message(e.to_string()))?;
    let presets: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Preset storage file")
        .default(default_presets.to_string_lossy().to_string())
        .interact_text()
        .map_err(|e| ConfigError::Message(format!("Failed to read input: {e}")))?;

    let config = AppConfig {
        catalog: (!catalog.trim().is_empty()).then(|| PathBuf::from(catalog.trim())),
        presets_path: Some(PathBuf::from(presets)),
        ..AppConfig::default()
    };

    config.save()?;

    println!("\nConfiguration saved successfully!");
    Ok(config)
}
