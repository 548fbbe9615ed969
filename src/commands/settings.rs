//! Config command - read and update configuration values

use crate::QbError;
use crate::cli::ConfigCommands;
use crate::config::{AppConfig, first_time_setup};
use std::path::PathBuf;

type Result<T> = std::result::Result<T, QbError>;

const KEYS: &str = "quiet, catalog, presets_path";

/// Execute a config subcommand
///
/// # Errors
///
/// Returns `QbError` if the key or value is invalid or the config cannot be saved.
pub fn execute(mut config: AppConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let message = apply_setting(&mut config, setting)?;
            config.save()?;
            if !quiet {
                println!("{message}");
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", get_setting(&config, key)?);
        }
        ConfigCommands::Init => {
            let config = first_time_setup()?;
            if !quiet {
                if let Some(catalog) = &config.catalog {
                    println!("Default catalog: {}", catalog.display());
                }
            }
        }
    }
    Ok(())
}

/// Apply a `key=value` setting, returning a confirmation message
///
/// An empty value clears `catalog` and `presets_path`.
///
/// # Errors
///
/// Returns `QbError::InvalidInput` for a malformed setting, unknown key or bad value.
pub fn apply_setting(config: &mut AppConfig, setting: &str) -> Result<String> {
    let (key, value) = setting.split_once('=').ok_or_else(|| {
        QbError::InvalidInput("Invalid format. Use: qb config set key=value".into())
    })?;
    let (key, value) = (key.trim(), value.trim());

    match key {
        "quiet" => {
            let new_value = value.parse::<bool>().map_err(|_| {
                QbError::InvalidInput(format!(
                    "Invalid value for quiet: '{value}'. Use 'true' or 'false'"
                ))
            })?;
            config.quiet = new_value;
            Ok(format!("Set quiet = {new_value}"))
        }
        "catalog" => {
            config.catalog = optional_path(value);
            Ok(format!("Set catalog = {value}"))
        }
        "presets_path" => {
            config.presets_path = optional_path(value);
            Ok(format!("Set presets_path = {value}"))
        }
        _ => Err(unknown_key(key)),
    }
}

/// Current value of a configuration key as text
///
/// # Errors
///
/// Returns `QbError::InvalidInput` for an unknown key.
pub fn get_setting(config: &AppConfig, key: &str) -> Result<String> {
    let display = |path: &Option<PathBuf>| {
        path.as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    };

    match key {
        "quiet" => Ok(config.quiet.to_string()),
        "catalog" => Ok(display(&config.catalog)),
        "presets_path" => Ok(display(&config.presets_path)),
        _ => Err(unknown_key(key)),
    }
}

fn optional_path(value: &str) -> Option<PathBuf> {
    (!value.is_empty()).then(|| PathBuf::from(value))
}

fn unknown_key(key: &str) -> QbError {
    QbError::InvalidInput(format!(
        "Unknown configuration key: '{key}'. Available keys: {KEYS}"
    ))
}
