//! Preset data structures
//!
//! - `Preset`: a named, saved selection with timestamps
//! - `PresetStorage`: the TOML root holding every preset

use crate::selection::Selection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A saved selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preset {
    /// Unique preset name
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Catalog the selection was made against, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// When the preset was first saved
    pub created: DateTime<Utc>,

    /// When the preset was last overwritten
    pub updated: DateTime<Utc>,

    /// The saved selection
    #[serde(default)]
    pub selection: Selection,
}

impl Preset {
    /// Create a new preset stamped with the current time
    #[must_use]
    pub fn new(name: String, description: String, selection: Selection) -> Self {
        let now = Utc::now();
        Self {
            name,
            description,
            catalog: None,
            created: now,
            updated: now,
            selection,
        }
    }

    /// Remember which catalog file the selection belongs to
    #[must_use]
    pub fn with_catalog(mut self, catalog: PathBuf) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Replace the selection, keeping the creation time
    pub fn replace_selection(&mut self, selection: Selection) {
        self.selection = selection;
        self.updated = Utc::now();
    }
}

/// Storage container for all presets
///
/// This is the root structure that gets serialized to TOML.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PresetStorage {
    /// All saved presets
    #[serde(rename = "preset", default)]
    pub presets: Vec<Preset>,
}

impl PresetStorage {
    /// Create a new empty preset storage
    #[must_use]
    pub const fn new() -> Self {
        Self {
            presets: Vec::new(),
        }
    }

    /// Get a preset by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    /// Get a mutable preset by name
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Preset> {
        self.presets.iter_mut().find(|p| p.name == name)
    }

    /// Check if a preset exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.presets.iter().any(|p| p.name == name)
    }

    /// Remove a preset by name
    pub fn remove(&mut self, name: &str) -> Option<Preset> {
        let pos = self.presets.iter().position(|p| p.name == name)?;
        Some(self.presets.remove(pos))
    }

    /// List all preset names
    #[must_use]
    pub fn list_names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }
}

/// Validate a preset name
///
/// Preset names must be 1-64 characters of ASCII letters, digits, `-` or `_`.
///
/// # Errors
///
/// Returns a description of the problem if the name is empty, too long, or
/// contains other characters.
pub fn validate_preset_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Preset name cannot be empty".to_string());
    }

    if name.len() > 64 {
        return Err("Preset name cannot exceed 64 characters".to_string());
    }

    if let Some(ch) = name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        return Err(format!(
            "Preset name contains invalid character '{ch}' (use letters, digits, '-' or '_')"
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_preset_name() {
        assert!(validate_preset_name("tech-us_2024").is_ok());
        assert!(validate_preset_name("").is_err());
        assert!(validate_preset_name(&"a".repeat(65)).is_err());
        assert!(validate_preset_name("has space").is_err());
        assert!(validate_preset_name("slash/name").is_err());
    }

    #[test]
    fn test_storage_lookup_and_remove() {
        let mut storage = PresetStorage::new();
        storage.presets.push(Preset::new("a".into(), String::new(), Selection::new()));
        storage.presets.push(Preset::new("b".into(), String::new(), Selection::new()));

        assert!(storage.contains("a"));
        assert_eq!(storage.list_names(), vec!["a", "b"]);
        assert!(storage.remove("a").is_some());
        assert!(storage.remove("a").is_none());
        assert!(storage.get("b").is_some());
    }

    #[test]
    fn test_storage_toml_shape() {
        let selection: Selection = [("Asset Class", "Equity"), ("Region", "EU")]
            .into_iter()
            .collect();
        let mut storage = PresetStorage::new();
        storage
            .presets
            .push(Preset::new("mine".into(), "demo".into(), selection.clone()));

        let text = toml::to_string_pretty(&storage).unwrap();
        assert!(text.contains("[[preset]]"));
        assert!(text.contains("name = \"mine\""));

        let back: PresetStorage = toml::from_str(&text).unwrap();
        assert_eq!(back.presets[0].selection, selection);
        assert_eq!(back.presets[0].catalog, None);
    }

    #[test]
    fn test_replace_selection_keeps_created() {
        let mut preset = Preset::new("p".into(), String::new(), Selection::new());
        let created = preset.created;
        preset.replace_selection([("Region", "US")].into_iter().collect());

        assert_eq!(preset.created, created);
        assert!(preset.updated >= created);
        assert_eq!(preset.selection.len(), 1);
    }
}
