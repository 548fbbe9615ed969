//! Preset CRUD operations
//!
//! This module provides a `PresetManager` for saving and recalling named
//! selections.

use super::error::PresetError;
use super::types::{Preset, PresetStorage, validate_preset_name};
use crate::selection::Selection;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Manager for preset operations
///
/// Encapsulates the storage path; every operation loads the file, applies
/// the change and writes it back.
///
/// # Examples
///
/// ```no_run
/// use qbuilder::presets::PresetManager;
/// use std::path::PathBuf;
///
/// let manager = PresetManager::new(PathBuf::from("presets.toml"));
/// for preset in manager.list().unwrap() {
///     println!("{}: {} attribute(s)", preset.name, preset.selection.len());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PresetManager {
    path: PathBuf,
}

impl PresetManager {
    /// Create a new `PresetManager` with the specified storage path
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Storage file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load presets from the storage file
    ///
    /// Returns an empty `PresetStorage` if the file doesn't exist.
    fn load(&self) -> Result<PresetStorage, PresetError> {
        if !self.path.exists() {
            return Ok(PresetStorage::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let storage: PresetStorage = toml::from_str(&contents)?;
        Ok(storage)
    }

    /// Save presets to the storage file, creating the parent directory if needed
    fn store(&self, storage: &PresetStorage) -> Result<(), PresetError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(storage)?;
        fs::write(&self.path, toml)?;
        debug!("wrote {} preset(s) to {}", storage.presets.len(), self.path.display());

        Ok(())
    }

    /// Save a selection under `name`
    ///
    /// With `overwrite`, an existing preset keeps its creation time and
    /// description (unless a new non-empty one is given) and gets the new
    /// selection.
    ///
    /// # Errors
    ///
    /// Returns `PresetError` if:
    /// - The name is invalid
    /// - A preset with the same name exists and `overwrite` is false
    /// - The storage file cannot be read or written
    pub fn save(
        &self,
        name: &str,
        description: &str,
        selection: &Selection,
        catalog: Option<&Path>,
        overwrite: bool,
    ) -> Result<Preset, PresetError> {
        validate_preset_name(name).map_err(|e| PresetError::InvalidName(name.to_string(), e))?;

        let mut storage = self.load()?;

        let preset = if let Some(existing) = storage.get_mut(name) {
            if !overwrite {
                return Err(PresetError::AlreadyExists(name.to_string()));
            }
            existing.replace_selection(selection.clone());
            if !description.is_empty() {
                existing.description = description.to_string();
            }
            if let Some(path) = catalog {
                existing.catalog = Some(path.to_path_buf());
            }
            existing.clone()
        } else {
            let mut preset = Preset::new(name.to_string(), description.to_string(), selection.clone());
            if let Some(path) = catalog {
                preset = preset.with_catalog(path.to_path_buf());
            }
            storage.presets.push(preset.clone());
            preset
        };

        self.store(&storage)?;
        Ok(preset)
    }

    /// Get a preset by name
    ///
    /// # Errors
    ///
    /// Returns `PresetError` if the storage file cannot be loaded or the
    /// preset is not found.
    pub fn get(&self, name: &str) -> Result<Preset, PresetError> {
        let storage = self.load()?;
        storage
            .get(name)
            .cloned()
            .ok_or_else(|| PresetError::NotFound(name.to_string()))
    }

    /// Delete a preset by name
    ///
    /// # Errors
    ///
    /// Returns `PresetError` if the preset is not found or the storage file
    /// cannot be saved.
    pub fn delete(&self, name: &str) -> Result<Preset, PresetError> {
        let mut storage = self.load()?;

        let preset = storage
            .remove(name)
            .ok_or_else(|| PresetError::NotFound(name.to_string()))?;

        self.store(&storage)?;

        Ok(preset)
    }

    /// Rename a preset
    ///
    /// # Errors
    ///
    /// Returns `PresetError` if:
    /// - The old preset is not found
    /// - The new name is invalid
    /// - A preset with the new name already exists
    /// - The storage file cannot be saved
    pub fn rename(&self, old_name: &str, new_name: &str) -> Result<(), PresetError> {
        let mut storage = self.load()?;

        validate_preset_name(new_name)
            .map_err(|e| PresetError::InvalidName(new_name.to_string(), e))?;

        if storage.contains(new_name) {
            return Err(PresetError::AlreadyExists(new_name.to_string()));
        }

        let preset = storage
            .get_mut(old_name)
            .ok_or_else(|| PresetError::NotFound(old_name.to_string()))?;
        preset.name = new_name.to_string();

        self.store(&storage)
    }

    /// List all presets
    ///
    /// # Errors
    ///
    /// Returns `PresetError` if the storage file cannot be loaded.
    pub fn list(&self) -> Result<Vec<Preset>, PresetError> {
        let storage = self.load()?;
        Ok(storage.presets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager() -> (TempDir, PresetManager) {
        let dir = tempfile::tempdir().unwrap();
        let manager = PresetManager::new(dir.path().join("nested").join("presets.toml"));
        (dir, manager)
    }

    fn selection() -> Selection {
        [("Sector", "Tech"), ("Region", "EU")].into_iter().collect()
    }

    #[test]
    fn test_list_without_file() {
        let (_dir, manager) = manager();
        assert!(manager.list().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_get() {
        let (_dir, manager) = manager();
        manager
            .save("tech-eu", "Tech in Europe", &selection(), Some(Path::new("catalog.toml")), false)
            .unwrap();

        let preset = manager.get("tech-eu").unwrap();
        assert_eq!(preset.description, "Tech in Europe");
        assert_eq!(preset.selection, selection());
        assert_eq!(preset.catalog, Some(PathBuf::from("catalog.toml")));
        assert!(manager.path().exists());
    }

    #[test]
    fn test_save_existing_requires_overwrite() {
        let (_dir, manager) = manager();
        manager.save("p", "first", &selection(), None, false).unwrap();

        let result = manager.save("p", "", &Selection::new(), None, false);
        assert!(matches!(result, Err(PresetError::AlreadyExists(_))));

        let replaced = manager.save("p", "", &Selection::new(), None, true).unwrap();
        assert!(replaced.selection.is_empty());
        assert_eq!(replaced.description, "first");
        assert_eq!(manager.list().unwrap().len(), 1);
    }

    #[test]
    fn test_save_rejects_bad_name() {
        let (_dir, manager) = manager();
        let result = manager.save("bad name", "", &selection(), None, false);
        assert!(matches!(result, Err(PresetError::InvalidName(_, _))));
    }

    #[test]
    fn test_delete() {
        let (_dir, manager) = manager();
        manager.save("p", "", &selection(), None, false).unwrap();

        assert_eq!(manager.delete("p").unwrap().name, "p");
        assert!(matches!(manager.delete("p"), Err(PresetError::NotFound(_))));
    }

    #[test]
    fn test_rename() {
        let (_dir, manager) = manager();
        manager.save("a", "", &selection(), None, false).unwrap();
        manager.save("b", "", &selection(), None, false).unwrap();

        assert!(matches!(manager.rename("a", "b"), Err(PresetError::AlreadyExists(_))));
        assert!(matches!(manager.rename("zz", "c"), Err(PresetError::NotFound(_))));

        manager.rename("a", "c").unwrap();
        assert!(manager.get("c").is_ok());
        assert!(manager.get("a").is_err());
    }

    #[test]
    fn test_corrupt_file_reports_serialization_error() {
        let (_dir, manager) = manager();
        fs::create_dir_all(manager.path().parent().unwrap()).unwrap();
        fs::write(manager.path(), "[[preset]]\nname = 3\n").unwrap();

        assert!(matches!(manager.list(), Err(PresetError::Serialization(_))));
    }
}
