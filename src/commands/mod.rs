//! Command implementations for the qb binary
//!
//! Each submodule handles one CLI command. The helpers here resolve the
//! inputs every command shares: which catalog to open and which selection to
//! start from.

pub mod browse;
pub mod export;
pub mod preset;
pub mod settings;
pub mod show;

use crate::QbError;
use crate::catalog::Catalog;
use crate::cli::SelectionArgs;
use crate::config::AppConfig;
use crate::presets::PresetManager;
use crate::selection::Selection;
use log::debug;
use std::path::{Path, PathBuf};

type Result<T> = std::result::Result<T, QbError>;

/// Open the catalog named on the command line or in the configuration
///
/// # Errors
///
/// Returns `QbError` if no catalog is configured or the file cannot be loaded.
pub fn load_catalog(override_path: Option<&Path>, config: &AppConfig) -> Result<(Catalog, PathBuf)> {
    let path = config.catalog_path(override_path).ok_or_else(|| {
        QbError::InvalidInput(
            "No catalog given. Use --catalog <FILE> or 'qb config set catalog=<FILE>'.".into(),
        )
    })?;

    let catalog = Catalog::from_path(&path)?;
    debug!("loaded catalog {} with {} categories", path.display(), catalog.len());
    Ok((catalog, path))
}

/// Like `load_catalog`, but `None` when no catalog is configured at all
///
/// # Errors
///
/// Returns `QbError` if a catalog is configured but cannot be loaded.
pub fn try_load_catalog(
    override_path: Option<&Path>,
    config: &AppConfig,
) -> Result<Option<(Catalog, PathBuf)>> {
    if config.catalog_path(override_path).is_none() {
        return Ok(None);
    }
    load_catalog(override_path, config).map(Some)
}

/// Starting selection: the preset's (if any) followed by explicit pairs
///
/// The result is not checked against a catalog here; seeding a store does that.
///
/// # Errors
///
/// Returns `QbError` if the named preset cannot be loaded.
pub fn resolve_selection(args: &SelectionArgs, presets: &PresetManager) -> Result<Selection> {
    let mut selection = match &args.preset {
        Some(name) => presets.get(name)?.selection,
        None => Selection::new(),
    };

    for (category, attribute) in &args.selections {
        selection.insert(category, attribute);
    }

    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_catalog_requires_a_path() {
        let result = load_catalog(None, &AppConfig::default());
        assert!(matches!(result, Err(QbError::InvalidInput(_))));
        assert!(try_load_catalog(None, &AppConfig::default()).unwrap().is_none());
    }

    #[test]
    fn test_load_catalog_from_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, r#"{"Region": ["US", "EU"]}"#).unwrap();

        let (catalog, used) = load_catalog(Some(&path), &AppConfig::default()).unwrap();
        assert_eq!(used, path);
        assert!(catalog.contains("Region", "EU"));
    }

    #[test]
    fn test_resolve_selection_merges_preset_and_pairs() {
        let dir = tempfile::tempdir().unwrap();
        let presets = PresetManager::new(dir.path().join("presets.toml"));
        let saved: Selection = [("Region", "EU")].into_iter().collect();
        presets.save("eu", "", &saved, None, false).unwrap();

        let args = SelectionArgs {
            selections: vec![
                ("Sector".to_string(), "Tech".to_string()),
                ("Region".to_string(), "EU".to_string()),
            ],
            preset: Some("eu".to_string()),
        };

        let selection = resolve_selection(&args, &presets).unwrap();
        assert_eq!(selection.len(), 2);
        assert_eq!(selection.categories().collect::<Vec<_>>(), vec!["Region", "Sector"]);
    }

    #[test]
    fn test_resolve_selection_missing_preset() {
        let dir = tempfile::tempdir().unwrap();
        let presets = PresetManager::new(dir.path().join("presets.toml"));
        let args = SelectionArgs {
            selections: Vec::new(),
            preset: Some("nope".to_string()),
        };

        assert!(matches!(
            resolve_selection(&args, &presets),
            Err(QbError::Preset(_))
        ));
    }
}
