//! Preset command - manage saved selections

use crate::QbError;
use crate::catalog::Catalog;
use crate::cli::PresetCommands;
use crate::output::export_selection;
use crate::presets::PresetManager;
use crate::selection::{Selection, SelectionStore};
use colored::Colorize;
use log::warn;
use std::path::Path;

type Result<T> = std::result::Result<T, QbError>;

/// Execute a preset subcommand
///
/// `catalog` is used to validate selections before saving; without one they
/// are stored unchecked.
///
/// # Errors
///
/// Returns `QbError` if the preset operation fails or a selection does not
/// match the catalog.
pub fn execute(
    manager: &PresetManager,
    command: &PresetCommands,
    catalog: Option<(&Catalog, &Path)>,
    quiet: bool,
) -> Result<()> {
    match command {
        PresetCommands::List => {
            let presets = manager.list()?;
            if presets.is_empty() {
                if !quiet {
                    println!("No presets saved.");
                }
                return Ok(());
            }

            for preset in presets {
                if quiet {
                    println!("{}", preset.name);
                } else if preset.description.is_empty() {
                    println!("{} ({} attribute(s))", preset.name.bold(), preset.selection.len());
                } else {
                    println!(
                        "{} ({} attribute(s)) - {}",
                        preset.name.bold(),
                        preset.selection.len(),
                        preset.description.dimmed()
                    );
                }
            }
        }
        PresetCommands::Show { name, format } => {
            let preset = manager.get(name)?;
            println!("{}", export_selection(&preset.selection, *format)?);
        }
        PresetCommands::Save {
            name,
            description,
            selections,
            force,
        } => {
            let selection: Selection = selections
                .iter()
                .map(|(category, attribute)| (category.as_str(), attribute.as_str()))
                .collect();

            let catalog_path = match catalog {
                Some((catalog, path)) => {
                    let _ = SelectionStore::with_initial(catalog, &selection)?;
                    Some(path)
                }
                None => {
                    warn!("no catalog configured; saving preset '{name}' without validation");
                    None
                }
            };

            let preset = manager.save(name, description, &selection, catalog_path, *force)?;
            if !quiet {
                println!(
                    "Saved preset '{}' with {} attribute(s)",
                    preset.name,
                    preset.selection.len()
                );
            }
        }
        PresetCommands::Delete { name } => {
            manager.delete(name)?;
            if !quiet {
                println!("Deleted preset '{name}'");
            }
        }
        PresetCommands::Rename { old_name, new_name } => {
            manager.rename(old_name, new_name)?;
            if !quiet {
                println!("Renamed preset '{old_name}' to '{new_name}'");
            }
        }
    }

    Ok(())
}
