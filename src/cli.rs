//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for qb using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive query builder (default)
//! - **show**: Print the attribute and summary views for a given state
//! - **export**: Print a selection as JSON or TOML
//! - **categories**: List catalog categories and their ids
//! - **preset**: Manage saved selections
//! - **config**: Manage configuration settings
//!
//! Selections are given on the command line as repeated
//! `-s CATEGORY=ATTRIBUTE` pairs and can be combined with a saved preset.

use crate::output::ExportFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "qb")]
#[command(about = "Build category/attribute queries", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Log selection and navigation changes to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Catalog file (TOML or JSON); overrides the configured default
    #[arg(short = 'c', long = "catalog", value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,
}

/// Selection given on the command line
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionArgs {
    /// Selected attribute (repeatable: -s Sector=Tech -s Region=EU)
    #[arg(short = 's', long = "select", value_name = "CATEGORY=ATTR", value_parser = parse_pair)]
    pub selections: Vec<(String, String)>,

    /// Start from a saved preset
    #[arg(short = 'p', long = "preset", value_name = "NAME")]
    pub preset: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Open the interactive query builder (default)
    #[command(visible_alias = "b")]
    Browse {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Keep the named preset in sync with every change
        #[arg(long = "save", value_name = "NAME")]
        save: Option<String>,
    },

    /// Print the attribute and summary views
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Category to open (defaults to the first one)
        #[arg(short = 'g', long = "category", value_name = "CATEGORY")]
        category: Option<String>,

        /// Search term applied to the open category
        #[arg(short = 't', long = "search", value_name = "TERM")]
        search: Option<String>,
    },

    /// Print a selection
    #[command(visible_alias = "e")]
    Export {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },

    /// List catalog categories
    #[command(visible_alias = "ls")]
    Categories,

    /// Manage saved selections
    Preset {
        #[command(subcommand)]
        command: PresetCommands,
    },

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Preset management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum PresetCommands {
    /// List saved presets
    List,

    /// Print a preset's selection
    Show {
        /// Preset name
        name: String,

        /// Output format
        #[arg(short = 'f', long = "format", value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,
    },

    /// Save a selection as a preset
    Save {
        /// Preset name (letters, digits, '-' and '_')
        name: String,

        /// Description
        #[arg(short = 'd', long = "description", default_value = "")]
        description: String,

        /// Selected attribute (repeatable)
        #[arg(short = 's', long = "select", value_name = "CATEGORY=ATTR", value_parser = parse_pair)]
        selections: Vec<(String, String)>,

        /// Replace an existing preset
        #[arg(long = "force")]
        force: bool,
    },

    /// Delete a preset
    #[command(visible_alias = "rm")]
    Delete {
        /// Preset name
        name: String,
    },

    /// Rename a preset
    #[command(visible_alias = "mv")]
    Rename {
        /// Current name
        old_name: String,
        /// New name
        new_name: String,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., quiet=true, catalog=/path/to/catalog.toml)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (quiet, catalog, presets_path)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Run the interactive setup
    Init,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            selection: SelectionArgs::default(),
            save: None,
        })
    }
}

/// Parse a `CATEGORY=ATTRIBUTE` pair
///
/// Splits on the first `=`, so attributes may themselves contain `=`.
///
/// # Errors
///
/// Returns a message if there is no `=` or either side is empty.
///
/// # Examples
///
/// ```
/// use qbuilder::cli::parse_pair;
///
/// assert_eq!(
///     parse_pair("Asset Class=Equity").unwrap(),
///     ("Asset Class".to_string(), "Equity".to_string())
/// );
/// assert!(parse_pair("Equity").is_err());
/// ```
pub fn parse_pair(value: &str) -> Result<(String, String), String> {
    let (category, attribute) = value
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=ATTR, got '{value}'"))?;

    if category.is_empty() || attribute.is_empty() {
        return Err(format!("expected CATEGORY=ATTR, got '{value}'"));
    }

    Ok((category.to_string(), attribute.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair_splits_on_first_equals() {
        assert_eq!(
            parse_pair("Formula=a=b").unwrap(),
            ("Formula".to_string(), "a=b".to_string())
        );
        assert!(parse_pair("=Tech").is_err());
        assert!(parse_pair("Sector=").is_err());
    }

    #[test]
    fn test_default_command_is_browse() {
        let cli = Cli::try_parse_from(["qb"]).unwrap();
        assert!(matches!(cli.get_command(), Commands::Browse { save: None, .. }));
    }

    #[test]
    fn test_show_with_selections() {
        let cli = Cli::try_parse_from([
            "qb", "-c", "cat.toml", "show", "-s", "Sector=Tech", "-s", "Region=EU", "--search", "fin",
        ])
        .unwrap();

        assert_eq!(cli.catalog, Some(PathBuf::from("cat.toml")));
        match cli.get_command() {
            Commands::Show {
                selection, search, ..
            } => {
                assert_eq!(selection.selections.len(), 2);
                assert_eq!(selection.selections[1].0, "Region");
                assert_eq!(search.as_deref(), Some("fin"));
            }
            other => panic!("Expected Show, got {other:?}"),
        }
    }

    #[test]
    fn test_export_format_flag() {
        let cli = Cli::try_parse_from(["qb", "export", "--format", "toml"]).unwrap();
        assert!(matches!(
            cli.get_command(),
            Commands::Export {
                format: ExportFormat::Toml,
                ..
            }
        ));
    }

    #[test]
    fn test_bad_pair_rejected_by_clap() {
        assert!(Cli::try_parse_from(["qb", "export", "-s", "nope"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["qb", "categories", "-q", "-v"]).unwrap();
        assert!(cli.quiet);
        assert!(cli.verbose);
    }
}
