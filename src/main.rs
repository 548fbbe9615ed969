//! qb CLI application entry point
//!
//! Command-line front end for the qbuilder query builder. A catalog file lists
//! the categories and the attributes each one offers; qb lets you pick
//! attributes interactively, print the current views, and keep named presets.
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! qb -c catalog.toml
//! qb -c catalog.toml browse -p my-preset --save my-preset
//!
//! # Print both views for a given state
//! qb show -s Sector=Tech -s Region=EU --category region --search e
//!
//! # Print a validated selection
//! qb export -s "Asset Class=Equity" --format toml
//!
//! # Manage presets
//! qb preset save tech -s Sector=Tech
//! qb preset list
//!
//! # Configure a default catalog
//! qb config set catalog=/path/to/catalog.toml
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/qbuilder/config.toml` on Linux) and created on first run.
//! `RUST_LOG` overrides the log level chosen by `--verbose`.

use qbuilder::{
    QbError,
    cli::{Cli, Commands},
    commands::{self, browse::BrowseOptions},
    config::AppConfig,
    presets::PresetManager,
};

type Result<T> = std::result::Result<T, QbError>;

/// Route `log` output to stderr; warnings only unless `verbose`
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn preset_manager(config: &AppConfig) -> Result<PresetManager> {
    Ok(PresetManager::new(config.preset_path()?))
}

/// Main entry point for the qb application
///
/// Loads configuration, parses command-line arguments, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `QbError` if configuration loading fails, the catalog cannot be
/// opened, or any command handler returns an error.
fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    let config = AppConfig::load()?;
    let quiet = cli.quiet || config.quiet;
    let command = cli.get_command();

    match &command {
        Commands::Browse { selection, save } => {
            let (catalog, catalog_path) = commands::load_catalog(cli.catalog.as_deref(), &config)?;
            let presets = preset_manager(&config)?;
            let initial = commands::resolve_selection(selection, &presets)?;
            let options = BrowseOptions {
                save: save.as_deref(),
                catalog_path: &catalog_path,
                labels: config.labels.clone(),
                quiet,
            };
            commands::browse::execute(&catalog, initial, &presets, &options)?;
        }
        Commands::Show {
            selection,
            category,
            search,
        } => {
            let (catalog, _) = commands::load_catalog(cli.catalog.as_deref(), &config)?;
            let presets = preset_manager(&config)?;
            let initial = commands::resolve_selection(selection, &presets)?;
            commands::show::execute(
                &catalog,
                initial,
                category.as_deref(),
                search.as_deref(),
                &config.labels,
                quiet,
            )?;
        }
        Commands::Export { selection, format } => {
            let (catalog, _) = commands::load_catalog(cli.catalog.as_deref(), &config)?;
            let presets = preset_manager(&config)?;
            let initial = commands::resolve_selection(selection, &presets)?;
            commands::export::execute(&catalog, &initial, *format)?;
        }
        Commands::Categories => {
            let (catalog, _) = commands::load_catalog(cli.catalog.as_deref(), &config)?;
            commands::show::list_categories(&catalog, quiet);
        }
        Commands::Preset { command } => {
            let presets = preset_manager(&config)?;
            let loaded = commands::try_load_catalog(cli.catalog.as_deref(), &config)?;
            let catalog = loaded
                .as_ref()
                .map(|(catalog, path)| (catalog, path.as_path()));
            commands::preset::execute(&presets, command, catalog, quiet)?;
        }
        Commands::Config { command } => {
            commands::settings::execute(config, command, quiet)?;
        }
    }

    Ok(())
}
