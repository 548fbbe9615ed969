//! qbuilder - category/attribute query builder
//!
//! This library keeps a query selection (attributes picked per category from
//! a fixed catalog) consistent while a user browses, searches and removes
//! picks. Rendering is left to pluggable sinks; the `qb` binary ships a
//! terminal front end.

use thiserror::Error;

pub mod builder;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod presets;
pub mod selection;
pub mod views;

#[cfg(test)]
pub mod testing;

pub use builder::{QueryBuilder, QueryBuilderBuilder};
pub use catalog::Catalog;
pub use selection::{Selection, SelectionStore};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum QbError {
    /// Catalog could not be built or loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Selection change rejected
    #[error("Selection error: {0}")]
    Selection(#[from] selection::SelectionError),
    /// Controller call rejected
    #[error("Builder error: {0}")]
    Builder(#[from] builder::BuilderError),
    /// Preset storage error
    #[error("Preset error: {0}")]
    Preset(#[from] presets::PresetError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Interactive prompt failed
    #[error("Prompt error: {0}")]
    Prompt(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<dialoguer::Error> for QbError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}
