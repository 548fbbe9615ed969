//! Error types for catalog construction and loading

use std::io;
use thiserror::Error;

/// Errors that can occur while building or loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog has no categories
    #[error("Catalog must contain at least one category")]
    Empty,

    /// An attribute appears twice in the same category
    #[error("Attribute '{attribute}' appears more than once in category '{category}'")]
    DuplicateAttribute { category: String, attribute: String },

    /// Two category names map to the same list id
    #[error("Categories '{first}' and '{second}' share the id '{id}'")]
    DuplicateCategoryId {
        id: String,
        first: String,
        second: String,
    },

    /// I/O error while reading a catalog file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Catalog file could not be parsed
    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
