//! Selection-specific error types
//!
//! The only way to corrupt a selection is to feed it a (category, attribute)
//! pair the catalog does not know about. That is always an integration bug
//! upstream of the store, so it is reported immediately and never retried.

use thiserror::Error;

/// Selection errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The pair is not part of the catalog
    #[error("Attribute '{attribute}' is not in category '{category}'")]
    InvalidAttribute { category: String, attribute: String },
}

impl SelectionError {
    pub(crate) fn invalid(category: &str, attribute: &str) -> Self {
        Self::InvalidAttribute {
            category: category.to_string(),
            attribute: attribute.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
