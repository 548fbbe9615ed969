//! Error types for the query builder controller

use crate::selection::SelectionError;
use thiserror::Error;

/// Controller errors
///
/// Both validation variants mean the caller passed data that does not match
/// the catalog. The call that produced them changed nothing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// Category name or list id not present in the catalog
    #[error("Unknown category '{0}'")]
    UnknownCategory(String),

    /// Rejected selection change
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// `QueryBuilderBuilder::build` called without a catalog
    #[error("A catalog is required to build a query builder")]
    MissingCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_display() {
        let error = BuilderError::UnknownCategory("Planet".to_string());
        assert_eq!(error.to_string(), "Unknown category 'Planet'");
    }

    #[test]
    fn test_selection_error_is_transparent() {
        let error: BuilderError = SelectionError::InvalidAttribute {
            category: "Region".to_string(),
            attribute: "Asia".to_string(),
        }
        .into();

        assert_eq!(
            error.to_string(),
            "Attribute 'Asia' is not in category 'Region'"
        );
        assert!(matches!(error, BuilderError::Selection(_)));
    }

    #[test]
    fn test_missing_catalog_display() {
        assert!(BuilderError::MissingCatalog.to_string().contains("catalog"));
    }
}
