//! Category browser projection
//!
//! Computes which attributes of the active category can still be picked:
//! catalog order, minus what is already selected, narrowed by the search
//! term. Pure and cheap; callers recompute it on every render.

use crate::catalog::Catalog;
use crate::selection::SelectionStore;
use serde::{Deserialize, Serialize};

/// Transient browse state: which category is open and what is typed in search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseContext {
    /// Category whose attributes are listed
    pub active_category: String,
    /// Free-text filter; empty means no filtering
    pub search_term: String,
}

impl BrowseContext {
    /// Context for `category` with no search term
    #[must_use]
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            active_category: category.into(),
            search_term: String::new(),
        }
    }

    /// Whether a non-blank search term is active
    #[must_use]
    pub fn is_searching(&self) -> bool {
        !self.search_term.trim().is_empty()
    }
}

/// Attributes of the active category that can still be selected
///
/// # Arguments
/// * `catalog` - Source of the category's attributes
/// * `store` - Current selection; selected attributes are excluded
/// * `context` - Active category and search term
///
/// # Returns
/// Matching attributes in catalog order. Empty for an unknown category or
/// when nothing matches; neither case is an error.
#[must_use]
pub fn visible_attributes(
    catalog: &Catalog,
    store: &SelectionStore<'_>,
    context: &BrowseContext,
) -> Vec<String> {
    let Some(all) = catalog.attributes(&context.active_category) else {
        return Vec::new();
    };

    let selected = store.selection().get(&context.active_category);

    all.iter()
        .filter(|attr| selected.is_none_or(|set| !set.contains(attr.as_str())))
        .filter(|attr| matches_search(attr, &context.search_term))
        .cloned()
        .collect()
}

/// Case-insensitive substring match used by the browser
///
/// A blank term matches everything.
///
/// # Examples
///
/// ```
/// use qbuilder::views::matches_search;
///
/// assert!(matches_search("Finance", " fin "));
/// assert!(matches_search("Finance", ""));
/// assert!(!matches_search("Finance", "tech"));
/// ```
#[must_use]
pub fn matches_search(attribute: &str, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    needle.is_empty() || attribute.to_lowercase().contains(&needle)
}
