//! Display labels for a query builder

use serde::{Deserialize, Serialize};

/// Texts shown by render sinks and providers
///
/// Every field falls back to its default when missing from a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Heading of the attribute column before a category is opened
    pub title: String,
    /// Heading of the summary column
    pub summary_title: String,
    /// Placeholder of the search input
    pub search_placeholder: String,
    /// Shown when nothing is selected
    pub no_filters_text: String,
    /// Shown when no attribute matches the search
    pub no_results_text: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: "Manage Attributes".to_string(),
            summary_title: "Summary".to_string(),
            search_placeholder: "Search...".to_string(),
            no_filters_text: "No filters selected".to_string(),
            no_results_text: "No filters found".to_string(),
        }
    }
}
