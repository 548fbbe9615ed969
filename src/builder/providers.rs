//! Seams to the outside world
//!
//! The controller knows nothing about how categories are listed, how the
//! search box works, or how anything is drawn. It hands bindings to the two
//! provider traits and frames to a `RenderSink`; hosts feed user input back
//! through `QueryBuilder::set_search_term` and
//! `QueryBuilder::select_category_by_id`.

use crate::catalog::CategoryItem;
use crate::views::CategoryGroup;

/// Data handed to a search widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBinding {
    /// Placeholder text for the input
    pub placeholder: String,
    /// Attributes of the active category, for typeahead suggestions
    pub data: Vec<String>,
}

/// Data handed to a category list widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryListBinding {
    /// All categories in catalog order
    pub items: Vec<CategoryItem>,
    /// Id of the active category
    pub initial_selection: Option<String>,
}

/// A search widget
///
/// Implementations report typed terms back with `QueryBuilder::set_search_term`.
/// Debouncing raw keystrokes is the widget's business.
pub trait SearchProvider {
    /// Receive (or replace) the widget's data
    fn bind(&mut self, binding: SearchBinding);
}

/// A selectable category list
///
/// Implementations report clicks back with `QueryBuilder::select_category_by_id`.
pub trait CategoryListProvider {
    /// Receive (or replace) the list items
    fn bind(&mut self, binding: CategoryListBinding);
}

/// Attribute column contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserFrame {
    /// Heading: the active category
    pub title: String,
    /// Current search term, as typed
    pub search_term: String,
    /// Selectable attributes in catalog order
    pub attributes: Vec<String>,
    /// Text to show instead of an empty list
    pub placeholder: String,
}

impl BrowserFrame {
    /// True when the "no results" placeholder should be drawn
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Summary column contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryFrame {
    /// Heading of the summary
    pub title: String,
    /// Selected attributes grouped by category
    pub groups: Vec<CategoryGroup>,
    /// Text to show when nothing is selected
    pub placeholder: String,
}

impl SummaryFrame {
    /// True when the "no filters" placeholder should be drawn
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Receives fresh view contents after every change
///
/// Both methods are called synchronously from inside the controller call that
/// caused the change.
pub trait RenderSink {
    /// Redraw the attribute column
    fn render_attributes(&mut self, frame: &BrowserFrame);

    /// Redraw the summary column
    fn render_summary(&mut self, frame: &SummaryFrame);
}
