//! Non-interactive view rendering
//!
//! `qb show` builds a query builder from command-line state and prints both
//! columns once; `qb categories` prints the category list.

use crate::QbError;
use crate::builder::{Labels, QueryBuilder};
use crate::catalog::Catalog;
use crate::output::{TerminalRenderer, format_category};
use crate::selection::Selection;

type Result<T> = std::result::Result<T, QbError>;

/// Print the attribute and summary views for the given state
///
/// `category` may be a category name or its list id.
///
/// # Errors
///
/// Returns `QbError` if the selection or category does not match the catalog.
pub fn execute(
    catalog: &Catalog,
    initial: Selection,
    category: Option<&str>,
    search: Option<&str>,
    labels: &Labels,
    quiet: bool,
) -> Result<()> {
    let mut builder = QueryBuilder::builder()
        .catalog(catalog)
        .initial(initial)
        .labels(labels.clone())
        .build()?;

    if let Some(category) = category {
        if catalog.has_category(category) {
            builder.select_category(category)?;
        } else {
            builder.select_category_by_id(category)?;
        }
    }

    if let Some(term) = search {
        builder.set_search_term(term);
    }

    builder.set_sink(Box::new(TerminalRenderer::new(quiet)));
    Ok(())
}

/// Print every category, marking the first (default) one
pub fn list_categories(catalog: &Catalog, quiet: bool) {
    let default = catalog.first_category();
    for item in catalog.category_items() {
        let active = default == Some(item.label.as_str());
        println!("{}", format_category(&item, active, quiet));
    }
}
