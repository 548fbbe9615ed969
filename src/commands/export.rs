//! Selection export command

use crate::QbError;
use crate::catalog::Catalog;
use crate::output::{ExportFormat, export_selection};
use crate::selection::{Selection, SelectionStore};

type Result<T> = std::result::Result<T, QbError>;

/// Validate `initial` against the catalog and render it in `format`
///
/// # Errors
///
/// Returns `QbError` if a pair is not in the catalog or serialization fails.
pub fn render(catalog: &Catalog, initial: &Selection, format: ExportFormat) -> Result<String> {
    let store = SelectionStore::with_initial(catalog, initial)?;
    export_selection(&store.get_all(), format)
}

/// Print the validated selection to stdout
///
/// # Errors
///
/// Returns `QbError` if a pair is not in the catalog or serialization fails.
pub fn execute(catalog: &Catalog, initial: &Selection, format: ExportFormat) -> Result<()> {
    println!("{}", render(catalog, initial, format)?);
    Ok(())
}
