//! Read-only projections over a selection store
//!
//! - **browser**: the attributes of the active category that can still be
//!   picked, filtered by the search term
//! - **summary**: everything selected so far, grouped by category
//!
//! Neither view holds state of its own. The only mutations they lead to are
//! `select` (checking an attribute in the browser) and `deselect` (removing a
//! tag from the summary), both made through the store.

pub mod browser;
pub mod summary;

pub use browser::{BrowseContext, matches_search, visible_attributes};
pub use summary::{CategoryGroup, grouped_view};
