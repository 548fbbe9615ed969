//! Query builder controller
//!
//! Ties a catalog, a selection store and the two views together:
//!
//! ```text
//!  CategoryListProvider ──select_category_by_id──┐
//!  SearchProvider ────────set_search_term────────┤
//!                                                ▼
//!                                         QueryBuilder ──frames──► RenderSink
//!                                                │
//!                            select / deselect   ▼
//!                                         SelectionStore ──► on_change listeners
//! ```
//!
//! Category switches and search changes only touch the browse context and
//! redraw the attribute column. Selection changes go through the store,
//! notify its listeners, then redraw both columns.

pub mod controller;
pub mod error;
pub mod options;
pub mod providers;

pub use controller::{QueryBuilder, QueryBuilderBuilder};
pub use error::BuilderError;
pub use options::Labels;
pub use providers::{
    BrowserFrame, CategoryListBinding, CategoryListProvider, RenderSink, SearchBinding,
    SearchProvider, SummaryFrame,
};
