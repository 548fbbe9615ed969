//! Selection state
//!
//! Holds what the user has picked, grouped by category:
//! - `Selection`: the category → attribute-set value
//! - `SelectionStore`: the sole owner and mutator of a builder's selection,
//!   with synchronous change subscriptions
//!
//! # Examples
//!
//! ```
//! use qbuilder::catalog::Catalog;
//! use qbuilder::selection::SelectionStore;
//!
//! let catalog = Catalog::from_toml_str(r#"Sector = ["Tech", "Finance"]"#).unwrap();
//! let mut store = SelectionStore::new(&catalog);
//!
//! store.select("Sector", "Tech").unwrap();
//! assert!(store.is_selected("Sector", "Tech"));
//!
//! store.deselect("Sector", "Tech");
//! assert!(store.get_all().is_empty());
//! ```

pub mod error;
pub mod store;
pub mod types;

pub use error::SelectionError;
pub use store::{Listener, SelectionStore, SubscriptionId};
pub use types::Selection;
