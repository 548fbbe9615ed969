//! Attribute catalogs
//!
//! A catalog is the static input of a query builder: an ordered mapping from
//! category names to the attributes that can be selected in each category.
//! Catalogs are validated once at construction and never change afterwards.
//!
//! # Examples
//!
//! ```
//! use qbuilder::catalog::Catalog;
//!
//! let catalog = Catalog::from_toml_str(r#"
//! Sector = ["Tech", "Finance"]
//! Region = ["US", "EU"]
//! "#).unwrap();
//!
//! assert_eq!(catalog.first_category(), Some("Sector"));
//! assert!(catalog.contains("Region", "EU"));
//! ```

pub mod error;
pub mod types;

pub use error::CatalogError;
pub use types::{Catalog, CategoryItem, category_id};
