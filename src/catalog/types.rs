//! Catalog data structures
//!
//! - `Catalog`: ordered category → attribute lists, validated once
//! - `CategoryItem`: the `{id, label}` record handed to category list widgets

use super::error::CatalogError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Static category → attribute mapping
///
/// Order is significant: categories keep the order they were supplied in (the
/// first one is the default active category) and attributes keep their
/// catalog order in every browse projection.
///
/// A catalog is immutable once built, so any number of builders can borrow
/// the same instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: IndexMap<String, Vec<String>>,
}

impl Catalog {
    /// Build a catalog, validating category and attribute uniqueness
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if:
    /// - The map has no categories
    /// - An attribute is listed twice within one category
    /// - Two category names produce the same slug id
    pub fn new(categories: IndexMap<String, Vec<String>>) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut ids: HashMap<String, &str> = HashMap::new();
        for (category, attributes) in &categories {
            let id = category_id(category);
            if let Some(first) = ids.insert(id.clone(), category) {
                return Err(CatalogError::DuplicateCategoryId {
                    id,
                    first: first.to_string(),
                    second: category.clone(),
                });
            }

            for (index, attribute) in attributes.iter().enumerate() {
                if attributes[..index].contains(attribute) {
                    return Err(CatalogError::DuplicateAttribute {
                        category: category.clone(),
                        attribute: attribute.clone(),
                    });
                }
            }
        }

        Ok(Self { categories })
    }

    /// Load a catalog from a TOML or JSON file
    ///
    /// Files ending in `.toml` are parsed as TOML, anything else as JSON.
    /// Both formats are a single table mapping category names to arrays of
    /// attribute names.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed, or if the
    /// parsed catalog fails validation.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Self::from_toml_str(&contents)
        } else {
            Self::from_json_str(&contents)
        }
    }

    /// Parse a catalog from TOML text
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed input or any validation error.
    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let categories: IndexMap<String, Vec<String>> = toml::from_str(contents)?;
        Self::new(categories)
    }

    /// Parse a catalog from JSON text
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed input or any validation error.
    pub fn from_json_str(contents: &str) -> Result<Self, CatalogError> {
        let categories: IndexMap<String, Vec<String>> = serde_json::from_str(contents)?;
        Self::new(categories)
    }

    /// Category names in catalog order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Attributes of a category, or `None` if the category is unknown
    #[must_use]
    pub fn attributes(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Whether the catalog has a category with this exact name
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Whether `attribute` is listed under `category`
    #[must_use]
    pub fn contains(&self, category: &str, attribute: &str) -> bool {
        self.categories
            .get(category)
            .is_some_and(|attrs| attrs.iter().any(|a| a == attribute))
    }

    /// The first category, used as the default active category
    #[must_use]
    pub fn first_category(&self) -> Option<&str> {
        self.categories.keys().next().map(String::as_str)
    }

    /// Number of categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Always false for a validated catalog
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories as list items, in catalog order
    #[must_use]
    pub fn category_items(&self) -> Vec<CategoryItem> {
        self.categories
            .keys()
            .map(|name| CategoryItem::new(name))
            .collect()
    }

    /// Resolve a category list id back to its category name
    #[must_use]
    pub fn category_for_id(&self, id: &str) -> Option<&str> {
        self.categories
            .keys()
            .find(|name| category_id(name) == id)
            .map(String::as_str)
    }

    /// Every attribute of every category, flattened in catalog order
    #[must_use]
    pub fn all_attributes(&self) -> Vec<&str> {
        self.categories
            .values()
            .flat_map(|attrs| attrs.iter().map(String::as_str))
            .collect()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let categories = IndexMap::<String, Vec<String>>::deserialize(deserializer)?;
        Self::new(categories).map_err(serde::de::Error::custom)
    }
}

/// A category as presented by a list widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryItem {
    /// Stable list id (slug of the label)
    pub id: String,
    /// Category name as it appears in the catalog
    pub label: String,
}

impl CategoryItem {
    /// Create an item for a category name
    #[must_use]
    pub fn new(label: &str) -> Self {
        Self {
            id: category_id(label),
            label: label.to_string(),
        }
    }
}

/// List id for a category name
///
/// Lowercases the name and replaces every run of whitespace with a single `-`.
///
/// # Examples
///
/// ```
/// use qbuilder::catalog::category_id;
///
/// assert_eq!(category_id("Asset Class"), "asset-class");
/// assert_eq!(category_id("Region"), "region");
/// ```
#[must_use]
pub fn category_id(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut id = String::with_capacity(lower.len());
    let mut in_space = false;

    for ch in lower.chars() {
        if ch.is_whitespace() {
            if !in_space {
                id.push('-');
            }
            in_space = true;
        } else {
            id.push(ch);
            in_space = false;
        }
    }

    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample() -> Catalog {
        let mut map = IndexMap::new();
        map.insert(
            "Sector".to_string(),
            vec!["Tech".to_string(), "Finance".to_string()],
        );
        map.insert(
            "Asset Class".to_string(),
            vec!["Equity".to_string(), "Credit".to_string()],
        );
        Catalog::new(map).unwrap()
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = sample();
        let names: Vec<&str> = catalog.categories().collect();
        assert_eq!(names, vec!["Sector", "Asset Class"]);
        assert_eq!(catalog.first_category(), Some("Sector"));
        assert_eq!(
            catalog.all_attributes(),
            vec!["Tech", "Finance", "Equity", "Credit"]
        );
    }

    #[test]
    fn test_catalog_contains() {
        let catalog = sample();
        assert!(catalog.contains("Sector", "Tech"));
        assert!(!catalog.contains("Sector", "Equity"));
        assert!(!catalog.contains("Region", "US"));
        assert!(catalog.attributes("Region").is_none());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = Catalog::new(IndexMap::new());
        assert!(matches!(result, Err(CatalogError::Empty)));
    }

    #[test]
    fn test_duplicate_attribute_rejected() {
        let mut map = IndexMap::new();
        map.insert(
            "Region".to_string(),
            vec!["US".to_string(), "EU".to_string(), "US".to_string()],
        );

        match Catalog::new(map) {
            Err(CatalogError::DuplicateAttribute { category, attribute }) => {
                assert_eq!(category, "Region");
                assert_eq!(attribute, "US");
            }
            other => panic!("Expected DuplicateAttribute, got {other:?}"),
        }
    }

    #[test]
    fn test_colliding_ids_rejected() {
        let mut map = IndexMap::new();
        map.insert("Asset Class".to_string(), vec![]);
        map.insert("asset  class".to_string(), vec![]);

        assert!(matches!(
            Catalog::new(map),
            Err(CatalogError::DuplicateCategoryId { .. })
        ));
    }

    #[test]
    fn test_category_id_slug() {
        assert_eq!(category_id("Asset Class"), "asset-class");
        assert_eq!(category_id("  Two   Spaces "), "-two-spaces-");
        assert_eq!(category_id("Sector"), "sector");
    }

    #[test]
    fn test_category_items_and_lookup() {
        let catalog = sample();
        let items = catalog.category_items();
        assert_eq!(items[1].id, "asset-class");
        assert_eq!(items[1].label, "Asset Class");
        assert_eq!(catalog.category_for_id("asset-class"), Some("Asset Class"));
        assert_eq!(catalog.category_for_id("unknown"), None);
    }

    #[test]
    fn test_from_toml_keeps_document_order() {
        let catalog = Catalog::from_toml_str(
            r#"
Zeta = ["b", "a"]
Alpha = ["x"]
"#,
        )
        .unwrap();

        let names: Vec<&str> = catalog.categories().collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
        assert_eq!(catalog.attributes("Zeta").unwrap(), ["b", "a"]);
    }

    #[test]
    fn test_from_json_parse_error() {
        let result = Catalog::from_json_str("{\"Sector\": 3}");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_from_path_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("catalog.toml");
        let mut file = fs::File::create(&toml_path).unwrap();
        writeln!(file, "Region = [\"US\", \"EU\"]").unwrap();

        let json_path = dir.path().join("catalog.json");
        fs::write(&json_path, r#"{"Region": ["US", "EU"]}"#).unwrap();

        let from_toml = Catalog::from_path(&toml_path).unwrap();
        let from_json = Catalog::from_path(&json_path).unwrap();
        assert_eq!(from_toml, from_json);
    }

    #[test]
    fn test_deserialize_validates() {
        let result: Result<Catalog, _> = serde_json::from_str(r#"{"A": ["x", "x"]}"#);
        assert!(result.is_err());
    }
}
