//! The `Selection` value type
//!
//! A selection maps category names to the attributes chosen in them. Both
//! levels keep insertion order: categories appear in the order they first
//! received an attribute, attributes in the order they were selected.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Category → selected attributes
///
/// Owned by a `SelectionStore`, which guarantees that every pair is in the
/// catalog and that no category is ever left with an empty set. A `Selection`
/// obtained from the store is an independent copy; changing it has no effect
/// on the store.
///
/// Selections built directly (deserialized from a preset, assembled from CLI
/// arguments) are plain data and carry no catalog guarantee until they are
/// used to seed a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    categories: IndexMap<String, IndexSet<String>>,
}

impl Selection {
    /// Create an empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attributes selected in `category`
    #[must_use]
    pub fn get(&self, category: &str) -> Option<&IndexSet<String>> {
        self.categories.get(category)
    }

    /// Whether the pair is selected
    #[must_use]
    pub fn contains(&self, category: &str, attribute: &str) -> bool {
        self.categories
            .get(category)
            .is_some_and(|attrs| attrs.contains(attribute))
    }

    /// Iterate over categories and their attributes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.categories
            .iter()
            .map(|(category, attrs)| (category.as_str(), attrs))
    }

    /// Category names in insertion order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// True when nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(IndexSet::is_empty)
    }

    /// Total number of selected attributes across all categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.values().map(IndexSet::len).sum()
    }

    /// Add a pair; returns false if it was already present
    pub fn insert(&mut self, category: &str, attribute: &str) -> bool {
        self.categories
            .entry(category.to_string())
            .or_default()
            .insert(attribute.to_string())
    }

    /// Remove a pair, dropping the category once its set is empty
    ///
    /// Returns false if the pair was not present.
    pub fn remove(&mut self, category: &str, attribute: &str) -> bool {
        let Some(attrs) = self.categories.get_mut(category) else {
            return false;
        };

        let removed = attrs.shift_remove(attribute);
        if attrs.is_empty() {
            self.categories.shift_remove(category);
        }
        removed
    }

    /// Remove everything
    pub fn clear(&mut self) {
        self.categories.clear();
    }

    /// Export as category → attribute list
    #[must_use]
    pub fn to_map(&self) -> IndexMap<String, Vec<String>> {
        self.categories
            .iter()
            .filter(|(_, attrs)| !attrs.is_empty())
            .map(|(category, attrs)| (category.clone(), attrs.iter().cloned().collect()))
            .collect()
    }
}

impl From<IndexMap<String, Vec<String>>> for Selection {
    fn from(map: IndexMap<String, Vec<String>>) -> Self {
        map.into_iter().collect()
    }
}

impl FromIterator<(String, Vec<String>)> for Selection {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut selection = Self::new();
        for (category, attributes) in iter {
            for attribute in attributes {
                selection.insert(&category, &attribute);
            }
        }
        selection
    }
}

impl<'s> FromIterator<(&'s str, &'s str)> for Selection {
    fn from_iter<I: IntoIterator<Item = (&'s str, &'s str)>>(iter: I) -> Self {
        let mut selection = Self::new();
        for (category, attribute) in iter {
            selection.insert(category, attribute);
        }
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_dedups() {
        let mut selection = Selection::new();
        assert!(selection.insert("Sector", "Tech"));
        assert!(!selection.insert("Sector", "Tech"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_remove_prunes_category() {
        let mut selection: Selection = [("Sector", "Tech"), ("Region", "EU")].into_iter().collect();
        assert!(selection.remove("Sector", "Tech"));
        assert!(selection.get("Sector").is_none());
        assert_eq!(selection.categories().collect::<Vec<_>>(), vec!["Region"]);
    }

    #[test]
    fn test_remove_absent() {
        let mut selection = Selection::new();
        assert!(!selection.remove("Sector", "Tech"));
        selection.insert("Sector", "Tech");
        assert!(!selection.remove("Sector", "Finance"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_reselect_goes_to_end() {
        let mut selection: Selection = [("R", "a"), ("R", "b")].into_iter().collect();
        selection.remove("R", "a");
        selection.insert("R", "a");
        let attrs: Vec<&String> = selection.get("R").unwrap().iter().collect();
        assert_eq!(attrs, vec!["b", "a"]);
    }

    #[test]
    fn test_json_shape() {
        let selection: Selection = [("Sector", "Tech"), ("Sector", "Finance")].into_iter().collect();
        let json = serde_json::to_string(&selection).unwrap();
        assert_eq!(json, r#"{"Sector":["Tech","Finance"]}"#);

        let back: Selection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, selection);
    }

    #[test]
    fn test_from_map_drops_empty_lists() {
        let mut map = IndexMap::new();
        map.insert("Sector".to_string(), vec![]);
        map.insert("Region".to_string(), vec!["US".to_string(), "US".to_string()]);

        let selection = Selection::from(map);
        assert!(selection.get("Sector").is_none());
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_to_map_is_independent() {
        let selection: Selection = [("Sector", "Tech")].into_iter().collect();
        let mut exported = selection.to_map();
        exported.get_mut("Sector").unwrap().push("Finance".to_string());
        assert_eq!(selection.len(), 1);
    }
}
