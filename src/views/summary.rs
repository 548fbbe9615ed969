//! Selection summary projection

use crate::selection::SelectionStore;
use serde::Serialize;

/// One category's selected attributes, as shown in the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub category: String,
    pub attributes: Vec<String>,
}

/// Current selection grouped by category
///
/// Categories appear in the order they first received an attribute, and
/// attributes in the order they were selected. Categories without attributes
/// are skipped even though the store never keeps them.
#[must_use]
pub fn grouped_view(store: &SelectionStore<'_>) -> Vec<CategoryGroup> {
    store
        .selection()
        .iter()
        .filter(|(_, attrs)| !attrs.is_empty())
        .map(|(category, attrs)| CategoryGroup {
            category: category.to_string(),
            attributes: attrs.iter().cloned().collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;

    #[test]
    fn test_empty_store_has_no_groups() {
        let catalog = sample_catalog();
        let store = SelectionStore::new(&catalog);
        assert!(grouped_view(&store).is_empty());
    }

    #[test]
    fn test_groups_follow_selection_order() {
        let catalog = sample_catalog();
        let mut store = SelectionStore::new(&catalog);
        store.select("Region", "EU").unwrap();
        store.select("Sector", "Finance").unwrap();
        store.select("Region", "US").unwrap();

        let groups = grouped_view(&store);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Region");
        assert_eq!(groups[0].attributes, vec!["EU", "US"]);
        assert_eq!(groups[1].category, "Sector");
        assert_eq!(groups[1].attributes, vec!["Finance"]);
    }

    #[test]
    fn test_removed_category_disappears() {
        let catalog = sample_catalog();
        let mut store = SelectionStore::new(&catalog);
        store.select("Region", "EU").unwrap();
        store.select("Sector", "Tech").unwrap();
        store.deselect("Region", "EU");

        let groups = grouped_view(&store);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, "Sector");
    }
}
