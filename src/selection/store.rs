//! Selection store
//!
//! `SelectionStore` is the single owner of a builder's `Selection`. All
//! mutations go through `select`, `deselect` and `clear`; each one that
//! actually changes state notifies every subscriber, synchronously and in
//! subscription order, before returning.

use super::error::SelectionError;
use super::types::Selection;
use crate::catalog::Catalog;
use indexmap::IndexSet;
use log::{debug, warn};
use std::fmt;

/// Callback invoked with the post-mutation selection
pub type Listener<'a> = Box<dyn FnMut(&Selection) + 'a>;

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Owner of one builder's selection
///
/// The store borrows its catalog; it never copies or mutates it. Each store
/// is fully independent, so two builders over the same catalog never see each
/// other's selections.
pub struct SelectionStore<'a> {
    catalog: &'a Catalog,
    selection: Selection,
    listeners: Vec<(SubscriptionId, Listener<'a>)>,
    next_id: u64,
}

impl<'a> SelectionStore<'a> {
    /// Create an empty store over `catalog`
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::new(),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Create a store seeded with a copy of `initial`
    ///
    /// Duplicate pairs collapse and empty categories are dropped. The caller's
    /// selection is copied, never aliased.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::InvalidAttribute` for the first pair that is
    /// not in the catalog. Nothing is seeded in that case.
    pub fn with_initial(catalog: &'a Catalog, initial: &Selection) -> Result<Self, SelectionError> {
        for (category, attributes) in initial.iter() {
            if let Some(attribute) = attributes.iter().find(|a| !catalog.contains(category, a)) {
                warn!("rejected initial selection {category}/{attribute}: not in catalog");
                return Err(SelectionError::invalid(category, attribute));
            }
        }

        let mut store = Self::new(catalog);
        for (category, attributes) in initial.iter() {
            for attribute in attributes {
                store.selection.insert(category, attribute);
            }
        }
        debug!("seeded selection with {} attribute(s)", store.selection.len());

        Ok(store)
    }

    /// The catalog this store validates against
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Select an attribute
    ///
    /// Selecting an already selected attribute is a no-op and does not notify.
    ///
    /// # Returns
    /// * `Ok(true)` - The attribute was added and subscribers were notified
    /// * `Ok(false)` - The attribute was already selected
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::InvalidAttribute` if the pair is not in the
    /// catalog. The selection is left unchanged.
    pub fn select(&mut self, category: &str, attribute: &str) -> Result<bool, SelectionError> {
        if !self.catalog.contains(category, attribute) {
            warn!("rejected select {category}/{attribute}: not in catalog");
            return Err(SelectionError::invalid(category, attribute));
        }

        if !self.selection.insert(category, attribute) {
            return Ok(false);
        }

        debug!("selected {category}/{attribute}");
        self.notify();
        Ok(true)
    }

    /// Deselect an attribute
    ///
    /// Removing an attribute that is not selected is not an error. The
    /// category disappears from the selection when its last attribute goes.
    /// Subscribers are notified only when something was removed.
    pub fn deselect(&mut self, category: &str, attribute: &str) -> bool {
        if !self.selection.remove(category, attribute) {
            return false;
        }

        debug!("deselected {category}/{attribute}");
        self.notify();
        true
    }

    /// Deselect everything, notifying once if anything was selected
    pub fn clear(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }

        debug!("cleared {} attribute(s)", self.selection.len());
        self.selection.clear();
        self.notify();
        true
    }

    /// Copy of the attributes selected in `category` (empty if none)
    #[must_use]
    pub fn get_selected(&self, category: &str) -> IndexSet<String> {
        self.selection.get(category).cloned().unwrap_or_default()
    }

    /// Whether the pair is selected
    #[must_use]
    pub fn is_selected(&self, category: &str, attribute: &str) -> bool {
        self.selection.contains(category, attribute)
    }

    /// Copy of the full selection
    #[must_use]
    pub fn get_all(&self) -> Selection {
        self.selection.clone()
    }

    /// Borrow the live selection (read-only)
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Total number of selected attributes
    #[must_use]
    pub fn len(&self) -> usize {
        self.selection.len()
    }

    /// True when nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Register a listener called after every applied mutation
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Selection) + 'a,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener; returns false if it was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Consume the store, returning its selection
    #[must_use]
    pub fn into_selection(self) -> Selection {
        self.selection
    }

    fn notify(&mut self) {
        for (_, listener) in &mut self.listeners {
            listener(&self.selection);
        }
    }
}

impl fmt::Debug for SelectionStore<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStore")
            .field("selection", &self.selection)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
