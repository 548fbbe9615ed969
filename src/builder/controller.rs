//! Query builder controller
//!
//! Provides a stateful API over one selection:
//! ```
//! use qbuilder::builder::QueryBuilder;
//! use qbuilder::catalog::Catalog;
//!
//! let catalog = Catalog::from_toml_str(r#"
//! Sector = ["Tech", "Finance"]
//! Region = ["US", "EU"]
//! "#).unwrap();
//!
//! let mut builder = QueryBuilder::new(&catalog);
//! builder.select("Sector", "Tech").unwrap();
//! builder.set_search_term("fin");
//!
//! assert_eq!(builder.visible_attributes(), vec!["Finance"]);
//! ```

use super::error::BuilderError;
use super::options::Labels;
use super::providers::{
    BrowserFrame, CategoryListBinding, CategoryListProvider, RenderSink, SearchBinding,
    SearchProvider, SummaryFrame,
};
use crate::catalog::{Catalog, category_id};
use crate::selection::{Listener, Selection, SelectionStore, SubscriptionId};
use crate::views::{self, BrowseContext, CategoryGroup};
use log::{debug, warn};
use std::fmt;

/// One live query builder
///
/// Owns its selection store and browse context. The catalog is borrowed and
/// may be shared with other builders; selections never are.
///
/// Use `QueryBuilder::new` for the defaults or `QueryBuilder::builder()` to
/// seed a selection, attach an `on_change` callback or a render sink.
pub struct QueryBuilder<'a> {
    catalog: &'a Catalog,
    store: SelectionStore<'a>,
    context: BrowseContext,
    labels: Labels,
    sink: Option<Box<dyn RenderSink + 'a>>,
}

impl<'a> QueryBuilder<'a> {
    /// Builder with an empty selection, default labels and the first category open
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            store: SelectionStore::new(catalog),
            context: BrowseContext::new(catalog.first_category().unwrap_or_default()),
            labels: Labels::default(),
            sink: None,
        }
    }

    /// Create a new builder for constructing a `QueryBuilder`
    #[must_use]
    pub fn builder() -> QueryBuilderBuilder<'a> {
        QueryBuilderBuilder::new()
    }

    /// Open a category by name
    ///
    /// Clears the search term and redraws the attribute column only.
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::UnknownCategory` if the catalog has no such
    /// category; the browse context is left as it was.
    pub fn select_category(&mut self, name: &str) -> Result<(), BuilderError> {
        if !self.catalog.has_category(name) {
            warn!("rejected category switch to '{name}': not in catalog");
            return Err(BuilderError::UnknownCategory(name.to_string()));
        }

        debug!("active category: {name}");
        self.context = BrowseContext::new(name);
        self.render_browser();
        Ok(())
    }

    /// Open a category by its list id (see `catalog::category_id`)
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::UnknownCategory` if no category has this id.
    pub fn select_category_by_id(&mut self, id: &str) -> Result<(), BuilderError> {
        let name = self
            .catalog
            .category_for_id(id)
            .ok_or_else(|| BuilderError::UnknownCategory(id.to_string()))?;
        self.select_category(name)
    }

    /// Replace the search term and redraw the attribute column
    ///
    /// Any string is accepted; an empty or blank one removes the filter.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.context.search_term = term.into();
        debug!("search term: {:?}", self.context.search_term);
        self.render_browser();
    }

    /// Select an attribute
    ///
    /// # Returns
    /// * `Ok(true)` - Selection changed; listeners ran and both views were redrawn
    /// * `Ok(false)` - Already selected; nothing happened
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::Selection` if the pair is not in the catalog.
    pub fn select(&mut self, category: &str, attribute: &str) -> Result<bool, BuilderError> {
        let changed = self.store.select(category, attribute)?;
        if changed {
            self.render_all();
        }
        Ok(changed)
    }

    /// Select an attribute of the active category (a checkbox tick in the browser)
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::Selection` if the attribute is not in the active category.
    pub fn check(&mut self, attribute: &str) -> Result<bool, BuilderError> {
        let category = self.context.active_category.clone();
        self.select(&category, attribute)
    }

    /// Deselect an attribute (a tag removal in the summary)
    ///
    /// Returns false, without notifying anyone, if it was not selected.
    pub fn deselect(&mut self, category: &str, attribute: &str) -> bool {
        let changed = self.store.deselect(category, attribute);
        if changed {
            self.render_all();
        }
        changed
    }

    /// Deselect everything
    pub fn clear(&mut self) -> bool {
        let changed = self.store.clear();
        if changed {
            self.render_all();
        }
        changed
    }

    /// Copy of the current selection
    #[must_use]
    pub fn get_selected_attributes(&self) -> Selection {
        self.store.get_all()
    }

    /// Read access to the underlying store
    #[must_use]
    pub const fn store(&self) -> &SelectionStore<'a> {
        &self.store
    }

    /// Register an additional change listener
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Selection) + 'a,
    {
        self.store.subscribe(listener)
    }

    /// Remove a listener registered with `subscribe`
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Attributes currently offered by the browser
    #[must_use]
    pub fn visible_attributes(&self) -> Vec<String> {
        views::visible_attributes(self.catalog, &self.store, &self.context)
    }

    /// Current selection grouped for the summary
    #[must_use]
    pub fn grouped_view(&self) -> Vec<CategoryGroup> {
        views::grouped_view(&self.store)
    }

    /// Active category and search term
    #[must_use]
    pub const fn browse_context(&self) -> &BrowseContext {
        &self.context
    }

    /// The catalog this builder browses
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Display labels
    #[must_use]
    pub const fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Data for a search widget over the active category
    #[must_use]
    pub fn search_binding(&self) -> SearchBinding {
        SearchBinding {
            placeholder: self.labels.search_placeholder.clone(),
            data: self
                .catalog
                .attributes(&self.context.active_category)
                .map(<[String]>::to_vec)
                .unwrap_or_default(),
        }
    }

    /// Data for a category list widget
    #[must_use]
    pub fn category_list_binding(&self) -> CategoryListBinding {
        CategoryListBinding {
            items: self.catalog.category_items(),
            initial_selection: Some(category_id(&self.context.active_category)),
        }
    }

    /// Bind a search widget to the active category
    pub fn attach_search(&self, provider: &mut dyn SearchProvider) {
        provider.bind(self.search_binding());
    }

    /// Bind a category list widget
    pub fn attach_category_list(&self, provider: &mut dyn CategoryListProvider) {
        provider.bind(self.category_list_binding());
    }

    /// Replace the render sink and draw both views into it
    pub fn set_sink(&mut self, sink: Box<dyn RenderSink + 'a>) {
        self.sink = Some(sink);
        self.render_all();
    }

    /// Current attribute column contents
    #[must_use]
    pub fn browser_frame(&self) -> BrowserFrame {
        BrowserFrame {
            title: self.context.active_category.clone(),
            search_term: self.context.search_term.clone(),
            attributes: self.visible_attributes(),
            placeholder: self.labels.no_results_text.clone(),
        }
    }

    /// Current summary column contents
    #[must_use]
    pub fn summary_frame(&self) -> SummaryFrame {
        SummaryFrame {
            title: self.labels.summary_title.clone(),
            groups: self.grouped_view(),
            placeholder: self.labels.no_filters_text.clone(),
        }
    }

    /// Redraw both views
    pub fn render(&mut self) {
        self.render_all();
    }

    /// Tear the builder down, returning the final selection
    #[must_use]
    pub fn dispose(self) -> Selection {
        debug!("disposing query builder with {} attribute(s)", self.store.len());
        self.store.into_selection()
    }

    fn render_browser(&mut self) {
        if self.sink.is_none() {
            return;
        }
        let frame = self.browser_frame();
        if let Some(sink) = self.sink.as_mut() {
            sink.render_attributes(&frame);
        }
    }

    fn render_all(&mut self) {
        if self.sink.is_none() {
            return;
        }
        let browser = self.browser_frame();
        let summary = self.summary_frame();
        if let Some(sink) = self.sink.as_mut() {
            sink.render_attributes(&browser);
            sink.render_summary(&summary);
        }
    }
}

impl fmt::Debug for QueryBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("store", &self.store)
            .field("context", &self.context)
            .field("labels", &self.labels)
            .field("sink", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for `QueryBuilder`
///
/// ```
/// # use qbuilder::builder::QueryBuilder;
/// # use qbuilder::catalog::Catalog;
/// # use qbuilder::selection::Selection;
/// # let catalog = Catalog::from_toml_str(r#"Region = ["US", "EU"]"#).unwrap();
/// let initial: Selection = [("Region", "EU")].into_iter().collect();
///
/// let builder = QueryBuilder::builder()
///     .catalog(&catalog)
///     .initial(initial)
///     .on_change(|selection| println!("{} selected", selection.len()))
///     .build()
///     .unwrap();
///
/// assert!(builder.store().is_selected("Region", "EU"));
/// ```
pub struct QueryBuilderBuilder<'a> {
    catalog: Option<&'a Catalog>,
    initial: Option<Selection>,
    active_category: Option<String>,
    labels: Labels,
    on_change: Option<Listener<'a>>,
    sink: Option<Box<dyn RenderSink + 'a>>,
}

impl<'a> QueryBuilderBuilder<'a> {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            catalog: None,
            initial: None,
            active_category: None,
            labels: Labels::default(),
            on_change: None,
            sink: None,
        }
    }

    /// Set the catalog (required)
    #[must_use]
    pub const fn catalog(mut self, catalog: &'a Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Seed the selection; the value is copied into the store
    #[must_use]
    pub fn initial(mut self, selection: Selection) -> Self {
        self.initial = Some(selection);
        self
    }

    /// Open this category instead of the first one
    #[must_use]
    pub fn active_category(mut self, category: impl Into<String>) -> Self {
        self.active_category = Some(category.into());
        self
    }

    /// Set display labels
    #[must_use]
    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Callback run after every applied select/deselect with the full selection
    #[must_use]
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Selection) + 'a,
    {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Render sink; it receives an initial full render from `build`
    #[must_use]
    pub fn sink(mut self, sink: Box<dyn RenderSink + 'a>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Build the `QueryBuilder`
    ///
    /// # Errors
    ///
    /// Returns `BuilderError` if:
    /// - No catalog was provided
    /// - The initial selection contains a pair outside the catalog
    /// - The requested active category is not in the catalog
    pub fn build(self) -> Result<QueryBuilder<'a>, BuilderError> {
        let catalog = self.catalog.ok_or(BuilderError::MissingCatalog)?;

        let mut store = match &self.initial {
            Some(initial) => SelectionStore::with_initial(catalog, initial)?,
            None => SelectionStore::new(catalog),
        };

        let active = match self.active_category {
            Some(name) if catalog.has_category(&name) => name,
            Some(name) => return Err(BuilderError::UnknownCategory(name)),
            None => catalog.first_category().unwrap_or_default().to_string(),
        };

        if let Some(on_change) = self.on_change {
            store.subscribe(on_change);
        }

        let mut builder = QueryBuilder {
            catalog,
            store,
            context: BrowseContext::new(active),
            labels: self.labels,
            sink: self.sink,
        };
        builder.render_all();

        Ok(builder)
    }
}

impl Default for QueryBuilderBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
