//! Category page state across asynchronous catalog loads.

use std::sync::Arc;

use storefront_catalog::Catalog;
use storefront_filter::{CategoryScope, CategoryView, FacetSelection};

use crate::error::LoadError;
use crate::source::{CatalogSource, load_catalog};

/// Lifecycle of the current category view.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Ready,
    NotFound,
    Failed(LoadError),
}

/// Handed out by [`CategoryViewController::begin_load`]; identifies which
/// navigation a response belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    category: String,
    subcategory: Option<String>,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn subcategory(&self) -> Option<&str> {
        self.subcategory.as_deref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// A newer load started after this one; the response was dropped.
    Discarded,
}

/// Owns one category page: route values, facet selection and the snapshot
/// the page is derived from.
///
/// Every navigation bumps a generation counter. A response is applied only
/// if it carries the current generation, so a slow response for a page the
/// shopper already left can never overwrite the page they are on.
#[derive(Debug, Default)]
pub struct CategoryViewController {
    generation: u64,
    category: Option<String>,
    subcategory: Option<String>,
    selection: FacetSelection,
    catalog: Option<Arc<Catalog>>,
    state: ViewState,
}

impl CategoryViewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start navigating to `category` (and optionally a subcategory).
    ///
    /// Switching category clears the facet selection; staying within the
    /// category keeps it.
    pub fn begin_load(&mut self, category: &str, subcategory: Option<&str>) -> LoadTicket {
        self.generation += 1;

        if self.category.as_deref() != Some(category) {
            if !self.selection.is_empty() {
                tracing::debug!(category, "category changed, clearing facet selection");
            }
            self.selection = FacetSelection::new();
        }
        self.category = Some(category.to_string());
        self.subcategory = subcategory.map(str::to_string);
        self.state = ViewState::Loading;

        LoadTicket {
            generation: self.generation,
            category: category.to_string(),
            subcategory: self.subcategory.clone(),
        }
    }

    /// Apply the result of the load identified by `ticket`.
    pub fn complete(
        &mut self,
        ticket: LoadTicket,
        result: Result<Catalog, LoadError>,
    ) -> ApplyOutcome {
        if ticket.generation != self.generation {
            tracing::warn!(
                ticket = ticket.generation,
                current = self.generation,
                category = %ticket.category,
                "discarding stale catalog response"
            );
            return ApplyOutcome::Discarded;
        }

        match result {
            Ok(catalog) => {
                self.state = if catalog.category_by_selector(&ticket.category).is_some() {
                    ViewState::Ready
                } else {
                    ViewState::NotFound
                };
                self.catalog = Some(Arc::new(catalog));
            }
            Err(err) => {
                tracing::warn!(error = %err, category = %ticket.category, "category load failed");
                self.state = ViewState::Failed(err);
            }
        }
        ApplyOutcome::Applied
    }

    /// Navigate and load in one step.
    pub async fn load<S>(&mut self, source: &S, category: &str, subcategory: Option<&str>) -> ApplyOutcome
    where
        S: CatalogSource + ?Sized,
    {
        let ticket = self.begin_load(category, subcategory);
        let result = load_catalog(source).await;
        self.complete(ticket, result)
    }

    pub fn toggle_facet(&mut self, facet_key: &str, value: &str) {
        self.selection = self.selection.toggle(facet_key, value);
    }

    /// Select a value without flipping it off when it is already selected.
    pub fn select_facet(&mut self, facet_key: &str, value: &str) {
        self.selection = self.selection.clone().with(facet_key, value);
    }

    pub fn clear_filters(&mut self) {
        self.selection = FacetSelection::new();
    }

    /// The derived page, once a load for the current navigation has landed.
    pub fn view(&self) -> Option<CategoryScope<'_>> {
        if !matches!(self.state, ViewState::Ready | ViewState::NotFound) {
            return None;
        }
        let catalog = self.catalog.as_deref()?;
        let category = self.category.as_deref()?;
        Some(CategoryView::derive(
            catalog,
            category,
            self.subcategory.as_deref(),
            &self.selection,
        ))
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn selection(&self) -> &FacetSelection {
        &self.selection
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn subcategory(&self) -> Option<&str> {
        self.subcategory.as_deref()
    }

    /// Most recently applied snapshot (kept while a newer load is in flight).
    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_deref()
    }
}
