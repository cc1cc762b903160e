//! One shopper's browsing state.

use storefront_catalog::Product;
use storefront_compare::{AddError, AddOutcome, CompareProduct, CompareSet, ComparisonTable, ToggleOutcome};
use storefront_core::SessionId;

use crate::view::CategoryViewController;

/// Compare selection plus the current category page, owned by whoever drives
/// the UI. Nothing here is global; two sessions never share state.
#[derive(Debug, Default)]
pub struct BrowsingSession {
    id: SessionId,
    compare: CompareSet,
    view: CategoryViewController,
}

impl BrowsingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(id: SessionId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn compare(&self) -> &CompareSet {
        &self.compare
    }

    pub fn view(&self) -> &CategoryViewController {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut CategoryViewController {
        &mut self.view
    }

    pub fn add_to_compare(&mut self, item: CompareProduct) -> Result<AddOutcome, AddError> {
        let product_id = item.id.clone();
        let result = self.compare.add(item);
        match &result {
            Ok(outcome) => tracing::info!(
                session = %self.id,
                product = %product_id,
                ?outcome,
                size = self.compare.len(),
                "compare add"
            ),
            Err(err) => tracing::info!(
                session = %self.id,
                product = %product_id,
                reason = %err,
                "compare add rejected"
            ),
        }
        result
    }

    /// Compare-button behaviour on a product card.
    pub fn toggle_compare(&mut self, item: CompareProduct) -> Result<ToggleOutcome, AddError> {
        let product_id = item.id.clone();
        let result = self.compare.toggle(item);
        match &result {
            Ok(outcome) => tracing::info!(
                session = %self.id,
                product = %product_id,
                ?outcome,
                size = self.compare.len(),
                "compare toggle"
            ),
            Err(err) => tracing::info!(
                session = %self.id,
                product = %product_id,
                reason = %err,
                "compare toggle rejected"
            ),
        }
        result
    }

    pub fn remove_from_compare(&mut self, product_id: &str) -> bool {
        let removed = self.compare.remove(product_id);
        if removed {
            tracing::info!(session = %self.id, product = product_id, size = self.compare.len(), "compare remove");
        }
        removed
    }

    pub fn clear_compare(&mut self) {
        if !self.compare.is_empty() {
            tracing::info!(session = %self.id, cleared = self.compare.len(), "compare cleared");
        }
        self.compare.clear();
    }

    /// Whether the compare control of `product` is usable: it is already a
    /// member (and can be removed) or it may join the set.
    pub fn can_compare(&self, product: &Product) -> bool {
        if self.compare.contains(product.product_id.as_str()) {
            return true;
        }
        CompareProduct::from_product(product).is_some()
            && !self.compare.is_full()
            && self.compare.can_accept(product.subcategory_id.as_str())
    }

    /// Comparison table over the latest applied snapshot.
    pub fn comparison_table(&self) -> ComparisonTable {
        match self.view.catalog() {
            Some(catalog) => ComparisonTable::build(self.compare.members(), &catalog.products),
            None => ComparisonTable::default(),
        }
    }
}
