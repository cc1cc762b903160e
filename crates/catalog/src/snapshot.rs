//! Read-only catalog snapshot shared by every derived view of one page load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, resolve_slug_or_id, sorted_active};

use crate::banner::Banner;
use crate::category::{Category, Subcategory};
use crate::product::Product;
use crate::section::Section;

/// Everything the storefront fetched from the API, frozen at `fetched_at`.
///
/// Collections keep the order the API returned them in; queries never sort
/// products implicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub sections: Vec<Section>,
    pub categories: Vec<Category>,
    pub subcategories: Vec<Subcategory>,
    pub products: Vec<Product>,
    #[serde(default)]
    pub banners: Vec<Banner>,
    pub fetched_at: DateTime<Utc>,
}

impl Catalog {
    pub fn new(
        sections: Vec<Section>,
        categories: Vec<Category>,
        subcategories: Vec<Subcategory>,
        products: Vec<Product>,
        banners: Vec<Banner>,
    ) -> Self {
        Self {
            sections,
            categories,
            subcategories,
            products,
            banners,
            fetched_at: Utc::now(),
        }
    }

    /// Snapshot with no data (e.g. before the first load completes).
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new(), Vec::new(), Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
            && self.categories.is_empty()
            && self.subcategories.is_empty()
            && self.products.is_empty()
    }

    pub fn section_by_slug(&self, slug: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.slug == slug)
    }

    /// Resolve a category route value (slug first, then id).
    pub fn category_by_selector(&self, selector: &str) -> Option<&Category> {
        resolve_slug_or_id(&self.categories, selector)
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.category_id == id)
    }

    /// Active sections flagged for the landing page, in display order.
    pub fn home_sections(&self) -> Vec<&Section> {
        sorted_active(self.sections.iter().filter(|s| s.show_on_home))
    }

    /// Active sections in display order.
    pub fn active_sections(&self) -> Vec<&Section> {
        sorted_active(&self.sections)
    }

    /// Categories of a section in display order (inactive ones included, as
    /// the section page lists them).
    pub fn categories_in_section(&self, section: &Section) -> Vec<&Category> {
        let mut categories: Vec<&Category> = self
            .categories
            .iter()
            .filter(|c| c.section_id == section.section_id)
            .collect();
        categories.sort_by_key(|c| c.order);
        categories
    }

    /// Subcategories keyed under a category, in snapshot order.
    pub fn subcategories_of(&self, category_id: &CategoryId) -> Vec<&Subcategory> {
        self.subcategories
            .iter()
            .filter(|s| s.belongs_to(category_id))
            .collect()
    }

    /// Single-product lookup by slug or id.
    ///
    /// Exact slug/id matches win; otherwise a case-insensitive slug match is
    /// tried (ids stay case-sensitive).
    pub fn find_product(&self, slug_or_id: &str) -> Option<&Product> {
        let exact = self
            .products
            .iter()
            .find(|p| p.slug == slug_or_id || p.product_id == slug_or_id);
        if exact.is_some() {
            return exact;
        }

        let wanted = slug_or_id.to_lowercase();
        let found = self
            .products
            .iter()
            .find(|p| !p.slug.is_empty() && p.slug.to_lowercase() == wanted);
        if let Some(product) = found {
            tracing::debug!(
                requested = slug_or_id,
                slug = %product.slug,
                "product matched by case-insensitive slug"
            );
        }
        found
    }
}
