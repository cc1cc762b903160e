//! Everything a category page shows, derived in one pass.

use serde::Serialize;

use storefront_catalog::{
    Banner, Catalog, Category, Product, Subcategory, banners_for_category, banners_for_subcategory,
};

use crate::engine::{SubcategoryScope, apply_filters, products_in_category};
use crate::facets::{FacetVocabulary, available_facets};
use crate::selection::FacetSelection;

/// Outcome of resolving a category route value.
///
/// "Category not found" and "category has no products" are different
/// situations; the latter is a `Found` view with empty product lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CategoryScope<'a> {
    NotFound { selector: String },
    Found(CategoryView<'a>),
}

impl<'a> CategoryScope<'a> {
    pub fn found(self) -> Option<CategoryView<'a>> {
        match self {
            CategoryScope::Found(view) => Some(view),
            CategoryScope::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, CategoryScope::Found(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView<'a> {
    pub category: &'a Category,
    pub subcategories: Vec<&'a Subcategory>,
    pub subcategory: SubcategoryScope,
    /// All products of the category (facet vocabulary source).
    pub category_products: Vec<&'a Product>,
    pub facets: FacetVocabulary,
    /// Products left after the subcategory scope and facet selection.
    pub products: Vec<&'a Product>,
    pub active_filter_count: usize,
    pub banners: Vec<&'a Banner>,
}

impl<'a> CategoryView<'a> {
    /// Derive the view for `category_selector` (slug or id), narrowed by an
    /// optional subcategory selector and the shopper's facet selection.
    pub fn derive(
        catalog: &'a Catalog,
        category_selector: &str,
        subcategory_selector: Option<&str>,
        selection: &FacetSelection,
    ) -> CategoryScope<'a> {
        let Some(category) = catalog.category_by_selector(category_selector) else {
            tracing::debug!(selector = category_selector, "category not found in snapshot");
            return CategoryScope::NotFound {
                selector: category_selector.to_string(),
            };
        };

        let subcategories = catalog.subcategories_of(&category.category_id);
        let subcategory = SubcategoryScope::resolve(subcategories.iter().copied(), subcategory_selector);
        let category_products = products_in_category(&catalog.products, &category.category_id);
        let facets = available_facets(category_products.iter().copied());
        let products = apply_filters(category_products.iter().copied(), &subcategory, selection);

        let banners = match subcategory_selector {
            Some(selector) => {
                let resolved = match &subcategory {
                    SubcategoryScope::Resolved(id) => {
                        subcategories.iter().copied().find(|s| &s.subcategory_id == id)
                    }
                    _ => None,
                };
                banners_for_subcategory(&catalog.banners, selector, resolved)
            }
            None => banners_for_category(&catalog.banners, category),
        };

        tracing::debug!(
            category = %category.category_id,
            category_products = category_products.len(),
            shown = products.len(),
            facet_keys = facets.len(),
            "derived category view"
        );

        CategoryScope::Found(CategoryView {
            category,
            subcategories,
            subcategory,
            category_products,
            facets,
            products,
            active_filter_count: selection.active_count(),
            banners,
        })
    }

    /// Whether the subcategory selector (if any) named a known subcategory.
    pub fn subcategory_found(&self) -> bool {
        self.subcategory.is_found()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
