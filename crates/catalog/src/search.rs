//! Header quick search over a catalog snapshot.

use serde::Serialize;

use crate::category::{Category, Subcategory};
use crate::product::Product;
use crate::snapshot::Catalog;

pub const MAX_CATEGORY_HITS: usize = 3;
pub const MAX_SUBCATEGORY_HITS: usize = 3;
pub const MAX_PRODUCT_HITS: usize = 5;

/// A subcategory hit with the slug of the category it lives under, which
/// its page route needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubcategoryHit<'a> {
    pub subcategory: &'a Subcategory,
    pub parent_slug: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResults<'a> {
    pub categories: Vec<&'a Category>,
    pub subcategories: Vec<SubcategoryHit<'a>>,
    pub products: Vec<&'a Product>,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.subcategories.is_empty() && self.products.is_empty()
    }
}

impl Catalog {
    /// Case-insensitive name substring search, in snapshot order.
    ///
    /// A blank query finds nothing. Subcategories whose parent category is not
    /// in the snapshot are skipped since they have no page to link to.
    pub fn search(&self, query: &str) -> SearchResults<'_> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return SearchResults::default();
        }
        let hit = |name: &str| name.to_lowercase().contains(&query);

        let categories = self
            .categories
            .iter()
            .filter(|c| hit(&c.name))
            .take(MAX_CATEGORY_HITS)
            .collect();

        let subcategories = self
            .subcategories
            .iter()
            .filter(|s| hit(&s.name))
            .filter_map(|subcategory| {
                let parent = subcategory.category_id()?;
                let category = self.categories.iter().find(|c| c.category_id.as_str() == parent)?;
                Some(SubcategoryHit {
                    subcategory,
                    parent_slug: category.slug.as_str(),
                })
            })
            .take(MAX_SUBCATEGORY_HITS)
            .collect();

        let products = self
            .products
            .iter()
            .filter(|p| hit(&p.name))
            .take(MAX_PRODUCT_HITS)
            .collect();

        let results = SearchResults {
            categories,
            subcategories,
            products,
        };
        tracing::debug!(
            query = %query,
            categories = results.categories.len(),
            subcategories = results.subcategories.len(),
            products = results.products.len(),
            "catalog search"
        );
        results
    }
}
