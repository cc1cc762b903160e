use serde::{Deserialize, Serialize};

use storefront_catalog::Product;
use storefront_core::{Entity, ProductId};

/// The slice of a product the compare bar needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompareProduct {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    /// Comparison group; every member of a set shares it.
    pub category: String,
}

impl CompareProduct {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        image: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            category: category.into(),
        }
    }

    /// Project a catalog product for comparison.
    ///
    /// Products are grouped by subcategory (a "Recliner" is only comparable
    /// with other recliners). Products without images cannot be shown in the
    /// compare bar and yield `None`, as do products without a subcategory.
    pub fn from_product(product: &Product) -> Option<Self> {
        if product.subcategory_id.is_empty() {
            return None;
        }
        let image = product.primary_image()?;
        Some(Self {
            id: product.id().clone(),
            name: product.name.clone(),
            image: image.to_string(),
            category: product.subcategory_id.to_string(),
        })
    }
}
