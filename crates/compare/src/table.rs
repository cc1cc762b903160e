//! Side-by-side comparison table.

use std::collections::BTreeSet;

use serde::Serialize;

use storefront_catalog::{Product, resolve_facet_value};
use storefront_core::ProductId;

use crate::item::CompareProduct;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonColumn {
    pub product_id: ProductId,
    pub name: String,
    pub slug: String,
    pub image: String,
    pub price: Option<f64>,
}

/// One specification across all compared products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub key: String,
    /// One cell per column; `None` where the product has no (non-empty) value.
    pub values: Vec<Option<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ComparisonTable {
    pub columns: Vec<ComparisonColumn>,
    pub rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
    /// Build the table for the given members.
    ///
    /// Columns follow member order. Members no longer present in `products`
    /// are skipped. Rows cover the union of spec keys of the shown products,
    /// in ascending key order.
    pub fn build(members: &[CompareProduct], products: &[Product]) -> Self {
        let shown: Vec<(&CompareProduct, &Product)> = members
            .iter()
            .filter_map(|m| products.iter().find(|p| p.product_id == m.id).map(|p| (m, p)))
            .collect();

        let keys: BTreeSet<&str> = shown
            .iter()
            .flat_map(|(_, p)| p.specs.keys().map(String::as_str))
            .collect();

        let rows = keys
            .into_iter()
            .map(|key| ComparisonRow {
                key: key.to_string(),
                values: shown
                    .iter()
                    .map(|(_, p)| {
                        p.specs
                            .get(key)
                            .map(resolve_facet_value)
                            .filter(|v| !v.is_empty())
                            .map(str::to_string)
                    })
                    .collect(),
            })
            .collect();

        let columns = shown
            .iter()
            .map(|(m, p)| ComparisonColumn {
                product_id: p.product_id.clone(),
                name: p.name.clone(),
                slug: p.slug.clone(),
                image: m.image.clone(),
                price: p.price,
            })
            .collect();

        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Rows where at least two shown values differ.
    pub fn differing_rows(&self) -> impl Iterator<Item = &ComparisonRow> {
        self.rows.iter().filter(|row| {
            let mut values = row.values.iter();
            match values.next() {
                Some(first) => values.any(|v| v != first),
                None => false,
            }
        })
    }
}
