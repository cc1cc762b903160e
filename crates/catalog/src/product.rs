use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use storefront_core::{CategoryId, Entity, ProductId, SubcategoryId};

use crate::serde_ext::null_as_default;

/// A stored specification value.
///
/// The catalog admin writes either a bare string (`"Teak"`) or a
/// `{ "key": "material", "value": "Teak" }` pair; anything else is carried
/// through untouched and resolves to the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Text(String),
    Pair(SpecPair),
    Other(serde_json::Value),
}

/// The `{ key, value }` shape. Only `value` is read; `key` is carried as
/// whatever JSON the admin stored so it never decides which shape matches.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SpecPair {
    #[serde(default)]
    pub key: Option<serde_json::Value>,
    #[serde(default)]
    pub value: Option<String>,
}

impl SpecValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Pair(SpecPair {
            key: Some(serde_json::Value::String(key.into())),
            value: Some(value.into()),
        })
    }
}

/// Resolve a spec value to the string used for facets, filtering and comparison.
///
/// An empty result means "no value": callers must skip it.
pub fn resolve_facet_value(value: &SpecValue) -> &str {
    match value {
        SpecValue::Text(text) => text.as_str(),
        SpecValue::Pair(SpecPair { value: Some(v), .. }) => v.as_str(),
        SpecValue::Pair(_) | SpecValue::Other(_) => "",
    }
}

/// A catalog product as served by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: ProductId,
    pub slug: String,
    pub name: String,
    /// Empty when the record carries no category; such products match no category.
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_id: CategoryId,
    /// Empty when the record carries no subcategory.
    #[serde(default, deserialize_with = "null_as_default")]
    pub subcategory_id: SubcategoryId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub thumbnail_img: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub specs: BTreeMap<String, SpecValue>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub mrp: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub offer_text: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_in_stock: Option<bool>,
    #[serde(default)]
    pub is_new_arrival: bool,
    #[serde(default)]
    pub is_trending: bool,
    #[serde(default)]
    pub is_best_seller: bool,
    #[serde(default)]
    pub is_recommended: bool,
    #[serde(default)]
    pub is_on_offer: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub is_custom_order: bool,
}

impl Product {
    /// Minimal active product; handy for fixtures and previews.
    pub fn new(
        product_id: impl Into<ProductId>,
        slug: impl Into<String>,
        name: impl Into<String>,
        category_id: impl Into<CategoryId>,
        subcategory_id: impl Into<SubcategoryId>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            slug: slug.into(),
            name: name.into(),
            category_id: category_id.into(),
            subcategory_id: subcategory_id.into(),
            images: Vec::new(),
            thumbnail_img: String::new(),
            specs: BTreeMap::new(),
            description: None,
            price: None,
            mrp: None,
            rating: None,
            offer_text: None,
            is_active: true,
            is_in_stock: None,
            is_new_arrival: false,
            is_trending: false,
            is_best_seller: false,
            is_recommended: false,
            is_on_offer: false,
            is_featured: false,
            is_premium: false,
            is_custom_order: false,
        }
    }

    pub fn with_spec(mut self, key: impl Into<String>, value: SpecValue) -> Self {
        self.specs.insert(key.into(), value);
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Missing stock information counts as in stock.
    pub fn in_stock(&self) -> bool {
        self.is_in_stock != Some(false)
    }

    /// Look up a spec entry by key, ignoring ASCII/Unicode case.
    ///
    /// Returns the stored key alongside the value. When several stored keys
    /// differ only in case, the first in key order wins.
    pub fn spec_entry(&self, key: &str) -> Option<(&str, &SpecValue)> {
        let wanted = key.to_lowercase();
        self.specs
            .iter()
            .find(|(k, _)| k.to_lowercase() == wanted)
            .map(|(k, v)| (k.as_str(), v))
    }

    /// Resolved, non-empty value of a spec key (case-insensitive).
    pub fn spec_value(&self, key: &str) -> Option<&str> {
        self.spec_entry(key)
            .map(|(_, v)| resolve_facet_value(v))
            .filter(|v| !v.is_empty())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}
