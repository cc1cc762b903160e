//! Facet vocabulary extraction.

use std::collections::{BTreeMap, BTreeSet};

use storefront_catalog::{Product, resolve_facet_value};

/// Display key → values available under it, ascending.
pub type FacetVocabulary = BTreeMap<String, BTreeSet<String>>;

/// Display form of a spec key: first character upper-cased, rest untouched.
pub fn display_key(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Collect every non-empty spec value of `products`, grouped by display key.
///
/// Keys whose values all resolve to the empty string are omitted.
pub fn available_facets<'a, I>(products: I) -> FacetVocabulary
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut vocabulary = FacetVocabulary::new();
    for product in products {
        for (key, value) in &product.specs {
            let value = resolve_facet_value(value);
            if value.is_empty() {
                continue;
            }
            vocabulary
                .entry(display_key(key))
                .or_default()
                .insert(value.to_string());
        }
    }
    vocabulary
}
