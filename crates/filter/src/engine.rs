//! Category scoping and facet matching.

use serde::Serialize;

use storefront_catalog::{Product, Subcategory, resolve_facet_value};
use storefront_core::{CategoryId, SubcategoryId, resolve_slug_or_id};

use crate::selection::FacetSelection;

/// Products of one category, in input order. Products without a category
/// reference never match.
pub fn products_in_category<'a, I>(products: I, category_id: &CategoryId) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|p| !p.category_id.is_empty() && &p.category_id == category_id)
        .collect()
}

/// How the subcategory route value narrows a category view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SubcategoryScope {
    /// No subcategory selected.
    All,
    /// The selector named a known subcategory of the category.
    Resolved(SubcategoryId),
    /// The selector matched no known subcategory. Products are then matched
    /// on their own slug, which keeps deep links to a single product working.
    Unresolved(String),
}

impl SubcategoryScope {
    /// Resolve a selector (slug first, then id) among a category's subcategories.
    pub fn resolve<'a, I>(subcategories: I, selector: Option<&str>) -> Self
    where
        I: IntoIterator<Item = &'a Subcategory>,
        I::IntoIter: Clone,
    {
        let Some(selector) = selector else {
            return SubcategoryScope::All;
        };
        match resolve_slug_or_id(subcategories, selector) {
            Some(sub) => SubcategoryScope::Resolved(sub.subcategory_id.clone()),
            None => {
                tracing::debug!(selector, "subcategory selector did not resolve");
                SubcategoryScope::Unresolved(selector.to_string())
            }
        }
    }

    /// Whether the selector (if any) named a known subcategory.
    pub fn is_found(&self) -> bool {
        !matches!(self, SubcategoryScope::Unresolved(_))
    }

    pub fn admits(&self, product: &Product) -> bool {
        match self {
            SubcategoryScope::All => true,
            SubcategoryScope::Resolved(id) => {
                !product.subcategory_id.is_empty() && &product.subcategory_id == id
            }
            SubcategoryScope::Unresolved(raw) => &product.slug == raw,
        }
    }
}

/// Whether `product` satisfies every populated key of `selection`.
///
/// Keys match spec keys case-insensitively; the product's resolved value must
/// be one of the selected values.
pub fn matches_selection(product: &Product, selection: &FacetSelection) -> bool {
    selection.iter().all(|(facet_key, selected)| {
        product
            .spec_entry(facet_key)
            .map(|(_, value)| resolve_facet_value(value))
            .is_some_and(|value| !value.is_empty() && selected.contains(value))
    })
}

/// Products passing the subcategory scope and every facet constraint, in input order.
pub fn apply_filters<'a, I>(
    products: I,
    scope: &SubcategoryScope,
    selection: &FacetSelection,
) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|p| scope.admits(p) && matches_selection(p, selection))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::SpecValue;

    fn product(id: &str, category: &str, subcategory: &str, material: Option<&str>) -> Product {
        let p = Product::new(id, format!("{id}-slug"), id, category, subcategory);
        match material {
            Some(m) => p.with_spec("material", SpecValue::text(m)),
            None => p,
        }
    }

    fn subcategory(id: &str, slug: &str) -> Subcategory {
        Subcategory {
            subcategory_id: SubcategoryId::new(id),
            partition_key: "CATEGORY#c1".to_string(),
            slug: slug.to_string(),
            name: slug.to_string(),
            order: 0,
            is_active: true,
        }
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.product_id.to_string()).collect()
    }

    #[test]
    fn category_scope_keeps_input_order() {
        let products = vec![
            product("p3", "c1", "s1", None),
            product("p1", "c2", "s1", None),
            product("p2", "c1", "s1", None),
        ];

        let scoped = products_in_category(&products, &CategoryId::new("c1"));
        assert_eq!(ids(&scoped), vec!["p3", "p2"]);
        assert!(products_in_category(&products, &CategoryId::new("c9")).is_empty());
    }

    #[test]
    fn facet_selection_narrows_results() {
        let products = vec![
            product("p1", "c1", "s1", Some("Teak")),
            product("p2", "c1", "s1", Some("Steel")),
        ];
        let selection = FacetSelection::new().with("Material", "Teak");

        let filtered = apply_filters(&products, &SubcategoryScope::All, &selection);
        assert_eq!(ids(&filtered), vec!["p1"]);
    }

    #[test]
    fn products_without_the_key_are_excluded() {
        let products = vec![product("p1", "c1", "s1", None), product("p2", "c1", "s1", Some("Oak"))];
        let selection = FacetSelection::new().with("Material", "Oak");

        let filtered = apply_filters(&products, &SubcategoryScope::All, &selection);
        assert_eq!(ids(&filtered), vec!["p2"]);
    }

    #[test]
    fn values_within_a_key_are_alternatives() {
        let products = vec![
            product("p1", "c1", "s1", Some("Teak")),
            product("p2", "c1", "s1", Some("Steel")),
            product("p3", "c1", "s1", Some("Oak")),
        ];
        let selection = FacetSelection::new().with("Material", "Teak").with("Material", "Oak");

        let filtered = apply_filters(&products, &SubcategoryScope::All, &selection);
        assert_eq!(ids(&filtered), vec!["p1", "p3"]);
    }

    #[test]
    fn empty_resolved_value_never_matches() {
        let products = vec![Product::new("p1", "p1", "p1", "c1", "s1")
            .with_spec("color", SpecValue::pair("color", ""))];
        let selection = FacetSelection::new().with("Color", "");

        assert!(apply_filters(&products, &SubcategoryScope::All, &selection).is_empty());
    }

    #[test]
    fn subcategory_selector_resolves_by_slug_or_id() {
        let subs = vec![subcategory("sub-1", "recliners"), subcategory("sub-2", "sectionals")];

        assert_eq!(
            SubcategoryScope::resolve(&subs, Some("recliners")),
            SubcategoryScope::Resolved(SubcategoryId::new("sub-1"))
        );
        assert_eq!(
            SubcategoryScope::resolve(&subs, Some("sub-2")),
            SubcategoryScope::Resolved(SubcategoryId::new("sub-2"))
        );
        assert_eq!(SubcategoryScope::resolve(&subs, None), SubcategoryScope::All);

        let unresolved = SubcategoryScope::resolve(&subs, Some("mystery"));
        assert_eq!(unresolved, SubcategoryScope::Unresolved("mystery".to_string()));
        assert!(!unresolved.is_found());
    }

    #[test]
    fn resolved_subcategory_filters_by_id() {
        let products = vec![product("p1", "c1", "sub-1", None), product("p2", "c1", "sub-2", None)];
        let scope = SubcategoryScope::Resolved(SubcategoryId::new("sub-2"));

        assert_eq!(ids(&apply_filters(&products, &scope, &FacetSelection::new())), vec!["p2"]);
    }

    #[test]
    fn unresolved_subcategory_falls_back_to_product_slug() {
        let products = vec![product("p1", "c1", "sub-1", None), product("p2", "c1", "sub-2", None)];
        let scope = SubcategoryScope::Unresolved("p2-slug".to_string());

        assert_eq!(ids(&apply_filters(&products, &scope, &FacetSelection::new())), vec!["p2"]);
    }

    #[test]
    fn missing_references_never_match() {
        let mut orphan = product("p1", "", "", None);
        orphan.slug = "orphan".to_string();
        let products = vec![orphan];

        assert!(products_in_category(&products, &CategoryId::default()).is_empty());
        let scope = SubcategoryScope::Resolved(SubcategoryId::default());
        assert!(apply_filters(&products, &scope, &FacetSelection::new()).is_empty());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        const MATERIALS: [&str; 4] = ["Teak", "Oak", "Steel", ""];

        fn catalog() -> impl Strategy<Value = Vec<Product>> {
            proptest::collection::vec((0usize..5, 0usize..3), 0..25).prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (material, sub))| {
                        let material = MATERIALS.get(material).copied();
                        product(&format!("p{i}"), "c1", &format!("sub-{sub}"), material)
                    })
                    .collect()
            })
        }

        proptest! {
            /// Property: constraining a previously unconstrained key never grows the result.
            #[test]
            fn adding_a_constraint_is_monotone(products in catalog(), pick in 0usize..4) {
                let base = FacetSelection::new();
                let narrowed = base.toggle("Material", MATERIALS[pick]);

                let before = apply_filters(&products, &SubcategoryScope::All, &base);
                let after = apply_filters(&products, &SubcategoryScope::All, &narrowed);
                prop_assert!(after.len() <= before.len());
                prop_assert!(after.iter().all(|p| before.iter().any(|q| q.product_id == p.product_id)));
            }

            /// Property: filtering preserves relative input order.
            #[test]
            fn filtering_preserves_order(products in catalog(), pick in 0usize..3) {
                let selection = FacetSelection::new().with("material", MATERIALS[pick]);
                let filtered = apply_filters(&products, &SubcategoryScope::All, &selection);

                let positions: Vec<usize> = filtered
                    .iter()
                    .map(|p| products.iter().position(|q| q.product_id == p.product_id).unwrap())
                    .collect();
                prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }
}
