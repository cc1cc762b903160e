//! Catalog filtering.
//!
//! Pure derivations over a catalog snapshot: which products belong to a
//! category, which facet values the shopper can pick from, and which products
//! survive the current subcategory + facet selection. Nothing here caches or
//! mutates its inputs; callers memoize if they want to.

pub mod engine;
pub mod facets;
pub mod selection;
pub mod view;

pub use engine::{SubcategoryScope, apply_filters, matches_selection, products_in_category};
pub use facets::{FacetVocabulary, available_facets, display_key};
pub use selection::{FacetSelection, toggle_facet_value};
pub use view::{CategoryScope, CategoryView};
