//! Catalog domain module.
//!
//! This crate models the storefront catalog exactly as the API delivers it
//! (sections → categories → subcategories → products, plus banners) and
//! answers navigation queries over a read-only snapshot. No IO happens here.

pub mod banner;
pub mod category;
pub mod collection;
pub mod product;
pub mod search;
pub mod section;
pub mod snapshot;

mod serde_ext;

pub use banner::{
    Banner, BannerPosition, RedirectType, banners_at, banners_for_category, banners_for_subcategory,
};
pub use category::{Category, Subcategory};
pub use collection::ProductCollection;
pub use product::{Product, SpecPair, SpecValue, resolve_facet_value};
pub use search::{MAX_CATEGORY_HITS, MAX_PRODUCT_HITS, MAX_SUBCATEGORY_HITS, SearchResults, SubcategoryHit};
pub use section::Section;
pub use snapshot::Catalog;
