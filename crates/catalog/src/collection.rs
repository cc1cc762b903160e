//! Curated product listings ("New Arrivals", "Best Sellers", ...).

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use storefront_core::DomainError;

use crate::product::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCollection {
    #[default]
    All,
    NewArrivals,
    BestSellers,
    SpecialOffers,
    Trending,
    Recommended,
}

impl ProductCollection {
    pub const ALL: [ProductCollection; 6] = [
        ProductCollection::All,
        ProductCollection::NewArrivals,
        ProductCollection::BestSellers,
        ProductCollection::SpecialOffers,
        ProductCollection::Trending,
        ProductCollection::Recommended,
    ];

    /// Query-string token (`?filter=...`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCollection::All => "all",
            ProductCollection::NewArrivals => "new-arrivals",
            ProductCollection::BestSellers => "best-sellers",
            ProductCollection::SpecialOffers => "special-offers",
            ProductCollection::Trending => "trending",
            ProductCollection::Recommended => "recommended",
        }
    }

    /// Lenient parse used for route parameters: unknown or missing tokens show everything.
    pub fn from_query(token: Option<&str>) -> Self {
        token.and_then(|t| t.parse().ok()).unwrap_or_default()
    }

    pub fn title(&self) -> &'static str {
        match self {
            ProductCollection::All => "All Products",
            ProductCollection::NewArrivals => "New Arrivals",
            ProductCollection::BestSellers => "Best Sellers",
            ProductCollection::SpecialOffers => "Special Offers",
            ProductCollection::Trending => "Trending Items",
            ProductCollection::Recommended => "Recommended For You",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ProductCollection::All => "Browse our extensive collection of furniture and appliances.",
            ProductCollection::NewArrivals => "Check out the latest additions to our collection.",
            ProductCollection::BestSellers => "Our most popular products loved by customers.",
            ProductCollection::SpecialOffers => "Grab these deals before they're gone.",
            ProductCollection::Trending => "See what's popular right now.",
            ProductCollection::Recommended => "Handpicked items we think you'll love.",
        }
    }

    pub fn includes(&self, product: &Product) -> bool {
        if !product.is_active {
            return false;
        }
        match self {
            ProductCollection::All => true,
            ProductCollection::NewArrivals => product.is_new_arrival,
            ProductCollection::BestSellers => product.is_best_seller,
            ProductCollection::SpecialOffers => product.is_on_offer,
            ProductCollection::Trending => product.is_trending,
            ProductCollection::Recommended => product.is_recommended,
        }
    }

    /// Members of the collection, in input order.
    pub fn select<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.includes(p)).collect()
    }
}

impl FromStr for ProductCollection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductCollection::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown product collection: {s}")))
    }
}

impl core::fmt::Display for ProductCollection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
