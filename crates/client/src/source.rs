//! Where catalog data comes from.

use async_trait::async_trait;

use storefront_catalog::{Banner, Catalog, Category, Product, Section, Subcategory};

use crate::error::LoadError;

/// Read access to the catalog API.
///
/// One method per REST collection; implementations return records in the
/// order the backend delivered them.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn sections(&self) -> Result<Vec<Section>, LoadError>;

    async fn categories(&self) -> Result<Vec<Category>, LoadError>;

    async fn subcategories(&self) -> Result<Vec<Subcategory>, LoadError>;

    async fn products(&self) -> Result<Vec<Product>, LoadError>;

    async fn banners(&self) -> Result<Vec<Banner>, LoadError>;

    /// Single product by slug or id. Unknown products are `LoadError::NotFound`.
    async fn product(&self, slug_or_id: &str) -> Result<Product, LoadError>;
}

/// Fetch every collection concurrently and freeze them into one snapshot.
///
/// The first failure aborts the load; nothing is retried.
pub async fn load_catalog<S>(source: &S) -> Result<Catalog, LoadError>
where
    S: CatalogSource + ?Sized,
{
    let loaded = tokio::try_join!(
        source.sections(),
        source.categories(),
        source.subcategories(),
        source.products(),
        source.banners(),
    );

    match loaded {
        Ok((sections, categories, subcategories, products, banners)) => {
            tracing::info!(
                sections = sections.len(),
                categories = categories.len(),
                subcategories = subcategories.len(),
                products = products.len(),
                banners = banners.len(),
                "catalog loaded"
            );
            Ok(Catalog::new(sections, categories, subcategories, products, banners))
        }
        Err(err) => {
            tracing::warn!(error = %err, "catalog load failed");
            Err(err)
        }
    }
}

/// In-memory source over a fixed snapshot.
#[derive(Debug, Clone)]
pub struct StaticCatalogSource {
    catalog: Catalog,
}

impl StaticCatalogSource {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn sections(&self) -> Result<Vec<Section>, LoadError> {
        Ok(self.catalog.sections.clone())
    }

    async fn categories(&self) -> Result<Vec<Category>, LoadError> {
        Ok(self.catalog.categories.clone())
    }

    async fn subcategories(&self) -> Result<Vec<Subcategory>, LoadError> {
        Ok(self.catalog.subcategories.clone())
    }

    async fn products(&self) -> Result<Vec<Product>, LoadError> {
        Ok(self.catalog.products.clone())
    }

    async fn banners(&self) -> Result<Vec<Banner>, LoadError> {
        Ok(self.catalog.banners.clone())
    }

    async fn product(&self, slug_or_id: &str) -> Result<Product, LoadError> {
        self.catalog
            .find_product(slug_or_id)
            .cloned()
            .ok_or_else(|| LoadError::not_found(format!("product {slug_or_id}")))
    }
}
