//! REST catalog source.

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use storefront_catalog::{Banner, Category, Product, Section, Subcategory};

use crate::config::ClientConfig;
use crate::error::{ConfigError, LoadError};
use crate::source::CatalogSource;

/// [`CatalogSource`] backed by the storefront REST API.
///
/// Endpoints live under `{api_url}/api`: `/sections`, `/categories`,
/// `/subcategories`, `/products`, `/products/{slug}` and `/banners`. Every
/// collection endpoint answers with a plain JSON array.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpCatalogSource {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let base_url =
            Url::parse(&config.api_base()).map_err(|e| ConfigError::ApiUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::ApiUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Image endpoint of a product (served by the API, not embedded in JSON).
    pub fn product_image_url(&self, slug: &str) -> Url {
        self.endpoint(&["products", slug, "image"])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, LoadError> {
        let url = self.endpoint(segments);
        tracing::debug!(%url, "GET");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| LoadError::network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(%url, status = status.as_u16(), "catalog API returned an error");
            return Err(LoadError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| LoadError::network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| LoadError::parse(format!("{url}: {e}")))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn sections(&self) -> Result<Vec<Section>, LoadError> {
        self.get_json(&["sections"]).await
    }

    async fn categories(&self) -> Result<Vec<Category>, LoadError> {
        self.get_json(&["categories"]).await
    }

    async fn subcategories(&self) -> Result<Vec<Subcategory>, LoadError> {
        self.get_json(&["subcategories"]).await
    }

    async fn products(&self) -> Result<Vec<Product>, LoadError> {
        self.get_json(&["products"]).await
    }

    async fn banners(&self) -> Result<Vec<Banner>, LoadError> {
        self.get_json(&["banners"]).await
    }

    async fn product(&self, slug_or_id: &str) -> Result<Product, LoadError> {
        match self.get_json(&["products", slug_or_id]).await {
            Err(LoadError::Api { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(LoadError::not_found(format!("product {slug_or_id}")))
            }
            other => other,
        }
    }
}
