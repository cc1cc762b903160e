//! Load the catalog from the storefront API and print a category page as JSON.
//!
//! Usage: `storefront <category> [subcategory] [Key=Value ...]`

use anyhow::{Context, Result, bail};
use serde_json::json;

use storefront_client::{BrowsingSession, ClientConfig, HttpCatalogSource, ViewState};
use storefront_filter::CategoryScope;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ClientConfig::from_env().context("reading client configuration")?;
    storefront_observability::init(config.log_format);

    let mut args = std::env::args().skip(1);
    let Some(category) = args.next() else {
        bail!("usage: storefront <category> [subcategory] [Key=Value ...]");
    };

    let mut subcategory = None;
    let mut filters = Vec::new();
    for arg in args {
        match arg.split_once('=') {
            Some((key, value)) => filters.push((key.to_string(), value.to_string())),
            None if subcategory.is_none() => subcategory = Some(arg),
            None => bail!("unexpected argument {arg:?}"),
        }
    }

    tracing::info!(api = %config.api_url, %category, "loading catalog");
    let source = HttpCatalogSource::new(&config).context("building HTTP client")?;

    let mut session = BrowsingSession::new();
    let view = session.view_mut();
    view.load(&source, &category, subcategory.as_deref()).await;
    for (key, value) in &filters {
        view.select_facet(key, value);
    }

    if let ViewState::Failed(err) = view.state() {
        bail!("loading catalog from {}: {err}", config.api_url);
    }

    let output = match view.view() {
        Some(CategoryScope::Found(page)) => json!({
            "category": page.category.name,
            "subcategoryFound": page.subcategory_found(),
            "activeFilters": page.active_filter_count,
            "facets": page.facets,
            "products": page.products.iter().map(|p| &p.name).collect::<Vec<_>>(),
        }),
        Some(CategoryScope::NotFound { selector }) => json!({ "notFound": selector }),
        None => bail!("no catalog loaded"),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
