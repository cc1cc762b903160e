//! Storefront client: catalog loading over the REST API and per-shopper
//! browsing state (category page, compare selection).

pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod source;
pub mod view;

pub use config::ClientConfig;
pub use error::{ConfigError, LoadError};
pub use http::HttpCatalogSource;
pub use session::BrowsingSession;
pub use source::{CatalogSource, StaticCatalogSource, load_catalog};
pub use view::{ApplyOutcome, CategoryViewController, LoadTicket, ViewState};
