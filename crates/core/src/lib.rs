//! `storefront-core`: catalog foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP, no storage).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{CatalogNode, Entity, resolve_slug_or_id, sorted_active};
pub use error::{DomainError, DomainResult};
pub use id::{BannerId, CategoryId, ProductId, SectionId, SessionId, SubcategoryId};
