//! Folio Catalog - Published resources and the queries pages run against them
//!
//! This module owns the authored article catalog for the agency site.
//! The catalog is built once at startup and never mutated afterwards;
//! every query borrows from it and returns records in catalog order.
//!
//! # Overview
//!
//! The catalog lets consumers:
//! - Look up a single resource by slug for its detail page
//! - Filter resources by category for the list page tabs
//! - Find resources linked to a service page
//! - Recommend related resources, preferring the current category
//! - Walk previous/next neighbors in authored order
//!
//! # Architecture
//!
//! ```text
//! content/resources.yaml   ← Authored records (embedded as the built-in catalog)
//!            │
//!            ▼
//!     ResourceCatalog      ← Immutable, ordered, shared by reference
//!            │
//!            ├── get_by_slug / filter_by_category / neighbors
//!            ├── for_service / related
//!            └── snippets  ← Cross-link widget selection with fallback
//! ```

mod categories;
mod error;
mod index;
mod resource;
mod snippets;

pub use categories::{CategoryFilter, CategorySet, ALL_CATEGORIES};
pub use error::CatalogError;
pub use index::{
    Neighbors, ResourceCatalog, CATALOG_API_VERSION, CATALOG_KIND, DEFAULT_RELATED_LIMIT,
};
pub use resource::{Resource, ResourceCta, ResourceSection};
pub use snippets::{SnippetQuery, DEFAULT_SNIPPET_LIMIT};
