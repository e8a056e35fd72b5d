//! Cross-link widget selection
//!
//! Service pages, article pages, and the home page all show a short row of
//! resource cards. Which cards appear depends on what the page knows about
//! itself. The row is never empty while the catalog has other resources.

use super::{CategoryFilter, Resource, ResourceCatalog};

/// Cards shown by the widget when the caller does not say otherwise
pub const DEFAULT_SNIPPET_LIMIT: usize = 3;

/// What the embedding page knows about itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetQuery {
    /// Service page the widget sits on
    pub service: Option<String>,
    /// Preferred category
    pub category: Option<String>,
    /// Resource currently being viewed
    pub exclude_slug: Option<String>,
    /// Maximum number of cards
    pub limit: usize,
}

impl Default for SnippetQuery {
    fn default() -> Self {
        Self {
            service: None,
            category: None,
            exclude_slug: None,
            limit: DEFAULT_SNIPPET_LIMIT,
        }
    }
}

impl SnippetQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn excluding(mut self, slug: impl Into<String>) -> Self {
        self.exclude_slug = Some(slug.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl ResourceCatalog {
    /// Pick the cards for a cross-link widget
    ///
    /// Selection, first applicable wins:
    /// 1. service page: resources for that service, minus the excluded slug
    /// 2. article page: `related` for the excluded slug and category
    /// 3. named category (not "All"): resources in that category
    /// 4. otherwise: catalog order
    ///
    /// An empty selection falls back to catalog order minus the excluded slug.
    pub fn snippets(&self, query: &SnippetQuery) -> Vec<&Resource> {
        let exclude = query.exclude_slug.as_deref();
        let limit = query.limit;

        let selected: Vec<&Resource> = if let Some(service) = query.service.as_deref() {
            self.for_service(service, None)
                .into_iter()
                .filter(|r| Some(r.slug.as_str()) != exclude)
                .take(limit)
                .collect()
        } else if let Some(current) = exclude {
            self.related(current, query.category.as_deref(), limit)
        } else {
            match CategoryFilter::from(query.category.as_deref()) {
                CategoryFilter::Named(label) => self
                    .filter_by_category(&CategoryFilter::Named(label))
                    .into_iter()
                    .take(limit)
                    .collect(),
                CategoryFilter::All => self.iter().take(limit).collect(),
            }
        };

        if !selected.is_empty() {
            return selected;
        }

        self.iter()
            .filter(|r| Some(r.slug.as_str()) != exclude)
            .take(limit)
            .collect()
    }
}
