//! Resource catalog construction and queries
//!
//! The catalog document (resources.yaml) lists the category labels and
//! every published resource in authored order. Authored order is
//! meaningful: it drives previous/next navigation and every query
//! returns records in it.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use super::{CatalogError, CategoryFilter, CategorySet, Resource};
use crate::validator::CatalogValidator;

/// Expected `apiVersion` of a catalog document
pub const CATALOG_API_VERSION: &str = "folio.dev/v1";

/// Expected `kind` of a catalog document
pub const CATALOG_KIND: &str = "ResourceCatalog";

/// Number of related resources shown under an article
pub const DEFAULT_RELATED_LIMIT: usize = 3;

/// Authored content shipped with the crate
const BUILTIN_CATALOG: &str = include_str!("../../content/resources.yaml");

/// On-disk shape of a catalog document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument {
    api_version: String,
    kind: String,
    #[serde(default)]
    categories: CategorySet,
    #[serde(default)]
    resources: Vec<Resource>,
}

/// Immutable, ordered collection of resources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceCatalog {
    categories: CategorySet,
    resources: Vec<Resource>,
}

/// Previous/next resources around a given one, by catalog position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors<'a> {
    pub previous: Option<&'a Resource>,
    pub next: Option<&'a Resource>,
}

impl ResourceCatalog {
    /// Build a catalog from already-authored records. No integrity check is run.
    pub fn new(categories: CategorySet, resources: Vec<Resource>) -> Self {
        Self {
            categories,
            resources,
        }
    }

    /// The catalog embedded in this crate
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_yaml(BUILTIN_CATALOG)
    }

    /// Parse a catalog document without checking its contents
    pub fn from_yaml(content: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_yaml_ng::from_str(content)
            .map_err(|source| CatalogError::Parse { source })?;

        if document.api_version != CATALOG_API_VERSION || document.kind != CATALOG_KIND {
            return Err(CatalogError::UnsupportedDocument {
                api_version: document.api_version,
                kind: document.kind,
            });
        }

        debug!(
            resources = document.resources.len(),
            categories = document.categories.len(),
            "Parsed resource catalog"
        );

        Ok(Self::new(document.categories, document.resources))
    }

    /// Parse a catalog document and reject it if the integrity check finds errors
    pub fn from_yaml_checked(
        content: &str,
        validator: &CatalogValidator,
    ) -> Result<Self, CatalogError> {
        Self::from_yaml(content)?.checked(validator)
    }

    /// Load a catalog document from disk without checking its contents
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&content)
    }

    /// Load a catalog document from disk and run the integrity check
    pub fn from_file_checked(
        path: &Path,
        validator: &CatalogValidator,
    ) -> Result<Self, CatalogError> {
        Self::from_file(path)?.checked(validator)
    }

    /// Run the integrity check, keeping the catalog only if it has no errors
    pub fn checked(self, validator: &CatalogValidator) -> Result<Self, CatalogError> {
        let report = validator.validate(&self);
        if report.is_clean() {
            Ok(self)
        } else {
            Err(CatalogError::Integrity { report })
        }
    }

    /// Serialize to a catalog document
    pub fn to_yaml(&self) -> Result<String, CatalogError> {
        let document = CatalogDocument {
            api_version: CATALOG_API_VERSION.to_string(),
            kind: CATALOG_KIND.to_string(),
            categories: self.categories.clone(),
            resources: self.resources.clone(),
        };
        serde_yaml_ng::to_string(&document).map_err(|source| CatalogError::Serialize { source })
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// All resources in catalog order
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Resource> {
        self.resources.iter()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Find a resource by exact slug. The first match wins if slugs repeat.
    pub fn get_by_slug(&self, slug: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.slug == slug)
    }

    /// Index of the first resource with `slug`
    pub fn position(&self, slug: &str) -> Option<usize> {
        self.resources.iter().position(|r| r.slug == slug)
    }

    /// Previous and next resources by catalog position
    pub fn neighbors(&self, slug: &str) -> Option<Neighbors<'_>> {
        let index = self.position(slug)?;
        Some(Neighbors {
            previous: index.checked_sub(1).and_then(|i| self.resources.get(i)),
            next: self.resources.get(index + 1),
        })
    }

    /// Resources passing the list-page category filter
    pub fn filter_by_category(&self, filter: &CategoryFilter) -> Vec<&Resource> {
        self.resources
            .iter()
            .filter(|r| filter.matches(&r.category))
            .collect()
    }

    /// Resources linked to a service, optionally truncated to `limit`
    ///
    /// The service id is opaque; no registry lookup happens here.
    pub fn for_service(&self, service: &str, limit: Option<usize>) -> Vec<&Resource> {
        let matches = self.resources.iter().filter(|r| r.relates_to(service));
        match limit {
            Some(limit) => matches.take(limit).collect(),
            None => matches.collect(),
        }
    }

    /// Recommend up to `limit` resources other than `current_slug`
    ///
    /// Without a category, this is catalog order. With a category, resources
    /// in that category come first; other categories only backfill when the
    /// preferred category has fewer than `limit` candidates.
    pub fn related(
        &self,
        current_slug: &str,
        category: Option<&str>,
        limit: usize,
    ) -> Vec<&Resource> {
        let candidates = self.resources.iter().filter(|r| r.slug != current_slug);

        let Some(category) = category else {
            return candidates.take(limit).collect();
        };

        let (preferred, rest): (Vec<&Resource>, Vec<&Resource>) =
            candidates.partition(|r| r.in_category(category));

        if preferred.len() >= limit {
            return preferred.into_iter().take(limit).collect();
        }

        preferred.into_iter().chain(rest).take(limit).collect()
    }

    /// Distinct service ids referenced by resources, in first-seen order
    pub fn service_ids(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for service in self.resources.iter().flat_map(|r| &r.related_services) {
            if !seen.contains(&service.as_str()) {
                seen.push(service);
            }
        }
        seen
    }
}

impl<'a> IntoIterator for &'a ResourceCatalog {
    type Item = &'a Resource;
    type IntoIter = std::slice::Iter<'a, Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.iter()
    }
}

#[cfg(test)]
mod index_tests {
    use super::*;

    fn sample_catalog_yaml() -> &'static str {
        r#"
apiVersion: folio.dev/v1
kind: ResourceCatalog
categories: [All, Web Development, Social Media]
resources:
  - slug: maintenance-checklist
    title: Maintenance Checklist
    metaTitle: Maintenance Checklist | Test
    metaDescription: Keep your site healthy
    category: Web Development
    excerpt: Weekly and monthly tasks
    image: https://example.com/a.png
    readTime: 8 min read
    publishDate: January 15, 2026
    tags: [Maintenance]
    relatedServices: [web-development, web-consulting]
    sections:
      - heading: Weekly
        content: Quick checks.
        list: [Back up files]
    cta:
      heading: Need help?
      description: We maintain sites.
      buttonText: Get a plan
      buttonHref: /contact
  - slug: social-plan
    title: Social Plan
    metaTitle: Social Plan | Test
    metaDescription: Thirty days of posts
    category: Social Media
    excerpt: A month of posting
    image: https://example.com/b.png
    readTime: 6 min read
    publishDate: February 1, 2026
    relatedServices: [social-media]
    cta:
      heading: Want more reach?
      description: We run campaigns.
      buttonText: Start now
      buttonHref: /free-consultation
"#
    }

    #[test]
    fn test_parse_catalog() {
        let catalog = ResourceCatalog::from_yaml(sample_catalog_yaml()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.categories().assignable().len(), 2);
        assert!(catalog.resources()[1].tags.is_empty());
        assert!(catalog.resources()[1].sections.is_empty());
    }

    #[test]
    fn test_rejects_unknown_document_kind() {
        let yaml = "apiVersion: folio.dev/v1\nkind: ServiceCatalog\n";
        let err = ResourceCatalog::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedDocument { .. }));
        assert!(err.to_string().contains("ServiceCatalog"));

        let yaml = "apiVersion: folio.dev/v2\nkind: ResourceCatalog\n";
        assert!(ResourceCatalog::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_rejects_missing_fields() {
        let yaml = r#"
apiVersion: folio.dev/v1
kind: ResourceCatalog
resources:
  - slug: only-a-slug
"#;
        let err = ResourceCatalog::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_yaml_roundtrip_preserves_order() {
        let catalog = ResourceCatalog::from_yaml(sample_catalog_yaml()).unwrap();
        let reparsed = ResourceCatalog::from_yaml(&catalog.to_yaml().unwrap()).unwrap();
        assert_eq!(catalog, reparsed);
    }

    #[test]
    fn test_get_by_slug_is_exact() {
        let catalog = ResourceCatalog::from_yaml(sample_catalog_yaml()).unwrap();
        assert_eq!(
            catalog.get_by_slug("social-plan").unwrap().title,
            "Social Plan"
        );
        assert!(catalog.get_by_slug("Social-Plan").is_none());
        assert!(catalog.get_by_slug("").is_none());
    }

    #[test]
    fn test_neighbors() {
        let catalog = ResourceCatalog::from_yaml(sample_catalog_yaml()).unwrap();

        let first = catalog.neighbors("maintenance-checklist").unwrap();
        assert!(first.previous.is_none());
        assert_eq!(first.next.unwrap().slug, "social-plan");

        let last = catalog.neighbors("social-plan").unwrap();
        assert_eq!(last.previous.unwrap().slug, "maintenance-checklist");
        assert!(last.next.is_none());

        assert!(catalog.neighbors("missing").is_none());
    }

    #[test]
    fn test_service_ids_first_seen_order() {
        let catalog = ResourceCatalog::from_yaml(sample_catalog_yaml()).unwrap();
        assert_eq!(
            catalog.service_ids(),
            vec!["web-development", "web-consulting", "social-media"]
        );
    }
}
