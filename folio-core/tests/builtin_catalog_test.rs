//! Integration tests against the authored catalog shipped with the crate

mod common;

use folio_core::catalog::{CategoryFilter, ResourceCatalog, SnippetQuery, DEFAULT_RELATED_LIMIT};
use folio_core::config::SiteConfig;
use folio_core::validator::CatalogValidator;
use pretty_assertions::assert_eq;

fn builtin() -> ResourceCatalog {
    common::init_test_logging();
    ResourceCatalog::builtin().expect("built-in catalog parses")
}

fn slugs<'a>(resources: &[&'a folio_core::catalog::Resource]) -> Vec<&'a str> {
    resources.iter().map(|r| r.slug.as_str()).collect()
}

#[test]
fn test_builtin_catalog_is_clean() {
    let catalog = builtin();
    let report = SiteConfig::default().validator().validate(&catalog);

    assert!(report.is_clean(), "{}", report.error_summary());
    assert!(report.issues.is_empty(), "{:?}", report.issues);
}

#[test]
fn test_builtin_catalog_shape() {
    let catalog = builtin();

    assert_eq!(catalog.len(), 9);
    assert_eq!(
        catalog.categories().labels(),
        [
            "All",
            "Web Development",
            "SEO & Search",
            "Social Media",
            "Digital Strategy"
        ]
    );
    assert_eq!(
        catalog.resources()[0].slug,
        "essential-website-maintenance-checklist-2026"
    );
}

#[test]
fn test_every_slug_resolves_to_itself() {
    let catalog = builtin();
    for resource in &catalog {
        assert_eq!(catalog.get_by_slug(&resource.slug), Some(resource));
    }
    assert!(catalog.get_by_slug("does-not-exist").is_none());
}

#[test]
fn test_service_filter_on_builtin() {
    let catalog = builtin();

    assert_eq!(
        slugs(&catalog.for_service("web-consulting", None)),
        vec![
            "essential-website-maintenance-checklist-2026",
            "30-day-website-launch-action-plan",
            "choose-right-website-platform-small-business",
        ]
    );
    assert_eq!(
        slugs(&catalog.for_service("social-media", Some(2))),
        vec![
            "social-media-strategy-local-businesses",
            "complete-guide-google-business-profile",
        ]
    );
    assert!(catalog.for_service("brand-identity", None).is_empty());
    assert!(catalog.for_service("web-development", Some(0)).is_empty());
}

#[test]
fn test_related_backfills_underpopulated_category() {
    let catalog = builtin();
    let related = catalog.related(
        "build-strong-online-presence-small-business",
        Some("Digital Strategy"),
        DEFAULT_RELATED_LIMIT,
    );

    assert_eq!(
        slugs(&related),
        vec![
            "digital-marketing-trends-2026",
            "essential-website-maintenance-checklist-2026",
            "social-media-strategy-local-businesses",
        ]
    );
}

#[test]
fn test_related_stays_in_populated_category() {
    let catalog = builtin();
    let related = catalog.related(
        "choose-right-website-platform-small-business",
        Some("Web Development"),
        2,
    );

    assert_eq!(
        slugs(&related),
        vec![
            "essential-website-maintenance-checklist-2026",
            "30-day-website-launch-action-plan",
        ]
    );
}

#[test]
fn test_related_length_over_every_article() {
    let catalog = builtin();
    for resource in &catalog {
        for limit in [0, 1, 3, 8, 20] {
            let related = catalog.related(&resource.slug, Some(resource.category.as_str()), limit);
            assert_eq!(related.len(), limit.min(catalog.len() - 1));
            assert!(related.iter().all(|r| r.slug != resource.slug));
        }
    }
}

#[test]
fn test_list_page_filters() {
    let catalog = builtin();

    assert_eq!(catalog.filter_by_category(&CategoryFilter::All).len(), 9);
    assert_eq!(
        catalog
            .filter_by_category(&CategoryFilter::parse("SEO & Search"))
            .len(),
        2
    );
}

#[test]
fn test_neighbors_follow_catalog_order() {
    let catalog = builtin();

    let neighbors = catalog
        .neighbors("10-seo-tips-small-business-2026")
        .unwrap();
    assert_eq!(
        neighbors.previous.unwrap().slug,
        "30-day-website-launch-action-plan"
    );
    assert_eq!(neighbors.next.unwrap().slug, "digital-marketing-trends-2026");
}

#[test]
fn test_widget_never_renders_empty() {
    let catalog = builtin();

    let on_service_page = SnippetQuery::new().for_service("brand-identity");
    assert_eq!(catalog.snippets(&on_service_page).len(), 3);

    for resource in &catalog {
        let on_article = SnippetQuery::new()
            .excluding(resource.slug.clone())
            .in_category(resource.category.clone());
        let cards = catalog.snippets(&on_article);
        assert_eq!(cards.len(), 3);
        assert!(cards.iter().all(|r| r.slug != resource.slug));
    }
}

#[test]
fn test_checked_load_of_builtin_text() {
    let yaml = ResourceCatalog::builtin().unwrap().to_yaml().unwrap();
    let catalog = ResourceCatalog::from_yaml_checked(&yaml, &CatalogValidator::new()).unwrap();
    assert_eq!(catalog, builtin());
}
