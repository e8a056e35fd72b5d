//! Test helper functions for integration tests
//!
//! Shared across test files using the tests/common/ pattern.

#![allow(dead_code)]

use std::sync::Once;

/// Initialize logging for tests (only once per test run)
static INIT: Once = Once::new();

pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// A minimal, valid catalog document with the given resources block
pub fn catalog_yaml(resources: &str) -> String {
    format!(
        "apiVersion: folio.dev/v1\nkind: ResourceCatalog\ncategories: [All, Web Development, Social Media]\nresources:\n{resources}"
    )
}

/// One resource entry for `catalog_yaml`
pub fn resource_yaml(slug: &str, category: &str, services: &[&str]) -> String {
    format!(
        r#"  - slug: {slug}
    title: Title for {slug}
    metaTitle: Meta for {slug}
    metaDescription: Description for {slug}
    category: {category}
    excerpt: Excerpt for {slug}
    image: https://example.com/{slug}.png
    readTime: 5 min read
    publishDate: January 1, 2026
    relatedServices: [{services}]
    sections:
      - heading: Intro
        content: Body text.
    cta:
      heading: Need help?
      description: We can help.
      buttonText: Contact
      buttonHref: /contact
"#,
        services = services.join(", ")
    )
}
