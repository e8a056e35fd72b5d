//! Resource record shapes
//!
//! A resource is one published article or guide. Records carry display
//! strings only; read time and publish date are authored text and are
//! never parsed.

use serde::{Deserialize, Serialize};

/// One published article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// URL-safe unique identifier, stable once published
    pub slug: String,

    /// Display title
    pub title: String,

    /// Title used in the document head
    pub meta_title: String,

    /// Description used in the document head
    pub meta_description: String,

    /// One of the assignable category labels
    pub category: String,

    /// Short summary shown on cards
    pub excerpt: String,

    /// Cover image URI
    pub image: String,

    /// Authored read time, e.g. "8 min read"
    pub read_time: String,

    /// Authored publish date, e.g. "January 15, 2026"
    pub publish_date: String,

    /// Tags in display order
    #[serde(default)]
    pub tags: Vec<String>,

    /// Service ids this resource supports (order irrelevant)
    #[serde(default)]
    pub related_services: Vec<String>,

    /// Article body in display order
    #[serde(default)]
    pub sections: Vec<ResourceSection>,

    /// Call to action shown under the article
    pub cta: ResourceCta,
}

/// A heading, a paragraph, and optional bullets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSection {
    pub heading: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<String>>,
}

/// Call-to-action block embedded in a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCta {
    pub heading: String,
    pub description: String,
    pub button_text: String,
    pub button_href: String,
}

impl Resource {
    /// Site-relative path of the detail page
    pub fn path(&self) -> String {
        format!("/resources/{}", self.slug)
    }

    /// Whether this resource is linked to the given service id
    pub fn relates_to(&self, service: &str) -> bool {
        self.related_services.iter().any(|s| s == service)
    }

    /// Whether this resource belongs to the given category label
    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }

    /// Tags as a comma-separated string
    pub fn tags_display(&self) -> String {
        self.tags.join(", ")
    }
}

impl ResourceSection {
    /// Bullets to render. An absent list and an empty list both render nothing.
    pub fn bullets(&self) -> &[String] {
        self.list.as_deref().unwrap_or(&[])
    }

    pub fn has_bullets(&self) -> bool {
        !self.bullets().is_empty()
    }
}
