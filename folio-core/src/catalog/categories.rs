//! Category labels and the list-page filter
//!
//! The first label is always the sentinel "All", which means "no filter"
//! and is never assigned to a resource.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel label meaning "no category filter"
pub const ALL_CATEGORIES: &str = "All";

/// Ordered category labels, sentinel first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CategorySet {
    labels: Vec<String>,
}

impl CategorySet {
    /// Build a set from authored labels.
    ///
    /// The sentinel is moved to the front: it is prepended when missing
    /// and later repeats of it are dropped.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered = vec![ALL_CATEGORIES.to_string()];
        ordered.extend(
            labels
                .into_iter()
                .map(Into::into)
                .filter(|label: &String| label != ALL_CATEGORIES),
        );
        Self { labels: ordered }
    }

    /// All labels including the sentinel, in display order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Labels a resource may carry (sentinel excluded)
    pub fn assignable(&self) -> &[String] {
        &self.labels[1..]
    }

    /// Whether `label` may be assigned to a resource
    pub fn contains_assignable(&self, label: &str) -> bool {
        self.assignable().iter().any(|l| l == label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when only the sentinel is present
    pub fn is_empty(&self) -> bool {
        self.assignable().is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::new(Vec::<String>::new())
    }
}

impl From<Vec<String>> for CategorySet {
    fn from(labels: Vec<String>) -> Self {
        Self::new(labels)
    }
}

impl From<CategorySet> for Vec<String> {
    fn from(set: CategorySet) -> Self {
        set.labels
    }
}

/// Category filter selected on the list page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every resource
    #[default]
    All,
    /// Show resources whose category equals the label exactly
    Named(String),
}

impl CategoryFilter {
    /// Parse a tab label; the sentinel maps to `All`
    pub fn parse(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(label.to_string())
        }
    }

    /// Whether a resource with `category` passes this filter
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(label) => label == category,
        }
    }
}

impl From<Option<&str>> for CategoryFilter {
    fn from(label: Option<&str>) -> Self {
        label.map(CategoryFilter::parse).unwrap_or_default()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Named(label) => f.write_str(label),
        }
    }
}

#[cfg(test)]
mod category_tests {
    use super::*;

    #[test]
    fn test_sentinel_is_first() {
        let set = CategorySet::new(["Web Development", "All", "Social Media"]);
        assert_eq!(set.labels(), ["All", "Web Development", "Social Media"]);
        assert_eq!(set.assignable(), ["Web Development", "Social Media"]);
    }

    #[test]
    fn test_sentinel_is_not_assignable() {
        let set = CategorySet::new(["All", "SEO & Search"]);
        assert!(set.contains_assignable("SEO & Search"));
        assert!(!set.contains_assignable("All"));
        assert!(!set.contains_assignable("seo & search"));
    }

    #[test]
    fn test_empty_set_keeps_sentinel() {
        let set = CategorySet::default();
        assert_eq!(set.labels(), ["All"]);
        assert!(set.is_empty());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_yaml_list_roundtrip_normalizes() {
        let set: CategorySet = serde_yaml_ng::from_str("[Social Media, Digital Strategy]").unwrap();
        assert_eq!(set.labels()[0], ALL_CATEGORIES);
        let yaml = serde_yaml_ng::to_string(&set).unwrap();
        assert!(yaml.starts_with("- All"));
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Social Media"),
            CategoryFilter::Named("Social Media".to_string())
        );
        assert_eq!(CategoryFilter::from(None), CategoryFilter::All);
        assert!(CategoryFilter::All.matches("anything"));
        assert!(!CategoryFilter::parse("Social Media").matches("SEO & Search"));
    }
}
