//! Integrity rules for the resource catalog

use super::{IntegrityIssue, IntegrityRule, RuleContext, Severity};
use crate::catalog::{Resource, ResourceCatalog};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Lowercase alphanumeric words joined by single hyphens
static SLUG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid"));

fn issue(
    rule: &dyn IntegrityRule,
    severity: Severity,
    resource: Option<&Resource>,
    message: String,
) -> IntegrityIssue {
    IntegrityIssue {
        severity,
        rule_id: rule.rule_id(),
        message,
        slug: resource.map(|r| r.slug.clone()),
    }
}

/// Rule: Slugs must be unique across the catalog
pub struct UniqueSlugRule;

impl IntegrityRule for UniqueSlugRule {
    fn rule_id(&self) -> &'static str {
        "unique-slug"
    }

    fn description(&self) -> &'static str {
        "Every resource must have a unique slug"
    }

    fn check(&self, catalog: &ResourceCatalog, _context: &RuleContext) -> Vec<IntegrityIssue> {
        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        let mut issues = Vec::new();

        for (position, resource) in catalog.iter().enumerate() {
            match first_seen.get(resource.slug.as_str()).copied() {
                Some(first) => issues.push(issue(
                    self,
                    Severity::Error,
                    Some(resource),
                    format!(
                        "Duplicate slug at position {position}; lookups will always return the resource at position {first}"
                    ),
                )),
                None => {
                    first_seen.insert(resource.slug.as_str(), position);
                }
            }
        }

        issues
    }
}

/// Rule: Slugs must be URL-safe
pub struct SlugFormatRule;

impl IntegrityRule for SlugFormatRule {
    fn rule_id(&self) -> &'static str {
        "slug-format"
    }

    fn description(&self) -> &'static str {
        "Slugs must be lowercase alphanumeric words separated by single hyphens"
    }

    fn check(&self, catalog: &ResourceCatalog, _context: &RuleContext) -> Vec<IntegrityIssue> {
        catalog
            .iter()
            .filter(|r| !SLUG_PATTERN.is_match(&r.slug))
            .map(|r| {
                issue(
                    self,
                    Severity::Error,
                    Some(r),
                    format!("Slug '{}' is not URL-safe", r.slug),
                )
            })
            .collect()
    }
}

/// Rule: Category must be one of the assignable labels
pub struct CategoryMembershipRule;

impl IntegrityRule for CategoryMembershipRule {
    fn rule_id(&self) -> &'static str {
        "category-membership"
    }

    fn description(&self) -> &'static str {
        "Resource category must be one of the listed labels (excluding \"All\")"
    }

    fn check(&self, catalog: &ResourceCatalog, _context: &RuleContext) -> Vec<IntegrityIssue> {
        let categories = catalog.categories();

        catalog
            .iter()
            .filter(|r| !categories.contains_assignable(&r.category))
            .map(|r| {
                issue(
                    self,
                    Severity::Error,
                    Some(r),
                    format!(
                        "Category '{}' is not one of {:?}",
                        r.category,
                        categories.assignable()
                    ),
                )
            })
            .collect()
    }
}

/// Rule: Display strings and the call to action must be filled in
pub struct RequiredFieldsRule;

impl IntegrityRule for RequiredFieldsRule {
    fn rule_id(&self) -> &'static str {
        "required-fields"
    }

    fn description(&self) -> &'static str {
        "Display fields and call-to-action fields must not be blank"
    }

    fn check(&self, catalog: &ResourceCatalog, _context: &RuleContext) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();

        for resource in catalog.iter() {
            let fields = [
                ("title", &resource.title),
                ("metaTitle", &resource.meta_title),
                ("metaDescription", &resource.meta_description),
                ("excerpt", &resource.excerpt),
                ("image", &resource.image),
                ("readTime", &resource.read_time),
                ("publishDate", &resource.publish_date),
                ("cta.heading", &resource.cta.heading),
                ("cta.description", &resource.cta.description),
                ("cta.buttonText", &resource.cta.button_text),
                ("cta.buttonHref", &resource.cta.button_href),
            ];

            for (name, value) in fields {
                if value.trim().is_empty() {
                    issues.push(issue(
                        self,
                        Severity::Error,
                        Some(resource),
                        format!("Field '{name}' is blank"),
                    ));
                }
            }

            if resource.sections.is_empty() {
                issues.push(issue(
                    self,
                    Severity::Warning,
                    Some(resource),
                    "Resource has no sections; its detail page will have no body".to_string(),
                ));
            }
        }

        issues
    }
}

/// Rule: Related services should have pages on the site
pub struct ServiceReferenceRule;

impl IntegrityRule for ServiceReferenceRule {
    fn rule_id(&self) -> &'static str {
        "service-reference"
    }

    fn description(&self) -> &'static str {
        "Related service ids should match a published service page"
    }

    fn check(&self, catalog: &ResourceCatalog, context: &RuleContext) -> Vec<IntegrityIssue> {
        if context.known_services.is_empty() {
            return Vec::new();
        }

        let mut issues = Vec::new();
        for resource in catalog.iter() {
            for service in &resource.related_services {
                if !context.known_services.contains(service) {
                    issues.push(issue(
                        self,
                        Severity::Warning,
                        Some(resource),
                        format!("Related service '{service}' has no service page"),
                    ));
                }
            }
        }

        issues
    }
}

/// Rule: An explicit empty bullet list renders the same as no list
pub struct EmptyListRule;

impl IntegrityRule for EmptyListRule {
    fn rule_id(&self) -> &'static str {
        "empty-list"
    }

    fn description(&self) -> &'static str {
        "Sections with an empty bullet list render no list at all"
    }

    fn check(&self, catalog: &ResourceCatalog, _context: &RuleContext) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();

        for resource in catalog.iter() {
            for section in &resource.sections {
                if matches!(&section.list, Some(list) if list.is_empty()) {
                    issues.push(issue(
                        self,
                        Severity::Info,
                        Some(resource),
                        format!(
                            "Section '{}' has an empty list; remove it or add bullets",
                            section.heading
                        ),
                    ));
                }
            }
        }

        issues
    }
}

/// Rule: Repeated tags carry no meaning
pub struct DuplicateTagRule;

impl IntegrityRule for DuplicateTagRule {
    fn rule_id(&self) -> &'static str {
        "duplicate-tag"
    }

    fn description(&self) -> &'static str {
        "Tags should not repeat within a resource"
    }

    fn check(&self, catalog: &ResourceCatalog, _context: &RuleContext) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();

        for resource in catalog.iter() {
            for (i, tag) in resource.tags.iter().enumerate() {
                if resource.tags[..i].contains(tag) {
                    issues.push(issue(
                        self,
                        Severity::Info,
                        Some(resource),
                        format!("Tag '{tag}' appears more than once"),
                    ));
                }
            }
        }

        issues
    }
}

/// Rule: Every category tab should have something behind it
pub struct UnusedCategoryRule;

impl IntegrityRule for UnusedCategoryRule {
    fn rule_id(&self) -> &'static str {
        "unused-category"
    }

    fn description(&self) -> &'static str {
        "Category labels with no resources show an empty list page"
    }

    fn check(&self, catalog: &ResourceCatalog, _context: &RuleContext) -> Vec<IntegrityIssue> {
        catalog
            .categories()
            .assignable()
            .iter()
            .filter(|label| !catalog.iter().any(|r| r.in_category(label)))
            .map(|label| {
                issue(
                    self,
                    Severity::Info,
                    None,
                    format!("Category '{label}' has no resources"),
                )
            })
            .collect()
    }
}
