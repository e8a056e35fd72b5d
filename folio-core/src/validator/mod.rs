//! Catalog Validator - integrity checks for authored resource data
//!
//! Runs once after a catalog is built and before it is handed to pages.
//! The check is separate from the queries: a catalog that fails it still
//! answers every query, so tests and tools may skip it.

use tracing::{debug, info, warn};

pub mod rules;


use crate::catalog::ResourceCatalog;
use rules::*;

/// Severity levels for integrity issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,   // Queries will misbehave for this record
    Warning, // Likely an authoring mistake
    Info,    // Harmless, but worth a look
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

/// A problem found in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityIssue {
    /// Severity of the issue
    pub severity: Severity,
    /// Identifier of the rule that raised it
    pub rule_id: &'static str,
    /// Human-readable description
    pub message: String,
    /// Resource the issue belongs to, if any
    pub slug: Option<String>,
}

/// Context shared by all rules during one run
#[derive(Debug, Clone, Default)]
pub struct RuleContext {
    /// Service ids pages exist for. Empty means "unknown, skip the check".
    pub known_services: Vec<String>,
}

/// Trait for integrity rules
pub trait IntegrityRule: Send + Sync {
    /// Check the catalog for issues
    fn check(&self, catalog: &ResourceCatalog, context: &RuleContext) -> Vec<IntegrityIssue>;

    /// Rule identifier
    fn rule_id(&self) -> &'static str;

    /// Rule description
    fn description(&self) -> &'static str;
}

/// Result of one validation run
#[derive(Debug, Clone, Default)]
pub struct IntegrityReport {
    pub issues: Vec<IntegrityIssue>,
    pub error_count: usize,
    pub warning_count: usize,
}

impl IntegrityReport {
    /// No error-level issues
    pub fn is_clean(&self) -> bool {
        self.error_count == 0
    }

    pub fn errors(&self) -> impl Iterator<Item = &IntegrityIssue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    /// One line per error-level issue
    pub fn error_summary(&self) -> String {
        self.errors()
            .map(|issue| match &issue.slug {
                Some(slug) => format!("  [{}] {}: {}", issue.rule_id, slug, issue.message),
                None => format!("  [{}] {}", issue.rule_id, issue.message),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Main catalog validator
pub struct CatalogValidator {
    rules: Vec<Box<dyn IntegrityRule>>,
    context: RuleContext,
}

impl CatalogValidator {
    /// Create validator with the default rules
    pub fn new() -> Self {
        let rules: Vec<Box<dyn IntegrityRule>> = vec![
            Box::new(UniqueSlugRule),
            Box::new(SlugFormatRule),
            Box::new(CategoryMembershipRule),
            Box::new(RequiredFieldsRule),
            Box::new(ServiceReferenceRule),
            Box::new(EmptyListRule),
            Box::new(DuplicateTagRule),
            Box::new(UnusedCategoryRule),
        ];

        Self {
            rules,
            context: RuleContext::default(),
        }
    }

    /// Also check related-service ids against the services the site publishes
    pub fn with_known_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.context.known_services = services.into_iter().map(Into::into).collect();
        self
    }

    /// Rules in the order they run
    pub fn rules(&self) -> impl Iterator<Item = &dyn IntegrityRule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    /// Run every rule over the catalog
    pub fn validate(&self, catalog: &ResourceCatalog) -> IntegrityReport {
        info!("Validating catalog of {} resources", catalog.len());

        let mut issues = Vec::new();
        for rule in &self.rules {
            let rule_issues = rule.check(catalog, &self.context);
            debug!(rule = rule.rule_id(), found = rule_issues.len(), "Rule checked");
            issues.extend(rule_issues);
        }

        let error_count = issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count();
        let warning_count = issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count();

        if error_count > 0 {
            warn!(error_count, warning_count, "Catalog integrity check failed");
        }

        IntegrityReport {
            issues,
            error_count,
            warning_count,
        }
    }
}

impl Default for CatalogValidator {
    fn default() -> Self {
        Self::new()
    }
}
