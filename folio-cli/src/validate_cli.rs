//! Folio integrity report command

use anyhow::{bail, Result};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use folio_core::catalog::ResourceCatalog;
use folio_core::config::SiteConfig;
use folio_core::validator::{CatalogValidator, IntegrityReport};

/// Table row for integrity issues
#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "Severity")]
    severity: &'static str,
    #[tabled(rename = "Rule")]
    rule_id: &'static str,
    #[tabled(rename = "Resource")]
    slug: String,
    #[tabled(rename = "Message")]
    message: String,
}

/// Table row for the rule listing
#[derive(Tabled)]
struct RuleRow {
    #[tabled(rename = "Rule")]
    rule_id: &'static str,
    #[tabled(rename = "Description")]
    description: &'static str,
}

fn rule_rows(validator: &CatalogValidator) -> Vec<RuleRow> {
    validator
        .rules()
        .map(|rule| RuleRow {
            rule_id: rule.rule_id(),
            description: rule.description(),
        })
        .collect()
}

/// Print the rules `execute` would run
pub fn list_rules(config: &SiteConfig) -> Result<()> {
    let rows = rule_rows(&config.validator());
    let table = Table::new(&rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string();

    println!("{table}");
    Ok(())
}

fn report_json(report: &IntegrityReport) -> serde_json::Value {
    let issues: Vec<serde_json::Value> = report
        .issues
        .iter()
        .map(|issue| {
            serde_json::json!({
                "severity": issue.severity.as_str(),
                "ruleId": issue.rule_id,
                "slug": issue.slug,
                "message": issue.message,
            })
        })
        .collect();

    serde_json::json!({
        "errors": report.error_count,
        "warnings": report.warning_count,
        "issues": issues,
    })
}

pub fn execute(catalog: &ResourceCatalog, config: &SiteConfig, json_output: bool) -> Result<()> {
    let report = config.validator().validate(catalog);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report_json(&report))?);
    } else if report.issues.is_empty() {
        println!("Catalog OK: {} resources, no issues.", catalog.len());
    } else {
        let rows: Vec<IssueRow> = report
            .issues
            .iter()
            .map(|issue| IssueRow {
                severity: issue.severity.as_str(),
                rule_id: issue.rule_id,
                slug: issue.slug.clone().unwrap_or_else(|| "-".to_string()),
                message: issue.message.clone(),
            })
            .collect();

        let table = Table::new(&rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string();

        println!("{table}");
        println!(
            "\n{} error(s), {} warning(s), {} resource(s) checked",
            report.error_count,
            report.warning_count,
            catalog.len()
        );
    }

    if !report.is_clean() {
        bail!("Catalog failed integrity check");
    }

    Ok(())
}
