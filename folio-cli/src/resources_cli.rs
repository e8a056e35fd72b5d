//! Folio resource commands
//!
//! Each command stands in for one page or widget of the site: the list
//! page, the detail page, the related-articles row, the service-page
//! row, and the cross-link widget.

use anyhow::{bail, Result};
use clap::Subcommand;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

use folio_core::catalog::{CategoryFilter, Resource, ResourceCatalog, SnippetQuery};
use folio_core::config::SiteConfig;

/// Longest title shown in a table cell
const MAX_TITLE_WIDTH: usize = 60;

#[derive(Subcommand, Debug, PartialEq)]
pub enum ResourcesCommand {
    /// List resources, optionally filtered by category
    List {
        /// Category label ("All" shows everything)
        #[clap(long)]
        category: Option<String>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show one resource in full
    Show {
        /// Resource slug
        slug: String,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Recommend resources related to one being viewed
    Related {
        /// Slug of the resource being viewed
        slug: String,

        /// Category to prefer
        #[clap(long)]
        category: Option<String>,

        /// Number of recommendations (defaults to the configured related limit)
        #[clap(long)]
        limit: Option<usize>,
    },

    /// List resources linked to a service page
    Service {
        /// Service id (e.g. web-development)
        id: String,

        /// Maximum number of resources
        #[clap(long)]
        limit: Option<usize>,
    },

    /// Pick the cards a cross-link widget would show
    Snippets {
        /// Service page the widget sits on
        #[clap(long)]
        service: Option<String>,

        /// Category to prefer
        #[clap(long)]
        category: Option<String>,

        /// Slug of the resource being viewed
        #[clap(long)]
        exclude: Option<String>,

        /// Number of cards
        #[clap(long, default_value_t = folio_core::catalog::DEFAULT_SNIPPET_LIMIT)]
        limit: usize,
    },

    /// Show category tabs with resource counts
    Categories,

    /// Show service ids referenced by resources and configured service pages
    Services,
}

impl ResourcesCommand {
    pub fn execute(self, catalog: &ResourceCatalog, config: &SiteConfig) -> Result<()> {
        match self {
            ResourcesCommand::List { category, json } => {
                execute_list(catalog, category.as_deref(), json)
            }
            ResourcesCommand::Show { slug, json } => execute_show(catalog, config, &slug, json),
            ResourcesCommand::Related {
                slug,
                category,
                limit,
            } => {
                let limit = limit.unwrap_or(config.related_limit);
                let related = catalog.related(&slug, category.as_deref(), limit);
                print_resources(&related, "No related resources.");
                Ok(())
            }
            ResourcesCommand::Service { id, limit } => {
                if config.service(&id).is_none() {
                    tracing::warn!("'{id}' is not a configured service page");
                }
                let matches = catalog.for_service(&id, limit);
                print_resources(&matches, &format!("No resources for service '{id}'."));
                Ok(())
            }
            ResourcesCommand::Snippets {
                service,
                category,
                exclude,
                limit,
            } => {
                let query = SnippetQuery {
                    service,
                    category,
                    exclude_slug: exclude,
                    limit,
                };
                print_resources(&catalog.snippets(&query), "No resources to show.");
                Ok(())
            }
            ResourcesCommand::Categories => execute_categories(catalog),
            ResourcesCommand::Services => execute_services(catalog, config),
        }
    }
}

/// Table row for resource listings
#[derive(Tabled)]
struct ResourceRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Slug")]
    slug: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Read Time")]
    read_time: String,
    #[tabled(rename = "Title")]
    title: String,
}

/// Build table rows, numbering each with `position(rank, resource)`
fn resource_rows<F>(resources: &[&Resource], position: F) -> Vec<ResourceRow>
where
    F: Fn(usize, &Resource) -> usize,
{
    resources
        .iter()
        .enumerate()
        .map(|(rank, r)| ResourceRow {
            position: position(rank, r),
            slug: r.slug.clone(),
            category: r.category.clone(),
            read_time: r.read_time.clone(),
            title: truncate(&r.title, MAX_TITLE_WIDTH),
        })
        .collect()
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}

fn render_table<T: Tabled>(rows: &[T]) -> String {
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()))
        .to_string()
}

fn print_resources(resources: &[&Resource], empty_message: &str) {
    if resources.is_empty() {
        println!("{empty_message}");
        return;
    }

    let rows = resource_rows(resources, |rank, _| rank + 1);
    println!("{}", render_table(&rows));
}

fn execute_list(
    catalog: &ResourceCatalog,
    category: Option<&str>,
    json_output: bool,
) -> Result<()> {
    let filter = CategoryFilter::from(category);
    let results = catalog.filter_by_category(&filter);

    if json_output {
        let json_results: Vec<serde_json::Value> = results
            .iter()
            .map(|r| {
                serde_json::json!({
                    "slug": r.slug,
                    "title": r.title,
                    "category": r.category,
                    "excerpt": r.excerpt,
                    "readTime": r.read_time,
                    "publishDate": r.publish_date,
                    "tags": r.tags,
                })
            })
            .collect();

        println!("{}", serde_json::to_string_pretty(&json_results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No resources in category '{filter}'.");
        return Ok(());
    }

    println!("{} resource(s) in '{filter}':\n", results.len());
    let rows = resource_rows(&results, |_, r| {
        catalog.position(&r.slug).map(|i| i + 1).unwrap_or_default()
    });
    println!("{}", render_table(&rows));

    Ok(())
}

fn execute_show(
    catalog: &ResourceCatalog,
    config: &SiteConfig,
    slug: &str,
    json_output: bool,
) -> Result<()> {
    let Some(resource) = catalog.get_by_slug(slug) else {
        bail!("Resource '{slug}' not found.\n\nRun 'folio resources list' to see published resources.");
    };
    let neighbors = catalog.neighbors(slug);
    let previous = neighbors.and_then(|n| n.previous);
    let next = neighbors.and_then(|n| n.next);

    if json_output {
        let output = serde_json::json!({
            "resource": resource,
            "url": config.resource_url(resource),
            "previous": previous.map(|r| &r.slug),
            "next": next.map(|r| &r.slug),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", resource.title);
    println!("{}", "=".repeat(resource.title.chars().count()));
    println!(
        "{} | {} | {}",
        resource.category, resource.read_time, resource.publish_date
    );
    if !resource.tags.is_empty() {
        println!("Tags: {}", resource.tags_display());
    }
    println!("URL:  {}", config.resource_url(resource));
    println!();
    println!("{}", resource.excerpt);

    for section in &resource.sections {
        println!();
        println!("## {}", section.heading);
        println!();
        println!("{}", section.content);
        if section.has_bullets() {
            println!();
            for bullet in section.bullets() {
                println!("  - {bullet}");
            }
        }
    }

    println!();
    println!("> {}", resource.cta.heading);
    println!("> {}", resource.cta.description);
    println!("> [{}]({})", resource.cta.button_text, resource.cta.button_href);

    println!();
    if let Some(previous) = previous {
        println!("Previous: {} ({})", previous.title, previous.slug);
    }
    if let Some(next) = next {
        println!("Next:     {} ({})", next.title, next.slug);
    }

    Ok(())
}

/// Table row for category tabs
#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    label: String,
    #[tabled(rename = "Resources")]
    count: usize,
}

fn category_rows(catalog: &ResourceCatalog) -> Vec<CategoryRow> {
    catalog
        .categories()
        .labels()
        .iter()
        .map(|label| CategoryRow {
            label: label.clone(),
            count: catalog
                .filter_by_category(&CategoryFilter::parse(label))
                .len(),
        })
        .collect()
}

fn execute_categories(catalog: &ResourceCatalog) -> Result<()> {
    println!("{}", render_table(&category_rows(catalog)));
    Ok(())
}

/// Table row for service pages
#[derive(Tabled)]
struct ServiceRow {
    #[tabled(rename = "Service")]
    id: String,
    #[tabled(rename = "Page")]
    title: String,
    #[tabled(rename = "Resources")]
    count: usize,
}

fn service_rows(catalog: &ResourceCatalog, config: &SiteConfig) -> Vec<ServiceRow> {
    let mut ids: Vec<&str> = config.service_ids();
    for id in catalog.service_ids() {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    ids.into_iter()
        .map(|id| ServiceRow {
            id: id.to_string(),
            title: config
                .service(id)
                .map(|s| s.title.clone())
                .unwrap_or_else(|| "(no page)".to_string()),
            count: catalog.for_service(id, None).len(),
        })
        .collect()
}

fn execute_services(catalog: &ResourceCatalog, config: &SiteConfig) -> Result<()> {
    println!("{}", render_table(&service_rows(catalog, config)));
    Ok(())
}
