//! Folio - browse and check the agency site's resource catalog
//!
//! Main entry point: loads the site configuration and catalog once, then
//! hands the shared catalog to the requested command.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use folio_core::catalog::ResourceCatalog;
use folio_core::config::SiteConfig;

mod resources_cli;
mod validate_cli;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "folio",
    about = "Browse and check the resource catalog behind the agency site",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Emit logs as JSON
    #[clap(long, global = true)]
    log_json: bool,

    /// Site configuration file (defaults to FOLIO_CONFIG, ./folio.yaml, then the user config dir)
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog document to load instead of the configured content
    #[clap(long, global = true)]
    content: Option<PathBuf>,

    /// Skip the integrity check when loading the catalog
    #[clap(long, global = true)]
    no_validate: bool,
}

#[derive(Parser, Debug)]
enum Command {
    /// Query published resources
    Resources {
        #[clap(subcommand)]
        command: resources_cli::ResourcesCommand,
    },

    /// Run the integrity check and print the report
    Validate {
        /// Output results as JSON
        #[clap(long)]
        json: bool,

        /// List the integrity rules instead of running them
        #[clap(long)]
        rules: bool,
    },

    /// Print the public URL of every resource, in catalog order
    Urls,
}

/// Initialize tracing with CLI flags
///
/// Logs always go to stderr so command output on stdout stays clean.
fn initialize_tracing(log_level: &LogLevel, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Fold command-line flags into the discovered site config
///
/// `--content` replaces the configured catalog path. The validate command
/// always checks, but reports instead of failing the load.
fn apply_overrides(
    config: &mut SiteConfig,
    content: Option<PathBuf>,
    no_validate: bool,
    command: &Command,
) {
    if let Some(path) = content {
        debug!("Catalog path overridden: {}", path.display());
        config.content = Some(path);
    }

    if no_validate || matches!(command, Command::Validate { .. }) {
        config.validate_on_load = false;
    }
}

/// Public URLs of every resource, in catalog order
fn resource_urls(catalog: &ResourceCatalog, config: &SiteConfig) -> Vec<String> {
    catalog
        .iter()
        .map(|resource| config.resource_url(resource))
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, cli.log_json);

    let mut config = SiteConfig::discover_with_override(cli.config)?;

    apply_overrides(&mut config, cli.content, cli.no_validate, &cli.command);

    let catalog = match config.load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load resource catalog: {:#}", e);
            return Err(e);
        }
    };

    match cli.command {
        Command::Resources { command } => command.execute(&catalog, &config),
        Command::Validate { rules: true, .. } => validate_cli::list_rules(&config),
        Command::Validate { json, .. } => validate_cli::execute(&catalog, &config, json),
        Command::Urls => {
            for url in resource_urls(&catalog, &config) {
                println!("{url}");
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const SINGLE_RESOURCE_CATALOG: &str = r#"apiVersion: folio.dev/v1
kind: ResourceCatalog
categories: [All, Web Development]
resources:
  - slug: launch-plan
    title: Launch Plan
    metaTitle: Launch Plan | Resources
    metaDescription: Ship the site in thirty days.
    category: Web Development
    excerpt: Ship the site in thirty days.
    image: https://example.com/launch-plan.png
    readTime: 5 min read
    publishDate: January 1, 2026
    relatedServices: [web-development]
    sections:
      - heading: Week one
        content: Pick a platform.
    cta:
      heading: Ready?
      description: Let's talk.
      buttonText: Contact
      buttonHref: /contact
"#;

    #[test]
    fn test_content_flag_replaces_configured_catalog() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("resources.yaml");
        fs::write(&path, SINGLE_RESOURCE_CATALOG)?;

        let mut config = SiteConfig {
            content: Some(PathBuf::from("/nonexistent/resources.yaml")),
            ..SiteConfig::default()
        };
        apply_overrides(&mut config, Some(path.clone()), false, &Command::Urls);

        assert_eq!(config.content, Some(path));
        assert!(config.validate_on_load);

        let catalog = config.load_catalog()?;
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.resources()[0].slug, "launch-plan");
        Ok(())
    }

    #[test]
    fn test_validate_command_never_fails_the_load() {
        let mut config = SiteConfig::default();
        apply_overrides(&mut config, None, false, &Command::Validate {
                json: false,
                rules: false,
            },);
        assert!(!config.validate_on_load);

        let mut config = SiteConfig::default();
        apply_overrides(&mut config, None, true, &Command::Urls);
        assert!(!config.validate_on_load);
        assert_eq!(config.content, None);
    }

    #[test]
    fn test_resource_urls_follow_catalog_order() -> Result<()> {
        let catalog = ResourceCatalog::builtin()?;
        let config = SiteConfig {
            base_url: "https://example.com/".to_string(),
            ..SiteConfig::default()
        };

        let urls = resource_urls(&catalog, &config);
        assert_eq!(urls.len(), catalog.len());
        assert_eq!(
            urls[0],
            "https://example.com/resources/essential-website-maintenance-checklist-2026"
        );
        assert_eq!(
            urls[8],
            "https://example.com/resources/choose-right-website-platform-small-business"
        );
        Ok(())
    }
}
