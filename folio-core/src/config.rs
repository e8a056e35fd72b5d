//! Site Configuration Discovery Module
//!
//! Finds and loads the site configuration that tells the content layer
//! where the catalog lives, which service pages exist, and how many
//! related resources to show.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace, warn};

use crate::catalog::{CatalogError, Resource, ResourceCatalog, DEFAULT_RELATED_LIMIT};
use crate::validator::{CatalogValidator, Severity};

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "folio.yaml";

/// Default public site URL
pub const DEFAULT_BASE_URL: &str = "https://dustintn.com";

/// A service page published on the site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRef {
    /// Service id used in `relatedServices`
    pub id: String,
    /// Display title
    pub title: String,
}

impl ServiceRef {
    fn new(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
        }
    }
}

/// Site configuration (folio.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// Public URL the site is served from
    pub base_url: String,

    /// Catalog document to load instead of the built-in content
    pub content: Option<PathBuf>,

    /// Service pages resources may link to
    pub services: Vec<ServiceRef>,

    /// Run the integrity check when loading the catalog
    pub validate_on_load: bool,

    /// Related resources shown under an article
    pub related_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            content: None,
            services: vec![
                ServiceRef::new("web-development", "Web Development"),
                ServiceRef::new("brand-identity", "Brand Identity"),
                ServiceRef::new("seo-content", "SEO & Content"),
                ServiceRef::new("web-consulting", "Web Consulting"),
                ServiceRef::new("social-media", "Social Media"),
                ServiceRef::new("digital-strategy", "Digital Strategy"),
            ],
            validate_on_load: true,
            related_limit: DEFAULT_RELATED_LIMIT,
        }
    }
}

impl SiteConfig {
    /// Discover configuration using the default search order
    pub fn discover() -> Result<Self> {
        Self::discover_with_override(None)
    }

    /// Discover configuration with an optional CLI override
    ///
    /// Resolution order:
    /// 1. CLI override parameter (must exist)
    /// 2. `FOLIO_CONFIG` environment variable (must exist)
    /// 3. `folio.yaml` in the working directory
    /// 4. `config.yaml` in the platform config directory
    /// 5. Built-in defaults
    pub fn discover_with_override(cli_override: Option<PathBuf>) -> Result<Self> {
        trace!("Discovering site configuration");

        if let Some(path) = cli_override {
            if !path.exists() {
                return Err(anyhow::anyhow!(
                    "Config file does not exist: {}",
                    path.display()
                ));
            }
            debug!("Using CLI --config override: {}", path.display());
            return Self::load_from_path(&path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from) {
            if !path.exists() {
                return Err(anyhow::anyhow!(
                    "{} points to a missing file: {}",
                    CONFIG_ENV_VAR,
                    path.display()
                ));
            }
            debug!("Using {} override: {}", CONFIG_ENV_VAR, path.display());
            return Self::load_from_path(&path);
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            info!("Found site configuration at {:?}", local);
            return Self::load_from_path(&local);
        }

        if let Some(path) = Self::platform_config_path().filter(|p| p.exists()) {
            info!("Found site configuration at {:?}", path);
            return Self::load_from_path(&path);
        }

        debug!("No site configuration found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    ///
    /// A relative `content` path is resolved against the config file's directory.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read site config: {}", path.display()))?;

        let mut config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse site config: {}", path.display()))?;

        if let (Some(content_path), Some(dir)) = (&config.content, path.parent()) {
            if content_path.is_relative() {
                config.content = Some(dir.join(content_path));
            }
        }

        Ok(config)
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).context("Invalid site config YAML")
    }

    /// Platform-specific config file location, if one can be determined
    fn platform_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "dustintn", "folio")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .or_else(|| dirs::config_dir().map(|d| d.join("folio")))
            .map(|dir| dir.join("config.yaml"))
    }

    /// Known service ids, in configured order
    pub fn service_ids(&self) -> Vec<&str> {
        self.services.iter().map(|s| s.id.as_str()).collect()
    }

    /// Look up a configured service page
    pub fn service(&self, id: &str) -> Option<&ServiceRef> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Validator configured with this site's service pages
    pub fn validator(&self) -> CatalogValidator {
        CatalogValidator::new().with_known_services(self.service_ids())
    }

    /// Load the configured catalog (or the built-in one)
    ///
    /// When `validate_on_load` is set, integrity errors abort the load and
    /// warnings are logged.
    pub fn load_catalog(&self) -> Result<ResourceCatalog> {
        let catalog = match &self.content {
            Some(path) => {
                debug!("Loading resource catalog from {}", path.display());
                ResourceCatalog::from_file(path)?
            }
            None => {
                debug!("Loading built-in resource catalog");
                ResourceCatalog::builtin()?
            }
        };

        self.finish_loading(catalog)
    }

    /// Apply the configured integrity check to a freshly parsed catalog
    pub fn finish_loading(&self, catalog: ResourceCatalog) -> Result<ResourceCatalog> {
        if !self.validate_on_load {
            debug!("Integrity check disabled by configuration");
            return Ok(catalog);
        }

        let report = self.validator().validate(&catalog);
        for issue in report
            .issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
        {
            warn!(
                rule = issue.rule_id,
                slug = issue.slug.as_deref().unwrap_or("-"),
                "{}",
                issue.message
            );
        }

        if !report.is_clean() {
            return Err(CatalogError::Integrity { report }.into());
        }

        info!("Loaded {} resources", catalog.len());
        Ok(catalog)
    }

    /// Absolute URL of a resource detail page
    pub fn resource_url(&self, resource: &Resource) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), resource.path())
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.services.len(), 6);
        assert!(config.validate_on_load);
        assert_eq!(config.related_limit, 3);
        assert_eq!(config.service("seo-content").unwrap().title, "SEO & Content");
        assert!(config.service("logo-design").is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "baseUrl: https://staging.example.com/\nrelatedLimit: 4\n";
        let config = SiteConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.base_url, "https://staging.example.com/");
        assert_eq!(config.related_limit, 4);
        assert_eq!(config.services.len(), 6);
        assert!(config.content.is_none());
    }

    #[test]
    fn test_resource_url_joins_with_single_slash() {
        let catalog = ResourceCatalog::builtin().unwrap();
        let resource = &catalog.resources()[0];

        let mut config = SiteConfig::default();
        config.base_url = "https://example.com/".to_string();
        assert_eq!(
            config.resource_url(resource),
            format!("https://example.com/resources/{}", resource.slug)
        );
    }
}
