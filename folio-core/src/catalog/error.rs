//! Catalog load errors with clear, actionable messages

use std::path::PathBuf;
use thiserror::Error;

use crate::validator::IntegrityReport;

/// Errors raised while building a catalog. Queries never fail.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Content file could not be read
    #[error("Failed to read resource catalog from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not valid catalog YAML
    #[error("Failed to parse resource catalog (invalid YAML or missing fields)")]
    Parse {
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Catalog could not be written back out as YAML
    #[error("Failed to serialize resource catalog")]
    Serialize {
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Document header does not describe a resource catalog
    #[error("Unsupported catalog document: apiVersion '{api_version}', kind '{kind}'.\n\nExpected apiVersion 'folio.dev/v1' and kind 'ResourceCatalog'.")]
    UnsupportedDocument { api_version: String, kind: String },

    /// Authored data failed the integrity check
    #[error("Resource catalog failed integrity check with {} error(s).\n\n{}\n\nRun 'folio validate' for the full report.", .report.error_count, .report.error_summary())]
    Integrity { report: IntegrityReport },
}
