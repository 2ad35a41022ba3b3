//! Catalog configuration

use crate::types::PROJECT_TAG;
use serde::{Deserialize, Serialize};

/// What `load` does with a section child that cannot be ingested
///
/// A child cannot be ingested when it has no `name` attribute or when its
/// name is already used by a record loaded earlier in the same document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestPolicy {
    /// Log a warning and leave the node out of the catalog
    #[default]
    Skip,
    /// Fail the whole load and leave the catalog empty
    Abort,
}

/// Configuration for [`AssetCatalog`](crate::catalog::AssetCatalog)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Tag of the document's root element
    pub root_tag: String,
    /// Handling of unnamed or duplicate section children
    pub ingest_policy: IngestPolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            root_tag: PROJECT_TAG.to_string(),
            ingest_policy: IngestPolicy::Skip,
        }
    }
}

impl CatalogConfig {
    /// Strict configuration: any bad section child fails the load
    pub fn strict() -> Self {
        Self {
            ingest_policy: IngestPolicy::Abort,
            ..Self::default()
        }
    }
}
