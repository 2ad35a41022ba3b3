//! Error types for the Lumi asset catalog

use crate::types::{AssetId, ByteOffset};
use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The project document is malformed or could not be read
    #[error("Parse error: {description} at offset {offset}")]
    Parse {
        description: String,
        offset: ByteOffset,
    },

    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Asset id not found: {0}")]
    IdNotFound(AssetId),

    /// Another live record already uses the requested name
    #[error("Name collision: '{name}' is already used by asset {existing}")]
    NameCollision { name: String, existing: AssetId },

    #[error("Missing name attribute on <{tag}> at offset {offset}")]
    MissingName { tag: String, offset: ByteOffset },

    #[error("Invalid asset name: {0:?}")]
    InvalidName(String),

    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CatalogError {
    /// Build a parse error from any displayable description
    pub fn parse(description: impl Into<String>, offset: ByteOffset) -> Self {
        CatalogError::Parse {
            description: description.into(),
            offset,
        }
    }

    /// True for errors that mean "the asked-for thing does not exist"
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_) | CatalogError::IdNotFound(_))
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
