//! Core types and constants

/// Unique identifier for catalog records
pub type AssetId = u64;

/// Byte position inside a project document
pub type ByteOffset = usize;

/// Tag of the root element of a project document
pub const PROJECT_TAG: &str = "project";

/// Child of the root element holding the project's declared name
pub const NAME_TAG: &str = "name";

/// Child of the root element holding the window configuration
pub const WINDOW_TAG: &str = "window";

/// Attribute read from every section child as the asset name
pub const NAME_ATTRIBUTE: &str = "name";
