//! # Lumi Catalog
//!
//! The asset catalog behind the Lumi game editor.
//!
//! A Lumi project is a single XML document listing the game's objects,
//! sounds, sprites, tilesets, backgrounds and rooms, plus its window
//! configuration. The catalog loads that document, gives every asset a
//! unique id and keeps id and name lookups in sync across renames.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lumi_catalog::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut catalog = AssetCatalog::new();
//! catalog.load("game.lumi")?;
//!
//! if let Some(player) = catalog.record_by_name("Player") {
//!     println!("{} is {}", player.name, player.kind);
//! }
//! catalog.rename("Player", "Hero")?;
//! catalog.save_current()?;
//! # Ok(())
//! # }
//! ```

pub mod asset;
pub mod catalog;
pub mod config;
pub mod document;
pub mod error;
pub mod session;
pub mod types;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::asset::{AssetKind, AssetRecord};
    pub use crate::catalog::AssetCatalog;
    pub use crate::config::{CatalogConfig, IngestPolicy};
    pub use crate::document::{Document, DocumentLoader, NodeId, NodeRef, XmlLoader};
    pub use crate::error::{CatalogError, Result};
    pub use crate::session::{ProjectSession, ProjectView};
    pub use crate::types::*;
}
