//! Project documents
//!
//! The catalog never interprets the on-disk format directly. A
//! [`DocumentLoader`] turns a file into an owned [`Document`] tree, the
//! catalog keeps that tree alive for as long as its records, and hands out
//! [`NodeRef`] views that borrow it.

pub mod loader;
pub mod tree;
pub mod writer;

pub use loader::{DocumentLoader, XmlLoader};
pub use tree::{Document, NodeData, NodeId, NodeRef};
pub use writer::{to_xml_string, write_to_path};
