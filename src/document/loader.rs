//! Document loading
//!
//! [`DocumentLoader`] is the seam between the catalog and the on-disk
//! format. [`XmlLoader`] is the implementation used for `.lumi` project files.

use crate::document::tree::{Document, NodeId};
use crate::error::{CatalogError, Result};
use crate::types::ByteOffset;
use std::fs;
use std::path::Path;

/// Produces document trees from files or text
pub trait DocumentLoader: Send {
    /// Parse a document held in memory
    fn parse_str(&self, text: &str) -> Result<Document>;

    /// Read and parse the document at `path`
    ///
    /// Unreadable files are reported as parse errors at offset 0 so callers
    /// see a single failure kind for "no usable document".
    fn load_path(&self, path: &Path) -> Result<Document> {
        let text = fs::read_to_string(path).map_err(|e| {
            CatalogError::parse(
                format!("file could not be opened: {} ({})", path.display(), e),
                0,
            )
        })?;
        self.parse_str(&text)
    }
}

/// XML loader backed by `roxmltree`
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlLoader;

impl XmlLoader {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentLoader for XmlLoader {
    fn parse_str(&self, text: &str) -> Result<Document> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let xml = roxmltree::Document::parse_with_options(text, options).map_err(|e| {
            let pos = e.pos();
            CatalogError::parse(e.to_string(), text_pos_to_offset(text, pos.row, pos.col))
        })?;

        let root = xml.root_element();
        let mut doc = Document::new(root.tag_name().name());
        let root_id = doc.root().id();
        copy_element(&mut doc, root_id, root);
        Ok(doc)
    }
}

/// Copy attributes, text and child elements of `element` into `target`
fn copy_element(doc: &mut Document, target: NodeId, element: roxmltree::Node<'_, '_>) {
    doc.set_offset(target, element.range().start);
    for attr in element.attributes() {
        doc.set_attribute(target, attr.name(), attr.value());
    }

    let mut text = String::new();
    for child in element.children() {
        if child.is_element() {
            let id = doc.append_child(target, child.tag_name().name());
            copy_element(doc, id, child);
        } else if child.is_text() {
            if let Some(chunk) = child.text() {
                text.push_str(chunk);
            }
        }
    }

    let trimmed = text.trim();
    if !trimmed.is_empty() {
        doc.set_text(target, trimmed);
    }
}

/// Convert a 1-based row/column position into a byte offset within `text`
///
/// Columns count characters, not bytes. Positions past the end clamp to the
/// text length.
pub fn text_pos_to_offset(text: &str, row: u32, col: u32) -> ByteOffset {
    let mut offset = 0;
    for (index, line) in text.split_inclusive('\n').enumerate() {
        if index + 1 == row as usize {
            let column = col.saturating_sub(1) as usize;
            return offset
                + line
                    .char_indices()
                    .nth(column)
                    .map(|(byte, _)| byte)
                    .unwrap_or(line.len());
        }
        offset += line.len();
    }
    text.len()
}
