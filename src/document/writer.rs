//! XML serialization of document trees

use crate::document::tree::{Document, NodeRef};
use crate::error::Result;
use std::fs;
use std::path::Path;

const INDENT: &str = "    ";

/// Render a document as indented XML, declaration included
pub fn to_xml_string(doc: &Document) -> String {
    to_xml_string_filtered(doc, |_| true)
}

/// Render a document, leaving out every element for which `keep` is false
///
/// The root element is always written.
pub fn to_xml_string_filtered<F>(doc: &Document, keep: F) -> String
where
    F: Fn(NodeRef<'_>) -> bool,
{
    let mut out = String::from("<?xml version=\"1.0\"?>\n");
    write_node(&mut out, doc.root(), 0, &keep);
    out
}

/// Write a document to `path`, replacing any existing file
pub fn write_to_path(doc: &Document, path: &Path) -> Result<()> {
    fs::write(path, to_xml_string(doc))?;
    Ok(())
}

/// Write a document to `path` without the elements rejected by `keep`
pub fn write_filtered_to_path<F>(doc: &Document, path: &Path, keep: F) -> Result<()>
where
    F: Fn(NodeRef<'_>) -> bool,
{
    fs::write(path, to_xml_string_filtered(doc, keep))?;
    Ok(())
}

fn write_node<F>(out: &mut String, node: NodeRef<'_>, depth: usize, keep: &F)
where
    F: Fn(NodeRef<'_>) -> bool,
{
    let children: Vec<_> = node.children().filter(|child| keep(*child)).collect();
    let indent = INDENT.repeat(depth);
    out.push_str(&indent);
    out.push('<');
    out.push_str(node.tag());
    for (name, value) in node.attributes() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }

    match (node.text(), !children.is_empty()) {
        (None, false) => out.push_str("/>\n"),
        (Some(text), false) => {
            out.push('>');
            out.push_str(&escape_text(text));
            out.push_str("</");
            out.push_str(node.tag());
            out.push_str(">\n");
        }
        (text, true) => {
            out.push_str(">\n");
            if let Some(text) = text {
                out.push_str(&INDENT.repeat(depth + 1));
                out.push_str(&escape_text(text));
                out.push('\n');
            }
            for child in children {
                write_node(out, child, depth + 1, keep);
            }
            out.push_str(&indent);
            out.push_str("</");
            out.push_str(node.tag());
            out.push_str(">\n");
        }
    }
}

/// Escape an attribute value
///
/// Tabs and line breaks become character references; a parser would
/// otherwise normalize them to spaces.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' => escaped.push_str("&#9;"),
            _ => push_escaped(&mut escaped, c),
        }
    }
    escaped
}

/// Escape text content; carriage returns would be folded into `\n` on read
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\r' => escaped.push_str("&#13;"),
            _ => push_escaped(&mut escaped, c),
        }
    }
    escaped
}

fn push_escaped(escaped: &mut String, c: char) {
    match c {
        '&' => escaped.push_str("&amp;"),
        '<' => escaped.push_str("&lt;"),
        '>' => escaped.push_str("&gt;"),
        '"' => escaped.push_str("&quot;"),
        '\'' => escaped.push_str("&apos;"),
        _ => escaped.push(c),
    }
}
