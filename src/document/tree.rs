//! Owned document tree with borrowed node views

use crate::types::ByteOffset;

/// Handle of a node inside one [`Document`]
///
/// Handles are plain indices. They are only meaningful for the document that
/// produced them; resolve them with [`Document::node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Storage for one element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeData {
    pub tag: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
    /// Direct text content, if any non-whitespace text was present
    pub text: Option<String>,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    /// Byte position of the element's start tag in the source text
    pub offset: ByteOffset,
}

impl NodeData {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
            parent,
            offset: 0,
        }
    }
}

/// Arena-backed element tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    nodes: Vec<NodeData>,
}

impl Document {
    /// Create a document holding only a root element
    pub fn new(root_tag: &str) -> Self {
        Self {
            nodes: vec![NodeData::new(root_tag, None)],
        }
    }

    /// The root element
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef {
            doc: self,
            id: NodeId(0),
        }
    }

    /// Resolve a handle, `None` if it does not belong to this document
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { doc: self, id })
    }

    /// Number of elements in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A document always has its root, so it is never empty
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Append a new element as the last child of `parent`
    ///
    /// # Panics
    /// Panics if `parent` is not a node of this document.
    pub fn append_child(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData::new(tag, Some(parent)));
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Set or replace an attribute, keeping its original position
    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        let Some(node) = self.nodes.get_mut(id.0) else {
            return;
        };
        match node.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => node.attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub fn set_text(&mut self, id: NodeId, text: &str) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.text = Some(text.to_string());
        }
    }

    pub fn set_offset(&mut self, id: NodeId, offset: ByteOffset) {
        if let Some(node) = self.nodes.get_mut(id.0) {
            node.offset = offset;
        }
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }
}

/// Read-only view of one element, borrowing its document
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'doc> {
    doc: &'doc Document,
    id: NodeId,
}

impl<'doc> NodeRef<'doc> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tag(&self) -> &'doc str {
        &self.doc.data(self.id).tag
    }

    /// Value of the named attribute
    pub fn attribute(&self, name: &str) -> Option<&'doc str> {
        self.doc
            .data(self.id)
            .attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes in document order
    pub fn attributes(&self) -> impl Iterator<Item = (&'doc str, &'doc str)> + 'doc {
        self.doc
            .data(self.id)
            .attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn text(&self) -> Option<&'doc str> {
        self.doc.data(self.id).text.as_deref()
    }

    /// Child elements in document order
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'doc>> + 'doc {
        let doc = self.doc;
        doc.data(self.id)
            .children
            .iter()
            .map(move |&id| NodeRef { doc, id })
    }

    /// First child element with the given tag
    pub fn child(&self, tag: &str) -> Option<NodeRef<'doc>> {
        self.children().find(|child| child.tag() == tag)
    }

    pub fn parent(&self) -> Option<NodeRef<'doc>> {
        self.doc
            .data(self.id)
            .parent
            .map(|id| NodeRef { doc: self.doc, id })
    }

    pub fn has_children(&self) -> bool {
        !self.doc.data(self.id).children.is_empty()
    }

    pub fn offset(&self) -> ByteOffset {
        self.doc.data(self.id).offset
    }

    /// The document this view borrows
    pub fn document(&self) -> &'doc Document {
        self.doc
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}
