//! Asset catalog - the in-memory index of a loaded project
//!
//! Provides:
//! - Full-replace loading of a project document
//! - Id → record and name → record lookups over one record set
//! - Collision-checked renames that keep both indices coherent
//! - Saving the loaded document back to disk
//!
//! Records are owned by the id index. The name index only maps names to ids,
//! so a record can never be reachable under a stale name.

use crate::asset::{AssetKind, AssetRecord};
use crate::config::{CatalogConfig, IngestPolicy};
use crate::document::{writer, Document, DocumentLoader, NodeId, NodeRef, XmlLoader};
use crate::error::{CatalogError, Result};
use crate::types::{AssetId, NAME_ATTRIBUTE, NAME_TAG, WINDOW_TAG};
use hashbrown::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// AssetCatalog - owner of every loaded record and of the project document
pub struct AssetCatalog {
    /// Records by id (owning)
    records: HashMap<AssetId, AssetRecord>,

    /// Name → id (secondary index)
    by_name: HashMap<String, AssetId>,

    /// Loaded document; every record's node handle points into it
    document: Option<Document>,

    /// The `window` element of the loaded document
    config_node: Option<NodeId>,

    /// Section children left out of the catalog; never written back by `save`
    skipped: HashSet<NodeId>,

    project_name: String,

    loaded_file_path: Option<PathBuf>,

    config: CatalogConfig,

    loader: Box<dyn DocumentLoader>,
}

impl AssetCatalog {
    /// Create an empty catalog reading XML project files
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    /// Create an empty catalog with the given configuration
    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            records: HashMap::new(),
            by_name: HashMap::new(),
            document: None,
            config_node: None,
            skipped: HashSet::new(),
            project_name: String::new(),
            loaded_file_path: None,
            config,
            loader: Box::new(XmlLoader::new()),
        }
    }

    /// Replace the document loader
    pub fn with_loader(mut self, loader: Box<dyn DocumentLoader>) -> Self {
        self.loader = loader;
        self
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    // ========== Lifecycle ==========

    /// Drop every record, both indices and the loaded document
    pub fn clear(&mut self) {
        if !self.records.is_empty() || self.document.is_some() {
            log::debug!("Clearing catalog ({} records)", self.records.len());
        }
        self.records.clear();
        self.by_name.clear();
        self.document = None;
        self.config_node = None;
        self.skipped.clear();
        self.project_name.clear();
        self.loaded_file_path = None;
    }

    /// Load the project file at `path`, replacing everything currently loaded
    ///
    /// The catalog is cleared before the file is even opened, so a failed
    /// load always leaves it empty. Returns the number of records ingested.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        self.clear();

        let document = match self.loader.load_path(path) {
            Ok(document) => document,
            Err(e) => {
                log::error!("Failed to load project {}: {}", path.display(), e);
                return Err(e);
            }
        };
        self.load_document(document, path)
    }

    /// Parse `text` with the configured loader and load it as if read from `path`
    pub fn load_str(&mut self, text: &str, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        self.clear();

        let document = match self.loader.parse_str(text) {
            Ok(document) => document,
            Err(e) => {
                log::error!("Failed to parse project {}: {}", path.display(), e);
                return Err(e);
            }
        };
        self.load_document(document, path)
    }

    /// Load an already parsed document, taking ownership of it
    pub fn load_document(&mut self, document: Document, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        self.clear();

        if let Err(e) = self.ingest_document(&document) {
            log::error!("Failed to load project {}: {}", path.display(), e);
            self.clear();
            return Err(e);
        }

        self.document = Some(document);
        self.loaded_file_path = Some(path.to_path_buf());
        log::info!(
            "Loaded project '{}' from {} ({} records)",
            self.project_name,
            path.display(),
            self.records.len()
        );
        Ok(self.records.len())
    }

    fn ingest_document(&mut self, document: &Document) -> Result<()> {
        let root = document.root();
        if root.tag() != self.config.root_tag {
            log::warn!(
                "Document root is <{}>, expected <{}>; treating as an empty project",
                root.tag(),
                self.config.root_tag
            );
            return Ok(());
        }

        self.project_name = root
            .child(NAME_TAG)
            .and_then(|node| node.text())
            .unwrap_or_default()
            .to_string();

        for kind in AssetKind::ALL {
            let Some(section) = root.child(kind.section()) else {
                continue;
            };
            for node in section.children() {
                match self.ingest_one(node, kind) {
                    Ok(id) => log::debug!("Ingested {} {} as id {}", kind, self.records[&id].name, id),
                    Err(e) => match self.config.ingest_policy {
                        IngestPolicy::Skip => {
                            log::warn!("Skipping {} entry: {}", kind, e);
                            self.skipped.insert(node.id());
                        }
                        IngestPolicy::Abort => return Err(e),
                    },
                }
            }
        }

        self.config_node = root.child(WINDOW_TAG).map(|node| node.id());
        Ok(())
    }

    /// Insert one section child as a record of `kind`
    ///
    /// Nothing is inserted when the node has no usable name or its name is
    /// already live.
    fn ingest_one(&mut self, node: NodeRef<'_>, kind: AssetKind) -> Result<AssetId> {
        let name = node
            .attribute(NAME_ATTRIBUTE)
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| CatalogError::MissingName {
                tag: node.tag().to_string(),
                offset: node.offset(),
            })?;

        if let Some(&existing) = self.by_name.get(name) {
            return Err(CatalogError::NameCollision {
                name: name.to_string(),
                existing,
            });
        }

        let id = self.generate_unique_id();
        self.records
            .insert(id, AssetRecord::new(id, name.to_string(), kind, node.id()));
        self.by_name.insert(name.to_string(), id);
        Ok(id)
    }

    /// Smallest free id at or above the current record count
    fn generate_unique_id(&self) -> AssetId {
        let mut id = self.records.len() as AssetId;
        while self.records.contains_key(&id) {
            id += 1;
        }
        id
    }

    // ========== Queries ==========

    /// Record by id
    pub fn record(&self, id: AssetId) -> Option<&AssetRecord> {
        self.records.get(&id)
    }

    /// Record by id, as an error when absent
    pub fn get(&self, id: AssetId) -> Result<&AssetRecord> {
        self.record(id).ok_or(CatalogError::IdNotFound(id))
    }

    /// Record by name
    pub fn record_by_name(&self, name: &str) -> Option<&AssetRecord> {
        self.by_name.get(name).and_then(|id| self.records.get(id))
    }

    pub fn exists_by_id(&self, id: AssetId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn exists_by_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Read-only view of every record, keyed by id
    pub fn records(&self) -> &HashMap<AssetId, AssetRecord> {
        &self.records
    }

    /// Records of one kind, ordered by id
    pub fn records_of_kind(&self, kind: AssetKind) -> Vec<&AssetRecord> {
        let mut records: Vec<_> = self.records.values().filter(|r| r.kind == kind).collect();
        records.sort_by_key(|r| r.id);
        records
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Document node the record was read from
    pub fn source_node(&self, id: AssetId) -> Option<NodeRef<'_>> {
        let record = self.records.get(&id)?;
        self.document.as_ref()?.node(record.node)
    }

    /// The project's `window` configuration element, if the document had one
    pub fn config_node(&self) -> Option<NodeRef<'_>> {
        self.document.as_ref()?.node(self.config_node?)
    }

    /// Declared project name, empty when nothing is loaded
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Path the current contents were loaded from or last saved to
    pub fn loaded_file_path(&self) -> Option<&Path> {
        self.loaded_file_path.as_deref()
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    // ========== Mutation ==========

    /// Rename the record called `old_name`
    ///
    /// The record keeps its id. Renaming onto a name held by another record
    /// is rejected with [`CatalogError::NameCollision`]; renaming a record to
    /// its current name is a no-op. The new name is also written to the
    /// source node so that a later save persists it.
    pub fn rename(&mut self, old_name: &str, new_name: &str) -> Result<()> {
        if new_name.trim().is_empty() {
            return Err(CatalogError::InvalidName(new_name.to_string()));
        }

        let id = *self
            .by_name
            .get(old_name)
            .ok_or_else(|| CatalogError::NotFound(old_name.to_string()))?;
        if old_name == new_name {
            return Ok(());
        }
        if let Some(&existing) = self.by_name.get(new_name) {
            return Err(CatalogError::NameCollision {
                name: new_name.to_string(),
                existing,
            });
        }

        let record = self
            .records
            .get_mut(&id)
            .ok_or(CatalogError::IdNotFound(id))?;
        record.name = new_name.to_string();
        if let Some(document) = self.document.as_mut() {
            document.set_attribute(record.node, NAME_ATTRIBUTE, new_name);
        }

        self.by_name.remove(old_name);
        self.by_name.insert(new_name.to_string(), id);
        log::info!("Renamed asset {} from '{}' to '{}'", id, old_name, new_name);
        Ok(())
    }

    // ========== Persistence ==========

    /// Write the loaded project, renames included, to `path`
    ///
    /// Loading the written file reproduces the same records, ids, project
    /// name and window configuration. Section children that were skipped on
    /// load are not written, otherwise a rename could free a name and let a
    /// skipped duplicate come back as a new record. On success `path`
    /// becomes the catalog's file path.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let document = self
            .document
            .as_ref()
            .ok_or_else(|| CatalogError::Unsupported("no project is loaded".to_string()))?;

        if !self.skipped.is_empty() {
            log::warn!(
                "Dropping {} skipped entries from {}",
                self.skipped.len(),
                path.display()
            );
        }
        let skipped = &self.skipped;
        let written = writer::write_filtered_to_path(document, path, |node| {
            !skipped.contains(&node.id())
        });
        if let Err(e) = written {
            log::error!("Failed to save project to {}: {}", path.display(), e);
            return Err(e);
        }

        log::info!("Saved project '{}' to {}", self.project_name, path.display());
        self.loaded_file_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Save back to the path the project was loaded from
    pub fn save_current(&mut self) -> Result<()> {
        let path = self.loaded_file_path.clone().ok_or_else(|| {
            CatalogError::Unsupported("project has no file location".to_string())
        })?;
        self.save(path)
    }
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::new()
    }
}
