//! Property tests for catalog index coherence and id uniqueness

use lumi_catalog::prelude::*;
use proptest::prelude::*;
use std::collections::HashSet;

/// Build a project document from (section, optional name) entries
fn build_project(entries: &[(usize, Option<String>)]) -> Document {
    let mut doc = Document::new("project");
    let root = doc.root().id();
    let sections: Vec<NodeId> = AssetKind::ALL
        .iter()
        .map(|kind| doc.append_child(root, kind.section()))
        .collect();

    for (section, name) in entries {
        let kind = AssetKind::ALL[*section];
        let node = doc.append_child(sections[*section], &kind.to_string().to_lowercase());
        if let Some(name) = name {
            doc.set_attribute(node, "name", name);
        }
    }
    doc
}

fn assert_coherent(catalog: &AssetCatalog) {
    let mut names = HashSet::new();
    for (id, record) in catalog.records() {
        assert_eq!(*id, record.id);
        assert!(names.insert(record.name.clone()), "duplicate name {}", record.name);
        assert_eq!(catalog.record_by_name(&record.name).map(|r| r.id), Some(*id));
    }
}

fn entry() -> impl Strategy<Value = (usize, Option<String>)> {
    (0..6usize, proptest::option::weighted(0.9, "[a-f]{1,2}"))
}

proptest! {
    #[test]
    fn load_keeps_indices_coherent(entries in proptest::collection::vec(entry(), 0..40)) {
        let mut catalog = AssetCatalog::new();
        let count = catalog.load_document(build_project(&entries), "prop.lumi").unwrap();

        let distinct: HashSet<_> = entries.iter().filter_map(|(_, name)| name.clone()).collect();
        prop_assert_eq!(count, distinct.len());
        prop_assert_eq!(catalog.len(), distinct.len());
        assert_coherent(&catalog);

        // First load hands out 0..n
        let mut ids: Vec<_> = catalog.records().keys().copied().collect();
        ids.sort_unstable();
        prop_assert_eq!(ids, (0..count as AssetId).collect::<Vec<_>>());
    }

    #[test]
    fn renames_preserve_ids_and_coherence(
        entries in proptest::collection::vec(entry(), 1..30),
        renames in proptest::collection::vec(("[a-f]{1,2}", "[a-g]{1,2}"), 0..20),
    ) {
        let mut catalog = AssetCatalog::new();
        catalog.load_document(build_project(&entries), "prop.lumi").unwrap();
        let len = catalog.len();

        for (old, new) in &renames {
            let before = catalog.record_by_name(old).map(|r| r.id);
            let target = catalog.record_by_name(new).map(|r| r.id);
            match catalog.rename(old, new) {
                Ok(()) => {
                    let id = before.unwrap();
                    prop_assert_eq!(catalog.record_by_name(new).map(|r| r.id), Some(id));
                    if old != new {
                        prop_assert!(!catalog.exists_by_name(old));
                    }
                }
                Err(CatalogError::NotFound(_)) => prop_assert!(before.is_none()),
                Err(CatalogError::NameCollision { existing, .. }) => {
                    prop_assert_eq!(Some(existing), target);
                }
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
            prop_assert_eq!(catalog.len(), len);
            assert_coherent(&catalog);
        }
    }
}
