//! Project session - the catalog wired to an editor front end
//!
//! The session owns the catalog and reports to whatever view was injected at
//! construction. Front ends implement [`ProjectView`]; nothing here is global.

use crate::asset::AssetRecord;
use crate::catalog::AssetCatalog;
use crate::document::NodeRef;
use crate::error::CatalogError;
use crate::types::AssetId;
use std::path::Path;

/// Capabilities the session needs from the editor UI
pub trait ProjectView {
    /// Show an error to the user
    fn show_error(&mut self, message: &str);

    /// Open an editor tab for an asset
    fn open_asset_tab(&mut self, asset: &AssetRecord);

    /// Open the project configuration tab for the `window` element
    fn open_configuration_tab(&mut self, window: NodeRef<'_>);
}

/// An open (or not yet opened) project and the view presenting it
pub struct ProjectSession<V: ProjectView> {
    catalog: AssetCatalog,
    view: V,
}

impl<V: ProjectView> ProjectSession<V> {
    /// Create a session with an empty catalog
    pub fn new(view: V) -> Self {
        Self::with_catalog(AssetCatalog::new(), view)
    }

    pub fn with_catalog(catalog: AssetCatalog, view: V) -> Self {
        Self { catalog, view }
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut AssetCatalog {
        &mut self.catalog
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Open the project file chosen by the user
    ///
    /// An empty filename means the file dialog was dismissed; the current
    /// project stays loaded. Load failures are shown through the view.
    pub fn open_project(&mut self, filename: &str) -> bool {
        if filename.is_empty() {
            return false;
        }
        match self.catalog.load(Path::new(filename)) {
            Ok(_) => true,
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }

    /// Open the tab of the asset with the given id
    pub fn open_asset(&mut self, id: AssetId) -> bool {
        match self.catalog.get(id) {
            Ok(record) => {
                self.view.open_asset_tab(record);
                true
            }
            Err(e) => {
                self.view.show_error(&e.to_string());
                false
            }
        }
    }

    /// Open the project configuration tab
    pub fn open_configuration(&mut self) -> bool {
        match self.catalog.config_node() {
            Some(window) => {
                self.view.open_configuration_tab(window);
                true
            }
            None => {
                self.view
                    .show_error("The project has no window configuration");
                false
            }
        }
    }

    /// Rename an asset, showing collisions and unknown names to the user
    pub fn rename_asset(&mut self, old_name: &str, new_name: &str) -> bool {
        match self.catalog.rename(old_name, new_name) {
            Ok(()) => true,
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }

    /// Save the project to the file it was opened from
    pub fn save_project(&mut self) -> bool {
        match self.catalog.save_current() {
            Ok(()) => true,
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }

    /// Save the project under a new file name
    pub fn save_project_as(&mut self, filename: &str) -> bool {
        if filename.is_empty() {
            return false;
        }
        match self.catalog.save(Path::new(filename)) {
            Ok(()) => true,
            Err(e) => {
                self.report(&e);
                false
            }
        }
    }

    fn report(&mut self, error: &CatalogError) {
        log::warn!("{}", error);
        self.view.show_error(&error.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingView {
        errors: Vec<String>,
        tabs: Vec<String>,
        config_opened: Option<String>,
    }

    impl ProjectView for RecordingView {
        fn show_error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }

        fn open_asset_tab(&mut self, asset: &AssetRecord) {
            self.tabs.push(asset.name.clone());
        }

        fn open_configuration_tab(&mut self, window: NodeRef<'_>) {
            self.config_opened = window.attribute("title").map(str::to_string);
        }
    }

    fn session() -> ProjectSession<RecordingView> {
        let mut session = ProjectSession::new(RecordingView::default());
        session
            .catalog_mut()
            .load_str(
                r#"<project>
                    <objects><object name="Player"/></objects>
                    <window title="Demo"/>
                </project>"#,
                "demo.lumi",
            )
            .unwrap();
        session
    }

    #[test]
    fn test_empty_filename_keeps_project() {
        let mut session = session();
        assert!(!session.open_project(""));
        assert_eq!(session.catalog().len(), 1);
        assert!(session.view().errors.is_empty());
    }

    #[test]
    fn test_open_missing_file_reports_error() {
        let mut session = session();
        assert!(!session.open_project("/no/such/project.lumi"));
        assert!(session.catalog().is_empty());
        assert_eq!(session.view().errors.len(), 1);
        assert!(session.view().errors[0].contains("Parse error"));
    }

    #[test]
    fn test_open_asset_and_configuration() {
        let mut session = session();
        let id = session.catalog().record_by_name("Player").unwrap().id;

        assert!(session.open_asset(id));
        assert!(!session.open_asset(id + 100));
        assert!(session.open_configuration());

        let view = session.view();
        assert_eq!(view.tabs, vec!["Player".to_string()]);
        assert_eq!(view.errors.len(), 1);
        assert_eq!(view.config_opened.as_deref(), Some("Demo"));
    }

    #[test]
    fn test_rename_collision_is_shown() {
        let mut session = session();
        session
            .catalog_mut()
            .load_str(
                r#"<project><objects><object name="A"/><object name="B"/></objects></project>"#,
                "ab.lumi",
            )
            .unwrap();

        assert!(!session.rename_asset("A", "B"));
        assert!(session.view().errors[0].contains("Name collision"));
        assert!(session.rename_asset("A", "C"));
    }

    #[test]
    fn test_configuration_missing() {
        let mut session = ProjectSession::new(RecordingView::default());
        assert!(!session.open_configuration());
        assert!(!session.save_project());
        assert_eq!(session.view().errors.len(), 2);
    }
}
