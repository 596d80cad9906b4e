//! # Edit Session
//!
//! One editing session over one page document.
//!
//! The session owns the working copy of the document and is the only
//! writer: palette drops, property patches, and structural edits all
//! funnel through [`EditSession::apply`] in the order their events are
//! observed. Persisting and reloading always exchange the *entire*
//! component forest with the storage port, never incremental diffs.

use crate::errors::EditorError;
use crate::fields::PropertyPatch;
use pageforge_document::{ComponentNode, Mutation, PageDocument};
use pageforge_renderer::{render_page, VNode};
use pageforge_storage::{PageId, PageRecord, PageStore};

/// Editable page session
#[derive(Debug)]
pub struct EditSession {
    document: PageDocument,

    /// Increments on each applied mutation (session-local; distinct
    /// from the store-assigned page version)
    revision: u64,

    /// Unsaved changes since the last successful persist
    dirty: bool,

    /// Currently selected node id, if any
    selected: Option<String>,

    /// Counter for fresh `comp-N` ids
    next_id: u64,
}

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// New session revision
    pub revision: u64,
}

impl EditSession {
    /// Start a session on a new, empty page.
    pub fn new() -> Self {
        Self::from_document(PageDocument::new())
    }

    /// Start a session on an existing document.
    pub fn from_document(document: PageDocument) -> Self {
        let next_id = seed_next_id(&document);
        Self {
            document,
            revision: 0,
            dirty: false,
            selected: None,
            next_id,
        }
    }

    /// Load a session from the storage port.
    pub fn load_from(store: &dyn PageStore, id: PageId) -> Result<Self, EditorError> {
        let record = store.get_page(id)?;
        Ok(Self::from_document(record.page_config))
    }

    pub fn document(&self) -> &PageDocument {
        &self.document
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Apply a mutation with validation.
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        mutation.apply(&mut self.document)?;
        self.revision += 1;
        self.dirty = true;

        // A selection inside a removed subtree (or a replaced forest)
        // no longer resolves; drop it.
        if let Some(selected) = &self.selected {
            if !self.document.contains(selected) {
                self.selected = None;
            }
        }

        Ok(MutationResult {
            revision: self.revision,
        })
    }

    /// Patch one property on a node (merge by key).
    pub fn patch_property(
        &mut self,
        node_id: &str,
        patch: PropertyPatch,
    ) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::SetProperty {
            node_id: node_id.to_string(),
            key: patch.key,
            value: patch.value,
        })
    }

    /// The sole reaction to a palette drop: synthesize a node with a
    /// fresh id, the dropped type, empty properties and no children,
    /// appended to the root forest.
    pub fn place(&mut self, component_type: &str) -> Result<String, EditorError> {
        let id = self.fresh_id();
        self.apply(Mutation::AppendRoot {
            node: ComponentNode::new(id.clone(), component_type),
        })?;
        Ok(id)
    }

    pub fn select(&mut self, id: &str) -> Result<(), EditorError> {
        if !self.document.contains(id) {
            return Err(EditorError::UnknownNode(id.to_string()));
        }
        self.selected = Some(id.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_node(&self) -> Option<&ComponentNode> {
        self.document.find(self.selected.as_deref()?)
    }

    /// Render the current document (the canvas view).
    pub fn render(&self) -> VNode {
        render_page(Some(&self.document))
    }

    /// Persist the whole document to an existing page.
    pub fn save_to(
        &mut self,
        store: &mut dyn PageStore,
        id: PageId,
    ) -> Result<PageRecord, EditorError> {
        let record = store.update_page(id, self.document.clone())?;
        self.dirty = false;
        Ok(record)
    }

    /// Persist the whole document as a new page.
    pub fn create_in(
        &mut self,
        store: &mut dyn PageStore,
        app_name: &str,
        route_path: &str,
    ) -> Result<PageRecord, EditorError> {
        let record = store.create_page(app_name, route_path, self.document.clone())?;
        self.dirty = false;
        Ok(record)
    }

    /// Reload the document from storage, replacing the whole forest.
    pub fn reload_from(&mut self, store: &dyn PageStore, id: PageId) -> Result<(), EditorError> {
        let record = store.get_page(id)?;
        self.apply(Mutation::ReplaceComponents {
            components: record.page_config.components,
        })?;
        self.dirty = false;
        Ok(())
    }

    /// Next unused `comp-N` id. Ids are never reused after deletion:
    /// the counter only moves forward.
    fn fresh_id(&mut self) -> String {
        loop {
            let candidate = format!("comp-{}", self.next_id);
            self.next_id += 1;
            if !self.document.contains(&candidate) {
                return candidate;
            }
        }
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Seed the id counter past any `comp-N` id already in the document.
fn seed_next_id(document: &PageDocument) -> u64 {
    document
        .ids()
        .iter()
        .filter_map(|id| id.strip_prefix("comp-"))
        .filter_map(|suffix| suffix.parse::<u64>().ok())
        .max()
        .map_or(1, |max| max + 1)
}
