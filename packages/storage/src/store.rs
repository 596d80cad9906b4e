use pageforge_document::PageDocument;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type PageId = u64;

/// A stored page: the document plus its addressing and version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub id: PageId,
    pub app_name: String,
    pub route_path: String,
    pub page_config: PageDocument,
    pub version: u64,
}

/// Listing row: everything but the document body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
    pub id: PageId,
    pub app_name: String,
    pub route_path: String,
    pub version: u64,
}

impl From<&PageRecord> for PageSummary {
    fn from(record: &PageRecord) -> Self {
        Self {
            id: record.id,
            app_name: record.app_name.clone(),
            route_path: record.route_path.clone(),
            version: record.version,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Page already exists: {app_name}{route_path}")]
    Conflict { app_name: String, route_path: String },

    #[error("Page not found: {0}")]
    NotFound(PageId),

    #[error("Storage transport failure: {0}")]
    Transport(String),
}

/// Storage port consumed by the editor.
///
/// The core never retries a failed operation; faults are reported
/// upward for the embedding environment to present. An `update_page`
/// always replaces the entire page config — there is no partial,
/// field-level update.
pub trait PageStore {
    /// Create a page; fails with [`StoreError::Conflict`] when
    /// `(app_name, route_path)` already exists. The new record has
    /// `version == 1`.
    fn create_page(
        &mut self,
        app_name: &str,
        route_path: &str,
        page_config: PageDocument,
    ) -> Result<PageRecord, StoreError>;

    fn get_page(&self, id: PageId) -> Result<PageRecord, StoreError>;

    /// Replace a page's config wholesale; bumps the version by exactly
    /// one.
    fn update_page(&mut self, id: PageId, page_config: PageDocument)
        -> Result<PageRecord, StoreError>;

    fn delete_page(&mut self, id: PageId) -> Result<(), StoreError>;

    /// List stored pages, optionally filtered by app name.
    fn list_pages(&self, app_name: Option<&str>) -> Result<Vec<PageSummary>, StoreError>;
}
