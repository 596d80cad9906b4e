use crate::store::{PageId, PageRecord, PageStore, PageSummary, StoreError};
use pageforge_document::PageDocument;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// In-memory [`PageStore`] implementation.
///
/// The test double standing in for the external persistence service.
/// Ids are monotonic and never reused after deletion.
#[derive(Debug)]
pub struct MemoryPageStore {
    pages: BTreeMap<PageId, PageRecord>,
    next_id: PageId,
}

impl Default for MemoryPageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPageStore {
    pub fn new() -> Self {
        Self {
            pages: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageStore for MemoryPageStore {
    fn create_page(
        &mut self,
        app_name: &str,
        route_path: &str,
        page_config: PageDocument,
    ) -> Result<PageRecord, StoreError> {
        let exists = self
            .pages
            .values()
            .any(|page| page.app_name == app_name && page.route_path == route_path);
        if exists {
            warn!(app_name, route_path, "CreatePage: page already exists");
            return Err(StoreError::Conflict {
                app_name: app_name.to_string(),
                route_path: route_path.to_string(),
            });
        }

        let id = self.next_id;
        self.next_id += 1;

        let record = PageRecord {
            id,
            app_name: app_name.to_string(),
            route_path: route_path.to_string(),
            page_config,
            version: 1,
        };
        self.pages.insert(id, record.clone());
        info!(id, app_name, "CreatePage: page created");
        Ok(record)
    }

    fn get_page(&self, id: PageId) -> Result<PageRecord, StoreError> {
        match self.pages.get(&id) {
            Some(record) => Ok(record.clone()),
            None => {
                warn!(id, "GetPage: page not found");
                Err(StoreError::NotFound(id))
            }
        }
    }

    fn update_page(
        &mut self,
        id: PageId,
        page_config: PageDocument,
    ) -> Result<PageRecord, StoreError> {
        let record = self.pages.get_mut(&id).ok_or_else(|| {
            warn!(id, "UpdatePage: page not found");
            StoreError::NotFound(id)
        })?;

        record.page_config = page_config;
        record.version += 1;
        info!(id, version = record.version, "UpdatePage: page updated");
        Ok(record.clone())
    }

    fn delete_page(&mut self, id: PageId) -> Result<(), StoreError> {
        match self.pages.remove(&id) {
            Some(_) => {
                info!(id, "DeletePage: page deleted");
                Ok(())
            }
            None => {
                warn!(id, "DeletePage: page not found");
                Err(StoreError::NotFound(id))
            }
        }
    }

    fn list_pages(&self, app_name: Option<&str>) -> Result<Vec<PageSummary>, StoreError> {
        Ok(self
            .pages
            .values()
            .filter(|page| app_name.map_or(true, |name| page.app_name == name))
            .map(PageSummary::from)
            .collect())
    }
}
