//! # Pageforge Storage
//!
//! The page-storage port.
//!
//! The HTTP CRUD service that actually persists pages is an external
//! collaborator; the core consumes it only through the [`PageStore`]
//! trait defined here. [`MemoryPageStore`] is one implementation — the
//! test double used by the editor's tests — not process-wide state.
//!
//! ## Versioning
//!
//! Versions are store-assigned: 1 on creation, +1 on every successful
//! update. They observe write history; they are never checked against a
//! client-submitted expected version, so concurrent writers are last-
//! write-wins.

mod memory;
mod store;

pub use memory::MemoryPageStore;
pub use store::{PageId, PageRecord, PageStore, PageSummary, StoreError};
