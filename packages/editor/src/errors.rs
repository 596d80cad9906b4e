//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] pageforge_document::MutationError),

    #[error("Storage error: {0}")]
    Storage(#[from] pageforge_storage::StoreError),

    #[error("No such node: {0}")]
    UnknownNode(String),
}
