//! # Document Mutations
//!
//! High-level semantic operations on page documents.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each mutation represents one semantic edit
//! 2. **Validated**: structural constraints are checked before applying
//! 3. **Ordered**: mutations apply in the order their events are
//!    observed; there is no batching or reordering
//!
//! ## Mutation Semantics
//!
//! ### SetProperty
//! - Merge by key into the node's property bag (never a wholesale
//!   replace of the bag)
//! - Last write wins for the same key
//!
//! ### InsertChild / AppendRoot
//! - Fails if any id in the inserted subtree already exists in the
//!   document (id uniqueness is per-document)
//! - Insert index is clamped to the child count
//!
//! ### RemoveNode
//! - Removes the node and all descendants
//!
//! ### ReplaceComponents
//! - Swaps the entire root forest; the persist/reload path always
//!   replaces the whole forest rather than diffing

use crate::node::ComponentNode;
use crate::page::PageDocument;
use crate::value::PropertyValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Semantic mutations over a [`PageDocument`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Patch a single property on a node (merge by key).
    SetProperty {
        node_id: String,
        key: String,
        value: PropertyValue,
    },

    /// Insert a new node under an existing parent at index.
    InsertChild {
        parent_id: String,
        index: usize,
        node: ComponentNode,
    },

    /// Append a new node to the root forest (the placement path).
    AppendRoot { node: ComponentNode },

    /// Remove a node and its descendants.
    RemoveNode { node_id: String },

    /// Replace the entire root forest.
    ReplaceComponents { components: Vec<ComponentNode> },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Parent not found: {0}")]
    ParentNotFound(String),

    #[error("Duplicate node id: {0}")]
    DuplicateId(String),
}

impl Mutation {
    /// Apply mutation to the document with validation.
    pub fn apply(&self, doc: &mut PageDocument) -> Result<(), MutationError> {
        self.validate(doc)?;

        match self {
            Mutation::SetProperty { node_id, key, value } => {
                let node = doc
                    .find_mut(node_id)
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.clone()))?;
                node.properties.insert(key.clone(), value.clone());
                Ok(())
            }

            Mutation::InsertChild {
                parent_id,
                index,
                node,
            } => {
                let parent = doc
                    .find_mut(parent_id)
                    .ok_or_else(|| MutationError::ParentNotFound(parent_id.clone()))?;
                let insert_index = (*index).min(parent.children.len());
                parent.children.insert(insert_index, node.clone());
                Ok(())
            }

            Mutation::AppendRoot { node } => {
                doc.components.push(node.clone());
                Ok(())
            }

            Mutation::RemoveNode { node_id } => {
                Self::remove_from_forest(doc, node_id)
                    .map(|_| ())
                    .ok_or_else(|| MutationError::NodeNotFound(node_id.clone()))
            }

            Mutation::ReplaceComponents { components } => {
                doc.components = components.clone();
                Ok(())
            }
        }
    }

    /// Validate without applying.
    pub fn validate(&self, doc: &PageDocument) -> Result<(), MutationError> {
        match self {
            Mutation::SetProperty { node_id, .. } => {
                if node_id.is_empty() || !doc.contains(node_id) {
                    return Err(MutationError::NodeNotFound(node_id.clone()));
                }
                Ok(())
            }

            Mutation::InsertChild { parent_id, node, .. } => {
                if !doc.contains(parent_id) {
                    return Err(MutationError::ParentNotFound(parent_id.clone()));
                }
                Self::check_fresh_ids(doc, node)
            }

            Mutation::AppendRoot { node } => Self::check_fresh_ids(doc, node),

            Mutation::RemoveNode { node_id } => {
                if !doc.contains(node_id) {
                    return Err(MutationError::NodeNotFound(node_id.clone()));
                }
                Ok(())
            }

            Mutation::ReplaceComponents { .. } => Ok(()),
        }
    }

    /// Every id in the inserted subtree must be new to the document.
    fn check_fresh_ids(doc: &PageDocument, node: &ComponentNode) -> Result<(), MutationError> {
        let mut ids = Vec::new();
        node.collect_ids(&mut ids);
        for id in ids {
            if doc.contains(id) {
                return Err(MutationError::DuplicateId(id.to_string()));
            }
        }
        Ok(())
    }

    /// Remove a node from the forest and return it.
    fn remove_from_forest(doc: &mut PageDocument, node_id: &str) -> Option<ComponentNode> {
        if let Some(pos) = doc.components.iter().position(|root| root.id == node_id) {
            return Some(doc.components.remove(pos));
        }
        for root in &mut doc.components {
            if let Some(removed) = Self::remove_from_node(root, node_id) {
                return Some(removed);
            }
        }
        None
    }

    fn remove_from_node(node: &mut ComponentNode, target_id: &str) -> Option<ComponentNode> {
        if let Some(pos) = node.children.iter().position(|c| c.id == target_id) {
            return Some(node.children.remove(pos));
        }
        for child in &mut node.children {
            if let Some(removed) = Self::remove_from_node(child, target_id) {
                return Some(removed);
            }
        }
        None
    }
}
