use crate::node::ComponentNode;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The persisted page description: a forest of root component nodes
/// plus optional page-level styles.
///
/// There is no implicit root wrapper — the renderer supplies the outer
/// container. The version counter lives on the storage record, not
/// here: the exchanged document is exactly `{components, styles?}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageDocument {
    #[serde(default)]
    pub components: Vec<ComponentNode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<PageStyles>,
}

/// Page-level style attributes, applied to the outermost container only.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageStyles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<IndexMap<String, String>>,
}

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Invalid page document: {0}")]
    Decode(#[from] serde_json::Error),
}

impl PageDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a page document from its JSON wire form.
    pub fn decode(value: &serde_json::Value) -> Result<Self, DocumentError> {
        Ok(serde_json::from_value(value.clone())?)
    }

    pub fn decode_str(source: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Encode to the JSON wire form.
    pub fn encode(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Find a node by id anywhere in the forest.
    pub fn find(&self, id: &str) -> Option<&ComponentNode> {
        self.components.iter().find_map(|root| root.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut ComponentNode> {
        self.components.iter_mut().find_map(|root| root.find_mut(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Total node count across the forest.
    pub fn node_count(&self) -> usize {
        self.components.iter().map(ComponentNode::node_count).sum()
    }

    /// All node ids in the forest, pre-order.
    pub fn ids(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for root in &self.components {
            root.collect_ids(&mut out);
        }
        out
    }
}
