use crate::value::PropertyValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One instance of a primitive in the page tree.
///
/// The `type` field selects a registry entry by name and is *not*
/// validated here — unknown types are a recoverable render-time
/// condition, not a construction error. An absent `children` array and
/// an empty one are equivalent; property insertion order is preserved
/// because the editing surface presents fields in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentNode {
    /// Unique within a document; assigned at creation, never reused
    /// after deletion. Used as the stable render key and the target for
    /// property patches.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Registry type name (e.g. "Button"). Empty means malformed.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub component_type: String,

    /// Bound property values; absent keys fall back to the registry
    /// defaults at render time.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, PropertyValue>,

    /// Child nodes in render order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ComponentNode>,
}

impl ComponentNode {
    pub fn new(id: impl Into<String>, component_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            component_type: component_type.into(),
            properties: IndexMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: ComponentNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<ComponentNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Find a node by id in this subtree.
    pub fn find(&self, id: &str) -> Option<&ComponentNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Find a node by id in this subtree, mutably.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut ComponentNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Number of nodes in this subtree, including self.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ComponentNode::node_count).sum::<usize>()
    }

    /// All ids in this subtree, pre-order.
    pub fn collect_ids<'a>(&'a self, out: &mut Vec<&'a str>) {
        if !self.id.is_empty() {
            out.push(&self.id);
        }
        for child in &self.children {
            child.collect_ids(out);
        }
    }
}
