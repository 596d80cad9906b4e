//! # Property Editing Surface
//!
//! Derives editable fields from a selected node's current property
//! values and coerces raw field input back into property patches.
//!
//! Field kinds follow the *value's* runtime kind, not the registry's
//! declared kind: a boolean value gets a toggle, a number gets a
//! numeric field, anything else a text field. Fields appear in the
//! property bag's own insertion order, and properties not yet set are
//! not shown until explicitly present — by design, the surface reflects
//! what the node actually carries.
//!
//! The surface never owns the tree: it emits [`PropertyPatch`]es that
//! the session applies as merge-by-key mutations.

use pageforge_document::{ComponentNode, PropertyKind, PropertyValue};

/// Editor control kind for one property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Toggle,
    Number,
    Text,
}

/// One editable field derived from a node property.
#[derive(Debug, Clone, PartialEq)]
pub struct EditableField {
    pub key: String,
    pub kind: FieldKind,
    pub value: PropertyValue,
}

/// A key/value patch emitted by a field change, merged into the node's
/// property bag by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyPatch {
    pub key: String,
    pub value: PropertyValue,
}

impl EditableField {
    /// Coerce raw field input into a patch for this field.
    pub fn patch(&self, raw: &str) -> PropertyPatch {
        PropertyPatch {
            key: self.key.clone(),
            value: coerce_input(self.kind, raw),
        }
    }
}

/// Fields for the node's current properties, in insertion order.
pub fn fields_for(node: &ComponentNode) -> Vec<EditableField> {
    node.properties
        .iter()
        .map(|(key, value)| EditableField {
            key: key.clone(),
            kind: match value.kind() {
                PropertyKind::Bool => FieldKind::Toggle,
                PropertyKind::Num => FieldKind::Number,
                PropertyKind::Str => FieldKind::Text,
            },
            value: value.clone(),
        })
        .collect()
}

/// Kind-driven input coercion, one explicit arm per field kind.
///
/// Unparseable numeric input coerces to zero so patched documents
/// always stay JSON-representable.
pub fn coerce_input(kind: FieldKind, raw: &str) -> PropertyValue {
    match kind {
        FieldKind::Toggle => PropertyValue::Bool(matches!(raw, "true" | "1" | "on")),
        FieldKind::Number => PropertyValue::Num(raw.trim().parse().unwrap_or(0.0)),
        FieldKind::Text => PropertyValue::Str(raw.to_string()),
    }
}
