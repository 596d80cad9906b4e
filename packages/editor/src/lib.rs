//! # Pageforge Editor
//!
//! The page editing engine: sessions, property editing, placement.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ palette / canvas events (external UI)       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession + mutations             │
//! │  - Placement (drop → append root node)      │
//! │  - Property patches from editable fields    │
//! │  - Selection tracking                       │
//! │  - Persist/reload through the storage port  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: PageDocument → VNode canvas       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The document is source of truth**: the canvas render is a
//!    derived view recomputed after every mutation
//! 2. **Mutations apply in observed order**: no reordering or batching
//!    of structural edits
//! 3. **The editing surface never owns the tree**: it derives fields
//!    from a node and emits patches; the session applies them
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pageforge_editor::{EditSession, fields_for};
//!
//! let mut session = EditSession::new();
//! let id = session.place("Button")?;
//!
//! session.select(&id)?;
//! let node = session.selected_node().unwrap();
//! let fields = fields_for(node);
//!
//! session.patch_property(&id, fields[0].patch("World"))?;
//! let canvas = session.render();
//! ```

mod errors;
mod fields;
mod placement;
mod session;

pub use errors::EditorError;
pub use fields::{coerce_input, fields_for, EditableField, FieldKind, PropertyPatch};
pub use placement::{PaletteEvent, PlacementController};
pub use session::{EditSession, MutationResult};

// Re-export common types for convenience
pub use pageforge_document::{ComponentNode, Mutation, PageDocument, PropertyValue};
