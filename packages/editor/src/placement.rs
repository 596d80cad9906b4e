//! # Placement Controller
//!
//! Thin adapter between the external drag-and-drop interaction layer
//! and the edit session. The interaction layer produces two event
//! shapes; the editor's sole reaction to a drop is a flat append of a
//! fresh node to the root forest — no reordering, nesting-on-drop, or
//! drop-target discrimination.

use crate::errors::EditorError;
use crate::session::EditSession;
use pageforge_registry::Primitive;
use serde::{Deserialize, Serialize};

/// Events produced by the palette interaction layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PaletteEvent {
    /// A palette item began dragging.
    DragStarted { component_type: String },

    /// A palette item was released over the canvas.
    Dropped { component_type: String },
}

/// Consumes palette events and drives placement on a session.
#[derive(Debug, Default)]
pub struct PlacementController {
    in_flight: Option<String>,
}

impl PlacementController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The component type currently being dragged, if any.
    pub fn dragging(&self) -> Option<&str> {
        self.in_flight.as_deref()
    }

    /// The palette's component types, in display order.
    pub fn palette_types() -> impl Iterator<Item = &'static str> {
        Primitive::ALL.iter().map(Primitive::name)
    }

    /// Handle a palette event. A drop returns the id of the newly
    /// placed node.
    pub fn handle(
        &mut self,
        session: &mut EditSession,
        event: PaletteEvent,
    ) -> Result<Option<String>, EditorError> {
        match event {
            PaletteEvent::DragStarted { component_type } => {
                self.in_flight = Some(component_type);
                Ok(None)
            }
            PaletteEvent::Dropped { component_type } => {
                self.in_flight = None;
                session.place(&component_type).map(Some)
            }
        }
    }
}
