//! # Layout Engine
//!
//! The whole-document entry point: wraps the render engine with
//! document-level absent/empty handling and the outer page container.

use crate::render::Renderer;
use crate::vdom::VNode;
use pageforge_document::PageDocument;
use tracing::{debug, instrument};

/// Render a full page document.
///
/// A missing document and an empty component forest are distinct,
/// user-visible states:
///
/// - `None` renders the "No page configuration provided" placeholder
/// - an empty `components` forest renders the "No components to
///   display" empty state inside the page container
/// - otherwise every root node renders in sequence order inside a
///   container carrying the document's `styles.container` attributes
#[instrument(skip(document), fields(present = document.is_some()))]
pub fn render_page(document: Option<&PageDocument>) -> VNode {
    let Some(document) = document else {
        debug!("No page configuration, rendering placeholder");
        return VNode::element("div")
            .with_attr("class", "layout-engine")
            .with_child(
                VNode::element("p").with_child(VNode::text("No page configuration provided")),
            );
    };

    let mut root = VNode::element("div").with_attr("class", "layout-engine");
    if let Some(container) = document.styles.as_ref().and_then(|s| s.container.as_ref()) {
        for (property, value) in container {
            root = root.with_style(property.clone(), value.clone());
        }
    }

    if document.components.is_empty() {
        debug!("Empty component forest, rendering empty state");
        return root.with_child(
            VNode::element("div")
                .with_attr("class", "empty-page")
                .with_child(VNode::text("No components to display")),
        );
    }

    let renderer = Renderer::new();
    let children: Vec<VNode> = document
        .components
        .iter()
        .map(|component| renderer.render(component))
        .collect();

    debug!(roots = children.len(), "Page render complete");
    root.with_children(children)
}
