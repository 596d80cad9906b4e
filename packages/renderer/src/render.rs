//! # Render Engine
//!
//! Transforms a component node tree into rendered output.
//!
//! ## Partial Rendering Contract
//!
//! **INVARIANT: one malformed node never blanks the page.**
//!
//! The public [`Renderer::render`] is total: every per-node fault — a
//! missing type, a type absent from the registry, a property value a
//! primitive cannot represent — is caught at that node's boundary and
//! replaced with an inline [`VNode::Error`] placeholder. Siblings and
//! ancestors render normally. Internally each node renders through
//! `Result<VNode, RenderFault>`; the tree walker substitutes the
//! placeholder at each child call rather than unwinding.
//!
//! ## Algorithm
//!
//! Depth-first, pre-order:
//!
//! 1. a node without a `type` is an invalid-component placeholder
//! 2. the type resolves against the registry; unknown types become an
//!    `Unknown component: {type}` placeholder
//! 3. node properties merge over the entry's declared defaults (node
//!    values win, including values of an unexpected kind — the merged
//!    bag is never coerced; each primitive decides what to do with a
//!    mismatched kind, falling back to its declared default)
//! 4. children render in sequence order, each isolated
//! 5. an exhaustive match over the primitive set produces the element,
//!    attaching rendered children where the primitive accepts content
//!
//! Rendering is a pure synchronous tree walk: same tree in, same output
//! out, no suspension points.

use crate::vdom::VNode;
use indexmap::IndexMap;
use pageforge_document::{format_number, ComponentNode, PropertyValue};
use pageforge_registry::{lookup, Primitive, RegistryEntry};
use thiserror::Error;
use tracing::{instrument, warn};

pub type RenderResult<T> = Result<T, RenderFault>;

/// A per-node rendering fault. Always recoverable: the walker converts
/// it into an inline placeholder at the faulting node only.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderFault {
    #[error("Invalid component: missing type")]
    MissingType,

    #[error("Unknown component: {0}")]
    UnknownType(String),

    #[error("Invalid value for '{property}' on {component}: {details}")]
    InvalidProperty {
        component: &'static str,
        property: &'static str,
        details: String,
    },
}

/// The recursive tree-to-output transformer.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Render one component node. Total: faults surface as inline
    /// [`VNode::Error`] placeholders, never as panics or early exits.
    #[instrument(skip(self, node), fields(component_type = %node.component_type, id = %node.id))]
    pub fn render(&self, node: &ComponentNode) -> VNode {
        match self.render_node(node) {
            Ok(vnode) => vnode,
            Err(fault) => {
                warn!(error = %fault, "Node render fault, substituting inline placeholder");
                VNode::error(fault.to_string())
            }
        }
    }

    fn render_node(&self, node: &ComponentNode) -> RenderResult<VNode> {
        if node.component_type.is_empty() {
            return Err(RenderFault::MissingType);
        }

        let entry = lookup(&node.component_type)
            .ok_or_else(|| RenderFault::UnknownType(node.component_type.clone()))?;

        let props = merge_properties(node, entry);

        // Each child renders through the total entry point, so a fault
        // in one child leaves its siblings intact.
        let children: Vec<VNode> = node.children.iter().map(|child| self.render(child)).collect();

        let rendered = render_primitive(entry, &props, children)?;

        Ok(if node.id.is_empty() {
            rendered
        } else {
            rendered.with_key(node.id.clone())
        })
    }
}

/// Merge node-supplied values over the entry's declared defaults.
/// Node values win; unspecified keys take the default; keys the entry
/// never declared are kept as-is.
fn merge_properties(
    node: &ComponentNode,
    entry: &'static RegistryEntry,
) -> IndexMap<String, PropertyValue> {
    let mut merged = IndexMap::new();
    for (name, value) in entry.defaults() {
        merged.insert(name.to_string(), value);
    }
    for (key, value) in &node.properties {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

fn str_prop(props: &IndexMap<String, PropertyValue>, entry: &RegistryEntry, name: &str) -> String {
    match props.get(name).and_then(PropertyValue::as_str) {
        Some(s) => s.to_string(),
        None => entry.default_str(name).unwrap_or("").to_string(),
    }
}

fn num_prop(props: &IndexMap<String, PropertyValue>, entry: &RegistryEntry, name: &str) -> Option<f64> {
    props
        .get(name)
        .and_then(PropertyValue::as_num)
        .or_else(|| entry.default_num(name))
}

fn bool_prop(props: &IndexMap<String, PropertyValue>, entry: &RegistryEntry, name: &str) -> bool {
    props
        .get(name)
        .and_then(PropertyValue::as_bool)
        .or_else(|| entry.default_bool(name))
        .unwrap_or(false)
}

/// A numeric value that must be finite when present.
fn finite_prop(
    props: &IndexMap<String, PropertyValue>,
    entry: &RegistryEntry,
    component: &'static str,
    name: &'static str,
) -> RenderResult<Option<f64>> {
    match num_prop(props, entry, name) {
        Some(n) if n.is_finite() => Ok(Some(n)),
        Some(n) => Err(RenderFault::InvalidProperty {
            component,
            property: name,
            details: format!("expected a finite number, got {}", n),
        }),
        None => Ok(None),
    }
}

fn class_list(base: &str, extra: &str) -> String {
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{} {}", base, extra)
    }
}

fn px(n: f64) -> String {
    format!("{}px", format_number(n))
}

/// Exhaustive dispatch over the fixed primitive set.
fn render_primitive(
    entry: &'static RegistryEntry,
    props: &IndexMap<String, PropertyValue>,
    children: Vec<VNode>,
) -> RenderResult<VNode> {
    match entry.primitive {
        Primitive::Button => {
            let variant = str_prop(props, entry, "variant");
            let mut el = VNode::element("button")
                .with_attr("class", format!("btn btn-{}", variant))
                .with_child(VNode::text(str_prop(props, entry, "text")));
            if bool_prop(props, entry, "disabled") {
                el = el.with_attr("disabled", "true");
            }
            Ok(el)
        }

        Primitive::Heading => {
            let level = num_prop(props, entry, "level").unwrap_or(1.0);
            if !level.is_finite() || level.fract() != 0.0 || !(1.0..=6.0).contains(&level) {
                return Err(RenderFault::InvalidProperty {
                    component: "Heading",
                    property: "level",
                    details: format!("expected an integer from 1 to 6, got {}", level),
                });
            }
            Ok(VNode::element(format!("h{}", level as i64))
                .with_child(VNode::text(str_prop(props, entry, "text"))))
        }

        Primitive::Paragraph => {
            Ok(VNode::element("p").with_child(VNode::text(str_prop(props, entry, "text"))))
        }

        Primitive::Image => {
            let mut el = VNode::element("img")
                .with_attr("src", str_prop(props, entry, "src"))
                .with_attr("alt", str_prop(props, entry, "alt"));
            if let Some(width) = finite_prop(props, entry, "Image", "width")? {
                el = el.with_attr("width", format_number(width));
            }
            if let Some(height) = finite_prop(props, entry, "Image", "height")? {
                el = el.with_attr("height", format_number(height));
            }
            Ok(el)
        }

        Primitive::Container => Ok(VNode::element("div")
            .with_attr("data-testid", "container")
            .with_attr(
                "class",
                class_list("container", &str_prop(props, entry, "className")),
            )
            .with_children(children)),

        Primitive::Section => Ok(VNode::element("section")
            .with_attr(
                "class",
                class_list("section", &str_prop(props, entry, "className")),
            )
            .with_children(children)),

        Primitive::Row => Ok(VNode::element("div")
            .with_attr("class", class_list("row", &str_prop(props, entry, "className")))
            .with_children(children)),

        Primitive::Column => {
            let mut el = VNode::element("div").with_attr(
                "class",
                class_list("column", &str_prop(props, entry, "className")),
            );
            if let Some(span) = finite_prop(props, entry, "Column", "span")? {
                el = el.with_style("flex", format_number(span));
            }
            Ok(el.with_children(children))
        }

        Primitive::Divider => {
            let orientation = str_prop(props, entry, "orientation");
            Ok(VNode::element("hr").with_attr("class", format!("divider divider-{}", orientation)))
        }

        Primitive::Spacer => {
            let height = finite_prop(props, entry, "Spacer", "height")?.unwrap_or(20.0);
            let width = finite_prop(props, entry, "Spacer", "width")?.unwrap_or(0.0);
            Ok(VNode::element("div")
                .with_attr("data-testid", "spacer")
                .with_style("height", px(height))
                .with_style("width", px(width))
                .with_style("min-height", px(height))
                .with_style("min-width", px(width)))
        }
    }
}
