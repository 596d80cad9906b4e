//! # Pageforge Renderer
//!
//! Turns page documents into renderable output.
//!
//! ## Purpose
//!
//! The renderer is a small interpreter over the page description: it
//! walks a component node tree, resolves each node's type against the
//! registry, merges bound properties over declared defaults, and
//! produces a [`VNode`] tree. The editor canvas and the standalone
//! preview call the same [`render_page`] entry point with the same
//! contract.
//!
//! ## Determinism Contract
//!
//! **INVARIANT: rendering is fully deterministic and idempotent.**
//!
//! For any document, `render_page` produces structurally identical
//! output on every invocation:
//!
//! - Same tree → same VNode structure
//! - No time/random/environment dependence
//! - No suspension points; a render is a bounded synchronous walk
//!   proportional to tree size
//!
//! ## Failure Isolation
//!
//! Per-node faults (missing type, unknown type, unrepresentable
//! property values) become inline [`VNode::Error`] placeholders at the
//! faulting node only. See `render` module docs for the full contract;
//! `tests_isolation.rs` validates it.

pub mod html;
pub mod layout;
pub mod render;
pub mod vdom;

#[cfg(test)]
mod tests_render;

#[cfg(test)]
mod tests_layout;

#[cfg(test)]
mod tests_isolation;

#[cfg(test)]
mod tests_html;

pub use html::{write_node, write_page, HtmlOptions};
pub use layout::render_page;
pub use render::{RenderFault, RenderResult, Renderer};
pub use vdom::VNode;
