/// Tests for the whole-document layout entry point.
use crate::layout::render_page;
use crate::vdom::VNode;
use pageforge_document::PageDocument;
use serde_json::json;

fn decode(value: serde_json::Value) -> PageDocument {
    PageDocument::decode(&value).unwrap()
}

#[test]
fn test_missing_document_renders_no_configuration_marker() {
    let vnode = render_page(None);

    assert_eq!(vnode.attribute("class"), Some("layout-engine"));
    assert_eq!(vnode.text_content(), "No page configuration provided");
}

#[test]
fn test_empty_forest_renders_empty_state_marker() {
    let doc = decode(json!({ "components": [] }));
    let vnode = render_page(Some(&doc));

    assert_eq!(vnode.attribute("class"), Some("layout-engine"));
    let empty = vnode
        .find(&|n| n.attribute("class") == Some("empty-page"))
        .expect("empty state rendered");
    assert_eq!(empty.text_content(), "No components to display");
}

#[test]
fn test_empty_and_missing_markers_are_distinct() {
    let empty = render_page(Some(&PageDocument::new()));
    let missing = render_page(None);

    assert_ne!(empty, missing);
    assert_eq!(missing.text_content(), "No page configuration provided");
    assert_eq!(empty.text_content(), "No components to display");
}

#[test]
fn test_absent_components_field_is_empty_state() {
    let doc = decode(json!({}));
    let vnode = render_page(Some(&doc));
    assert!(vnode.find(&|n| n.attribute("class") == Some("empty-page")).is_some());
}

#[test]
fn test_heading_and_paragraph_render_as_ordered_siblings() {
    let doc = decode(json!({
        "components": [
            { "type": "Heading", "properties": { "text": "Title", "level": 1 } },
            { "type": "Paragraph", "properties": { "text": "Description" } }
        ]
    }));

    let vnode = render_page(Some(&doc));
    let children = vnode.children();

    assert_eq!(children.len(), 2);
    assert_eq!(children[0].tag(), Some("h1"));
    assert_eq!(children[0].text_content(), "Title");
    assert_eq!(children[1].tag(), Some("p"));
    assert_eq!(children[1].text_content(), "Description");
}

#[test]
fn test_container_styles_apply_to_outer_wrapper_only() {
    let doc = decode(json!({
        "components": [{ "id": "p1", "type": "Paragraph" }],
        "styles": { "container": { "background": "#fafafa", "padding": "24px" } }
    }));

    let vnode = render_page(Some(&doc));
    match &vnode {
        VNode::Element { styles, children, .. } => {
            assert_eq!(styles.get("background").map(String::as_str), Some("#fafafa"));
            assert_eq!(styles.get("padding").map(String::as_str), Some("24px"));
            match &children[0] {
                VNode::Element { styles, .. } => assert!(styles.is_empty()),
                other => panic!("Expected Element, got {:?}", other),
            }
        }
        other => panic!("Expected Element, got {:?}", other),
    }
}

#[test]
fn test_roots_keyed_by_node_id() {
    let doc = decode(json!({
        "components": [
            { "id": "first", "type": "Divider" },
            { "id": "second", "type": "Divider" }
        ]
    }));

    let vnode = render_page(Some(&doc));
    let keys: Vec<Option<&str>> = vnode
        .children()
        .iter()
        .map(|child| match child {
            VNode::Element { key, .. } => key.as_deref(),
            _ => None,
        })
        .collect();

    assert_eq!(keys, vec![Some("first"), Some("second")]);
}

#[test]
fn test_page_render_is_idempotent() {
    let doc = decode(json!({
        "components": [
            { "id": "c1", "type": "Container", "children": [
                { "id": "b1", "type": "Button", "properties": { "text": "Go" } },
                { "id": "x1", "type": "Unknowable" }
            ]}
        ],
        "styles": { "container": { "margin": "0 auto" } }
    }));

    assert_eq!(render_page(Some(&doc)), render_page(Some(&doc)));
}

#[test]
fn test_document_round_trip_through_wire_format() {
    let doc = decode(json!({
        "components": [
            { "id": "c1", "type": "Container", "properties": { "className": "hero" }, "children": [
                { "id": "h1", "type": "Heading", "properties": { "text": "Hi", "level": 2 } }
            ]}
        ],
        "styles": { "container": { "background": "#fff" } }
    }));

    let back = PageDocument::decode(&doc.encode()).unwrap();
    assert_eq!(doc, back);
    // And the re-decoded document renders identically
    assert_eq!(render_page(Some(&doc)), render_page(Some(&back)));
}
