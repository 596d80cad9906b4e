/// Tests for single-node rendering: registry resolution, default
/// merging, and the shapes each primitive produces.
use crate::render::Renderer;
use crate::vdom::VNode;
use pageforge_document::ComponentNode;

fn render(node: &ComponentNode) -> VNode {
    Renderer::new().render(node)
}

#[test]
fn test_button_defaults_applied_for_omitted_properties() {
    let vnode = render(&ComponentNode::new("btn-1", "Button"));

    assert_eq!(vnode.tag(), Some("button"));
    assert_eq!(vnode.attribute("class"), Some("btn btn-primary"));
    assert_eq!(vnode.attribute("disabled"), None);
    assert_eq!(vnode.text_content(), "Button");
}

#[test]
fn test_node_properties_win_over_defaults() {
    let node = ComponentNode::new("btn-1", "Button")
        .with_property("text", "Click me")
        .with_property("variant", "outline")
        .with_property("disabled", true);
    let vnode = render(&node);

    assert_eq!(vnode.attribute("class"), Some("btn btn-outline"));
    assert_eq!(vnode.attribute("disabled"), Some("true"));
    assert_eq!(vnode.text_content(), "Click me");
}

#[test]
fn test_unknown_type_renders_placeholder_with_type_name() {
    let vnode = render(&ComponentNode::new("x", "Bogus"));

    match vnode {
        VNode::Error { message } => {
            assert!(message.contains("Bogus"), "placeholder should name the type: {}", message);
        }
        other => panic!("Expected Error node, got {:?}", other),
    }
}

#[test]
fn test_missing_type_renders_invalid_placeholder() {
    let node: ComponentNode = serde_json::from_str(r#"{"id":"odd"}"#).unwrap();
    let vnode = render(&node);

    match vnode {
        VNode::Error { message } => assert!(message.contains("missing type")),
        other => panic!("Expected Error node, got {:?}", other),
    }
}

#[test]
fn test_heading_level_selects_tag() {
    let node = ComponentNode::new("h", "Heading")
        .with_property("text", "Title")
        .with_property("level", 3.0);
    let vnode = render(&node);

    assert_eq!(vnode.tag(), Some("h3"));
    assert_eq!(vnode.text_content(), "Title");
}

#[test]
fn test_heading_level_out_of_range_is_inline_fault() {
    let node = ComponentNode::new("h", "Heading").with_property("level", 9.0);
    let vnode = render(&node);

    match vnode {
        VNode::Error { message } => {
            assert!(message.contains("level"), "diagnostic should name the property: {}", message);
        }
        other => panic!("Expected Error node, got {:?}", other),
    }
}

#[test]
fn test_wrong_kind_value_falls_back_to_declared_default() {
    // Property bags pass mismatched kinds through untouched; the
    // primitive renderer falls back to its declared default.
    let heading = render(&ComponentNode::new("h", "Heading").with_property("level", "two"));
    assert_eq!(heading.tag(), Some("h1"));

    let button = render(&ComponentNode::new("b", "Button").with_property("text", 42.0));
    assert_eq!(button.text_content(), "Button");
}

#[test]
fn test_image_numeric_attributes_format_without_fraction() {
    let node = ComponentNode::new("img-1", "Image")
        .with_property("src", "/logo.png")
        .with_property("width", 150.0)
        .with_property("height", 62.5);
    let vnode = render(&node);

    assert_eq!(vnode.tag(), Some("img"));
    assert_eq!(vnode.attribute("src"), Some("/logo.png"));
    assert_eq!(vnode.attribute("alt"), Some("Image"));
    assert_eq!(vnode.attribute("width"), Some("150"));
    assert_eq!(vnode.attribute("height"), Some("62.5"));
}

#[test]
fn test_spacer_defaults_to_declared_dimensions() {
    let vnode = render(&ComponentNode::new("sp", "Spacer"));

    match &vnode {
        VNode::Element { styles, .. } => {
            assert_eq!(styles.get("height").map(String::as_str), Some("20px"));
            assert_eq!(styles.get("width").map(String::as_str), Some("0px"));
            assert_eq!(styles.get("min-height").map(String::as_str), Some("20px"));
        }
        other => panic!("Expected Element, got {:?}", other),
    }
}

#[test]
fn test_divider_orientation_class() {
    let vnode = render(
        &ComponentNode::new("d", "Divider").with_property("orientation", "vertical"),
    );
    assert_eq!(vnode.tag(), Some("hr"));
    assert_eq!(vnode.attribute("class"), Some("divider divider-vertical"));
}

#[test]
fn test_rendered_element_keyed_by_node_id() {
    let vnode = render(&ComponentNode::new("para-7", "Paragraph"));
    match vnode {
        VNode::Element { key, .. } => assert_eq!(key.as_deref(), Some("para-7")),
        other => panic!("Expected Element, got {:?}", other),
    }
}

#[test]
fn test_deep_nesting_reaches_leaf_content() {
    // Container → Section → Row → Column → Button
    let tree = ComponentNode::new("c", "Container").with_child(
        ComponentNode::new("s", "Section").with_child(
            ComponentNode::new("r", "Row").with_child(
                ComponentNode::new("col", "Column").with_child(
                    ComponentNode::new("b", "Button").with_property("text", "Deep"),
                ),
            ),
        ),
    );

    let vnode = render(&tree);
    assert_eq!(vnode.tag(), Some("div"));
    assert_eq!(vnode.attribute("data-testid"), Some("container"));
    assert_eq!(vnode.text_content(), "Deep");

    let button = vnode
        .find(&|n| n.tag() == Some("button"))
        .expect("leaf button reachable from root output");
    assert_eq!(button.text_content(), "Deep");
}

#[test]
fn test_leaf_primitive_ignores_children() {
    let node = ComponentNode::new("p", "Paragraph")
        .with_property("text", "Body")
        .with_child(ComponentNode::new("b", "Button"));
    let vnode = render(&node);

    assert_eq!(vnode.children().len(), 1);
    assert_eq!(vnode.text_content(), "Body");
}

#[test]
fn test_render_is_idempotent() {
    let tree = ComponentNode::new("c", "Container")
        .with_property("className", "hero")
        .with_child(ComponentNode::new("h", "Heading").with_property("text", "Title"))
        .with_child(ComponentNode::new("x", "Mystery"));

    let first = render(&tree);
    let second = render(&tree);
    assert_eq!(first, second);
}
