/// Tests for per-node failure isolation.
///
/// These verify the partial-rendering contract: a malformed node is
/// replaced by an inline placeholder while siblings and ancestors
/// render normally. One bad node must never blank the page.
use crate::render::Renderer;
use crate::vdom::VNode;
use pageforge_document::ComponentNode;

fn render(node: &ComponentNode) -> VNode {
    Renderer::new().render(node)
}

#[test]
fn test_unknown_child_renders_inline_inside_container() {
    let tree = ComponentNode::new("c", "Container").with_child(ComponentNode::new("b", "Bogus"));

    let vnode = render(&tree);

    // The Container itself is not omitted
    assert_eq!(vnode.tag(), Some("div"));
    assert_eq!(vnode.attribute("data-testid"), Some("container"));

    let children = vnode.children();
    assert_eq!(children.len(), 1);
    match &children[0] {
        VNode::Error { message } => {
            assert!(message.contains("Unknown component"));
            assert!(message.contains("Bogus"));
        }
        other => panic!("Expected Error node, got {:?}", other),
    }
}

#[test]
fn test_faulting_sibling_leaves_others_intact() {
    let tree = ComponentNode::new("row", "Row")
        .with_child(ComponentNode::new("a", "Paragraph").with_property("text", "First"))
        .with_child(ComponentNode::new("bad", "Heading").with_property("level", 42.0))
        .with_child(ComponentNode::new("b", "Paragraph").with_property("text", "Last"));

    let vnode = render(&tree);
    let children = vnode.children();

    assert_eq!(children.len(), 3, "fault must not drop siblings");
    assert_eq!(children[0].text_content(), "First");
    assert!(children[1].is_error(), "faulting node becomes a placeholder");
    assert_eq!(children[2].text_content(), "Last");
}

#[test]
fn test_mixed_valid_and_invalid_children_keep_order() {
    let tree = ComponentNode::new("sec", "Section")
        .with_child(ComponentNode::new("p1", "Paragraph").with_property("text", "Valid text"))
        .with_child(ComponentNode::new("u1", "Widget"))
        .with_child(ComponentNode::new("p2", "Paragraph").with_property("text", "Another valid"))
        .with_child(ComponentNode::new("u2", "Gadget"))
        .with_child(ComponentNode::new("p3", "Paragraph").with_property("text", "Final valid"));

    let vnode = render(&tree);
    let children = vnode.children();
    assert_eq!(children.len(), 5);

    assert_eq!(children[0].text_content(), "Valid text");
    assert!(children[1].is_error());
    assert_eq!(children[2].text_content(), "Another valid");
    assert!(children[3].is_error());
    assert_eq!(children[4].text_content(), "Final valid");
}

#[test]
fn test_deep_fault_does_not_unwind_ancestors() {
    let tree = ComponentNode::new("c", "Container").with_child(
        ComponentNode::new("s", "Section").with_child(
            ComponentNode::new("r", "Row").with_child(ComponentNode::new("bad", "Nope")),
        ),
    );

    let vnode = render(&tree);

    // Every ancestor renders; only the leaf is a placeholder
    let section = vnode.find(&|n| n.tag() == Some("section")).expect("section rendered");
    let row = section.find(&|n| n.attribute("class") == Some("row")).expect("row rendered");
    assert!(row.children()[0].is_error());
}

#[test]
fn test_whole_tree_of_unknowns_never_panics() {
    let mut tree = ComponentNode::new("root", "Mystery");
    for i in 0..20 {
        tree = ComponentNode::new(format!("wrap-{}", i), "Mystery").with_child(tree);
    }

    let vnode = render(&tree);
    assert!(vnode.is_error());
}
