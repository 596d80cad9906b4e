/// Tests for HTML serialization of rendered output.
use crate::html::{write_node, write_page, HtmlOptions};
use crate::layout::render_page;
use crate::vdom::VNode;
use pageforge_document::PageDocument;
use serde_json::json;

fn compact() -> HtmlOptions {
    HtmlOptions {
        pretty: false,
        ..HtmlOptions::default()
    }
}

#[test]
fn test_element_with_sorted_attributes() {
    let node = VNode::element("button")
        .with_attr("disabled", "true")
        .with_attr("class", "btn btn-primary")
        .with_child(VNode::text("Go"));

    let html = write_node(&node, compact());
    assert_eq!(
        html,
        "<button class=\"btn btn-primary\" disabled=\"true\">Go</button>"
    );
}

#[test]
fn test_text_and_attributes_are_escaped() {
    let node = VNode::element("p")
        .with_attr("title", "a \"quoted\" <value>")
        .with_child(VNode::text("1 < 2 && 3 > 2"));

    let html = write_node(&node, compact());
    assert!(html.contains("title=\"a &quot;quoted&quot; &lt;value&gt;\""));
    assert!(html.contains("1 &lt; 2 &amp;&amp; 3 &gt; 2"));
}

#[test]
fn test_void_tags_have_no_closing_tag() {
    let node = VNode::element("img").with_attr("src", "/x.png");
    let html = write_node(&node, compact());
    assert_eq!(html, "<img src=\"/x.png\">");
}

#[test]
fn test_styles_serialize_as_inline_style_attribute() {
    let node = VNode::element("div")
        .with_style("height", "20px")
        .with_style("min-height", "20px");

    let html = write_node(&node, compact());
    assert!(html.contains("style=\"height: 20px; min-height: 20px\""));
}

#[test]
fn test_error_node_renders_inline_placeholder() {
    let node = VNode::error("Unknown component: Bogus");
    let html = write_node(&node, compact());
    assert_eq!(
        html,
        "<div class=\"render-error\">Unknown component: Bogus</div>"
    );
}

#[test]
fn test_write_page_produces_standalone_document() {
    let doc = PageDocument::decode(&json!({
        "components": [{ "id": "h", "type": "Heading", "properties": { "text": "Title" } }]
    }))
    .unwrap();

    let html = write_page(&render_page(Some(&doc)), HtmlOptions::default());

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<meta charset=\"UTF-8\">"));
    assert!(html.contains("Title"));
    assert!(html.ends_with("</html>\n"));
}

#[test]
fn test_boot_config_global_is_embedded_and_script_safe() {
    let config = r#"{"components":[{"type":"Paragraph","properties":{"text":"</script>"}}]}"#;
    let options = HtmlOptions {
        boot_config: Some(config.to_string()),
        ..HtmlOptions::default()
    };

    let html = write_page(&VNode::element("div"), options);

    assert!(html.contains("window.__PAGE_CONFIG__ = "));
    assert!(
        !html.contains("\"</script>\""),
        "embedded config must not close the script tag"
    );
}

#[test]
fn test_pretty_output_indents_children() {
    let node = VNode::element("section").with_child(VNode::element("p").with_child(VNode::text("x")));
    let html = write_node(&node, HtmlOptions::default());
    assert_eq!(html, "<section>\n  <p>\n    x\n  </p>\n</section>\n");
}
