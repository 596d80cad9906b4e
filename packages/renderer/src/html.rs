//! HTML serialization of rendered output, for the CLI and the
//! standalone preview process.

use crate::vdom::VNode;
use std::collections::BTreeMap;

/// Options for HTML output
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
    /// Pre-serialized page config JSON to expose as a boot-time global
    /// (`window.__PAGE_CONFIG__`) in full-page output
    pub boot_config: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            boot_config: None,
        }
    }
}

struct Context {
    options: HtmlOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: HtmlOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Serialize a rendered node to an HTML fragment.
pub fn write_node(node: &VNode, options: HtmlOptions) -> String {
    let mut ctx = Context::new(options);
    write_vnode(node, &mut ctx);
    ctx.get_output()
}

/// Serialize a rendered page to a standalone HTML document.
pub fn write_page(root: &VNode, options: HtmlOptions) -> String {
    let boot_config = options.boot_config.clone();
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line("<title>Page Preview</title>");
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.indent();
    if let Some(config) = boot_config {
        ctx.add_line(&format!(
            "<script>window.__PAGE_CONFIG__ = {};</script>",
            escape_script(&config)
        ));
    }
    write_vnode(root, &mut ctx);
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

fn write_vnode(node: &VNode, ctx: &mut Context) {
    match node {
        VNode::Text { content } => {
            ctx.add_line(&escape_text(content));
        }

        VNode::Error { message } => {
            ctx.add_line(&format!(
                "<div class=\"render-error\">{}</div>",
                escape_text(message)
            ));
        }

        VNode::Element {
            tag,
            attributes,
            styles,
            children,
            ..
        } => {
            let mut open = format!("<{}", tag);

            // Attribute order is sorted for stable output
            let sorted: BTreeMap<&String, &String> = attributes.iter().collect();
            for (name, value) in sorted {
                open.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
            }

            if !styles.is_empty() {
                let sorted_styles: BTreeMap<&String, &String> = styles.iter().collect();
                let style = sorted_styles
                    .into_iter()
                    .map(|(property, value)| format!("{}: {}", property, value))
                    .collect::<Vec<_>>()
                    .join("; ");
                open.push_str(&format!(" style=\"{}\"", escape_attr(&style)));
            }

            if is_void_tag(tag) {
                open.push('>');
                ctx.add_line(&open);
                return;
            }

            open.push('>');
            ctx.add_line(&open);
            ctx.indent();
            for child in children {
                write_vnode(child, ctx);
            }
            ctx.dedent();
            ctx.add_line(&format!("</{}>", tag));
        }
    }
}

fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
            | "source" | "track" | "wbr"
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// JSON embedded in a script body must not terminate the script tag.
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}
