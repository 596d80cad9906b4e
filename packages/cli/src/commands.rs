use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use pageforge_document::{ComponentNode, PageDocument};
use pageforge_registry::lookup;
use pageforge_renderer::{render_page, write_page, HtmlOptions};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Page document JSON file
    pub input: PathBuf,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit compact HTML without indentation
    #[arg(long)]
    pub compact: bool,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Page document JSON file
    pub input: PathBuf,
}

pub fn render(args: RenderArgs) -> Result<()> {
    let document = load_document(&args.input)?;

    let options = HtmlOptions {
        pretty: !args.compact,
        ..HtmlOptions::default()
    };
    let html = write_page(&render_page(Some(&document)), options);

    match args.output {
        Some(path) => {
            fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "  {} {} → {}",
                "✓".green(),
                args.input.display(),
                path.display()
            );
        }
        None => print!("{}", html),
    }

    Ok(())
}

pub fn check(args: CheckArgs) -> Result<()> {
    let document = load_document(&args.input)?;

    println!("{}", "🔎 Checking page document...".bright_blue().bold());

    let mut findings = Vec::new();
    for root in &document.components {
        check_node(root, &mut findings);
    }

    let ids = document.ids();
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            findings.push(format!("duplicate node id '{}'", id));
        }
    }

    if findings.is_empty() {
        println!(
            "{}",
            format!("✓ No problems in {} nodes", document.node_count()).green()
        );
        return Ok(());
    }

    for finding in &findings {
        eprintln!("  {} {}", "✗".red(), finding.red());
    }
    Err(anyhow!("{} problem(s) found", findings.len()))
}

fn check_node(node: &ComponentNode, findings: &mut Vec<String>) {
    if node.id.is_empty() {
        findings.push(format!(
            "node of type '{}' has no id",
            if node.component_type.is_empty() {
                "<missing>"
            } else {
                node.component_type.as_str()
            }
        ));
    }

    if node.component_type.is_empty() {
        findings.push(format!("node '{}' has no type", node.id));
    } else {
        match lookup(&node.component_type) {
            None => findings.push(format!(
                "node '{}' has unknown type '{}'",
                node.id, node.component_type
            )),
            Some(entry) => {
                for (key, value) in &node.properties {
                    if let Some(spec) = entry.prop(key) {
                        if spec.kind != value.kind() {
                            findings.push(format!(
                                "node '{}': property '{}' expects {:?}, got {:?}",
                                node.id,
                                key,
                                spec.kind,
                                value.kind()
                            ));
                        }
                    }
                }
            }
        }
    }

    for child in &node.children {
        check_node(child, findings);
    }
}

fn load_document(path: &PathBuf) -> Result<PageDocument> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    PageDocument::decode_str(&source)
        .with_context(|| format!("Failed to decode {}", path.display()))
}
