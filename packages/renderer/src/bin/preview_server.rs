//! Standalone HTTP preview server.
//!
//! Usage:
//!   cargo run --features preview --bin preview_server -- path/to/page.json [--port 3030]
//!
//! Renders the page document at http://localhost:3030 without an editor
//! session: the document is taken at boot from the given file and also
//! embedded into the served page as the `window.__PAGE_CONFIG__`
//! global. The file is re-read on every request, so edits show up on
//! refresh.

use pageforge_document::PageDocument;
use pageforge_renderer::{render_page, write_page, HtmlOptions};
use std::fs;
use std::path::PathBuf;
use warp::Filter;

fn render_file(path: &PathBuf) -> String {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("⚠ Failed to read {}: {}", path.display(), e);
            return write_page(&render_page(None), HtmlOptions::default());
        }
    };

    match PageDocument::decode_str(&source) {
        Ok(document) => {
            let options = HtmlOptions {
                boot_config: Some(document.encode().to_string()),
                ..HtmlOptions::default()
            };
            write_page(&render_page(Some(&document)), options)
        }
        Err(e) => {
            eprintln!("⚠ Failed to decode {}: {}", path.display(), e);
            write_page(&render_page(None), HtmlOptions::default())
        }
    }
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <path/to/page.json> [--port 3030]", args[0]);
        std::process::exit(1);
    }

    let file_path = PathBuf::from(&args[1]);
    if !file_path.exists() {
        eprintln!("File not found: {}", file_path.display());
        std::process::exit(1);
    }

    let mut port: u16 = 3030;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    port = args[i + 1].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid port number: {}", args[i + 1]);
                        std::process::exit(1);
                    });
                    i += 2;
                } else {
                    eprintln!("--port requires a value");
                    std::process::exit(1);
                }
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                std::process::exit(1);
            }
        }
    }

    println!("📦 Pageforge Preview Server");
    println!("Serving: {}", file_path.display());
    println!("Open http://localhost:{}", port);

    let page = warp::path::end().map(move || warp::reply::html(render_file(&file_path)));

    warp::serve(page).run(([127, 0, 0, 1], port)).await;
}
