mod commands;

use clap::{Parser, Subcommand};
use commands::{check, render, CheckArgs, RenderArgs};

/// Pageforge CLI - render and inspect page documents
#[derive(Parser, Debug)]
#[command(name = "pageforge")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a page document to standalone HTML
    Render(RenderArgs),

    /// Check a page document for problems without rendering it
    Check(CheckArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Render(args) => render(args),
        Command::Check(args) => check(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
