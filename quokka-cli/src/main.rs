//! Quokka CLI
//!
//! Parse an HTML document and inspect the resulting node tree.
//!
//! Usage:
//!   quokka <file>             Print the parsed tree and a node-count summary
//!   quokka <file> --tokens    Also dump the token stream first
//!   quokka <file> --json      Output the forest as JSON instead
//!   quokka --html '<h1>Hello</h1>'

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use owo_colors::OwoColorize;
use quokka_common::source::HtmlSource;
use quokka_dom::count_nodes;
use quokka_html::{build_forest, print_forest, tokenize};

/// Parse an HTML document and inspect the resulting node tree.
#[derive(Parser)]
#[command(name = "quokka", version, about)]
struct Cli {
    /// HTML file to parse.
    #[arg(required_unless_present = "html", conflicts_with = "html")]
    file: Option<PathBuf>,

    /// Parse an inline HTML string instead of a file.
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Dump the token stream before the tree.
    #[arg(long)]
    tokens: bool,

    /// Output the parsed forest as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = if let Some(html) = cli.html {
        HtmlSource::Inline(html)
    } else if let Some(path) = cli.file {
        HtmlSource::Path(path)
    } else {
        // clap's required_unless_present guard makes this unreachable.
        bail!("provide an HTML file or --html");
    };

    let html = source.read().context("could not load document")?;
    let tokens = tokenize(&html);

    if cli.tokens {
        println!("{}", "=== Tokens ===".bold());
        for (index, token) in tokens.iter().enumerate() {
            println!("{index:>4} [{}] {token}", token.kind());
        }
        println!();
    }

    let forest = build_forest(tokens);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&forest)?);
        return Ok(());
    }

    println!("{}", "=== Node Tree ===".bold());
    print_forest(&forest, 0);

    let counts = count_nodes(&forest);
    println!("\n{counts}");

    Ok(())
}
