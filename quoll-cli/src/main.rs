//! Quoll selector inspector CLI
//!
//! Parses simple selectors from the command line and prints their token
//! decomposition and attribute dependency set, for debugging selector
//! handling in host integrations.

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use quoll_selector::{Selector, SelectorRegistry};

/// Quoll — inspect simple selector token decomposition
#[derive(Parser, Debug)]
#[command(name = "quoll")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r"EXAMPLES:
    # Token table for one selector
    quoll '#id.cls[data-x=1]'

    # Several selectors share one registry
    quoll '.foo' ':not(.hidden)'

    # Machine-readable output
    quoll --json '[href^=http]'
")]
struct Cli {
    /// Selector strings to parse
    #[arg(value_name = "SELECTOR", required = true)]
    selectors: Vec<String>,

    /// Emit machine-readable JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut registry = SelectorRegistry::new();

    let mut failed = false;
    for text in &cli.selectors {
        match registry.get(text) {
            Ok(selector) => {
                if cli.json {
                    print_json(&selector)?;
                } else {
                    print_table(&selector);
                }
            }
            Err(error) => {
                eprintln!("{} {error}", "error:".red().bold());
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

/// Sorted dependency set, for stable output.
fn sorted_attributes(selector: &Selector) -> Vec<&str> {
    let mut attributes: Vec<&str> = selector
        .dependent_attributes()
        .iter()
        .map(String::as_str)
        .collect();
    attributes.sort_unstable();
    attributes
}

/// Print one selector as an aligned token table.
fn print_table(selector: &Selector) {
    println!("=== {} ===", selector.source().bold());
    for token in selector.tokens() {
        let kind = token.kind.to_string();
        let negated = if token.negated { "negated" } else { "" };
        let attribute = token.attribute_name().unwrap_or("-");
        println!("{kind:<10} {:<24} {negated:<8} {attribute}", token.lexeme);
    }
    println!("depends on: {}", sorted_attributes(selector).join(", "));
}

/// Print one selector as pretty JSON.
fn print_json(selector: &Selector) -> Result<()> {
    let dump = serde_json::json!({
        "source": selector.source(),
        "tokens": selector.tokens(),
        "dependentAttributes": sorted_attributes(selector),
    });
    println!("{}", serde_json::to_string_pretty(&dump)?);
    Ok(())
}
