//! `strictjson` CLI — inspect, validate, and reshape JSON documents.
//!
//! ## Usage
//!
//! ```sh
//! # Print a document as an indented tree (stdin → stdout)
//! echo '{"name":"Ivan","marks":[4,5]}' | strictjson show
//!
//! # Same, reading a file
//! strictjson show -i person.json
//!
//! # Validate a document and print a one-line summary
//! strictjson check -i person.json
//!
//! # Turn [[tickers], [ids], [descriptions]] into an array of records
//! strictjson reshape -i broker.json -o records.json
//! ```

use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use strictjson_core::{Node, Slot};

#[derive(Parser)]
#[command(
    name = "strictjson",
    version,
    about = "Strict JSON inspection and reshaping CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a JSON document as an indented tree
    Show {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Parse a JSON document and print a one-line summary
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Reshape three parallel arrays into an array of ticker records
    Reshape {
        /// Input file holding [[tickers], [ids], [descriptions]]
        #[arg(short, long)]
        input: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { input } => {
            let node = load(input.as_deref())?;
            print!("{}", render_tree(&node));
        }
        Commands::Check { input } => {
            let node = load(input.as_deref())?;
            println!("{}", summary(&node));
        }
        Commands::Reshape { input, output } => {
            let node = load(Some(input.as_str()))?;
            let records = reshape(&node)?;
            let json = to_pretty_json(&records)?;
            write_output(output.as_deref(), &json)?;
        }
    }

    Ok(())
}

/// Parse from a file when a path is given, otherwise from stdin.
fn load(path: Option<&str>) -> Result<Node> {
    match path {
        Some(path) => {
            Node::parse_file(path).with_context(|| format!("Failed to parse file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Node::parse(&buf).context("Failed to parse JSON from stdin")
        }
    }
}

fn summary(node: &Node) -> String {
    let kind = if node.is_object() {
        "object"
    } else if node.is_array() {
        "array"
    } else {
        "empty node"
    };
    format!("{} with {} entries", kind, node.size())
}

/// Render `node` as a dash-indented tree.
///
/// Each entry is prefixed by a run of dashes (two per nesting level) and a
/// space. Object entries read `key : value`. A nested container ends the line
/// and lists its own entries one level deeper.
fn render_tree(node: &Node) -> String {
    let mut out = String::new();
    if node.is_empty() {
        out.push_str("NONE\n");
    } else {
        render_entries(node, 2, &mut out);
    }
    out
}

fn render_entries(node: &Node, depth: usize, out: &mut String) {
    let prefix = format!("{} ", "-".repeat(depth));
    match node {
        Node::Object(map) => {
            for (key, slot) in map {
                out.push_str(&prefix);
                out.push_str(key);
                out.push_str(" : ");
                render_slot(slot, depth, out);
            }
        }
        Node::Array(items) => {
            for slot in items {
                out.push_str(&prefix);
                render_slot(slot, depth, out);
            }
        }
        Node::Empty => out.push_str("NONE\n"),
    }
}

fn render_slot(slot: &Slot, depth: usize, out: &mut String) {
    match slot {
        Slot::Node(node) => {
            out.push('\n');
            render_entries(node, depth + 2, out);
        }
        Slot::String(s) => out.push_str(&format!("\"{}\"\n", s)),
        Slot::Number(n) => out.push_str(&format!("{}\n", n)),
        Slot::Bool(b) => out.push_str(&format!("{}\n", b)),
        Slot::Null => out.push_str("null\n"),
    }
}

/// Turn `[[tickers], [ids], [descriptions]]` into
/// `[{"ticker", "id", "description"}, ...]`, one record per position.
fn reshape(node: &Node) -> Result<Node> {
    if !node.is_array() {
        bail!("input JSON is not an array");
    }
    if node.size() != 3 {
        bail!("input JSON array size is not 3");
    }

    let tickers = column(node, 0)?;
    let ids = column(node, 1)?;
    let descriptions = column(node, 2)?;

    if tickers.size() != ids.size() || ids.size() != descriptions.size() {
        bail!("input JSON nested array sizes are not equal");
    }

    let mut records = Node::array();
    for i in 0..tickers.size() {
        let mut record = Node::object();
        record.insert("ticker", tickers.get(i)?.clone())?;
        record.insert("id", ids.get(i)?.clone())?;
        record.insert("description", descriptions.get(i)?.clone())?;
        records.append(record)?;
    }
    Ok(records)
}

fn column(node: &Node, index: usize) -> Result<&Node> {
    node.get(index)?
        .as_node()
        .filter(|n| n.is_array())
        .context("input JSON nested array sizes are not equal")
}

/// Pretty-print with four-space indentation.
fn to_pretty_json(node: &Node) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    node.serialize(&mut serializer)
        .context("Failed to serialize JSON")?;
    let mut json = String::from_utf8(buf).context("Serialized JSON is not UTF-8")?;
    json.push('\n');
    Ok(json)
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
