//! CLI tool to render a split tree saved from `/split/<word>`.
//!
//! Usage:
//!   wortteiler-render <tree.json>
//!   curl -s localhost:8080/split/handschuh | wortteiler-render - --format outline
//!
//! Writes HTML (the same markup the web UI builds) or an indented outline
//! to stdout. Set `RUST_LOG=debug` for decoding details on stderr.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wortteiler::{ClientConfig, Layout, LookupError, SplitNode, render_outline, render_result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Outline,
}

#[derive(Debug, Parser)]
#[command(name = "wortteiler-render", about = "Render a wortteiler split tree")]
struct Args {
    /// JSON tree file, or `-` for stdin.
    input: String,

    #[arg(long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Overrides the layout from the config file.
    #[arg(long, value_enum)]
    layout: Option<Layout>,

    /// Overrides max_definitions from the config file.
    #[arg(long)]
    max_definitions: Option<usize>,

    /// TOML client config.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn read_input(input: &str) -> io::Result<String> {
    if input == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        fs::read_to_string(input)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match ClientConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                process::exit(1);
            }
        },
        None => ClientConfig::default(),
    };
    if let Some(layout) = args.layout {
        config.layout = layout;
    }
    if let Some(n) = args.max_definitions {
        if n == 0 {
            eprintln!("Error: --max-definitions must be at least 1");
            process::exit(1);
        }
        config.max_definitions = n;
    }
    debug!(?config, "effective config");

    let body = match read_input(&args.input) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading tree '{}': {}", args.input, e);
            process::exit(1);
        }
    };

    let tree = match SplitNode::from_json(&body) {
        Ok(tree) => tree,
        Err(LookupError::Decode(e)) => {
            eprintln!("Error decoding tree '{}': {}", args.input, e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    debug!(nodes = tree.node_count(), "decoded tree");

    let output = match args.format {
        Format::Html => format!("{}\n", render_result(&tree, &config)),
        Format::Outline => render_outline(&tree, &config),
    };

    if let Err(e) = io::stdout().write_all(output.as_bytes()) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}
