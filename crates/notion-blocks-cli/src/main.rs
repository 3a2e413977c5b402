//! `nblocks`: inspect and build Notion block JSON from the command line.
//!
//! Usage:
//!   # Outline a block tree fetched with curl
//!   curl ... /v1/blocks/<id>/children | nblocks render
//!
//!   # Parse and re-emit (checks the JSON round-trips)
//!   nblocks normalize page.json --compact
//!
//!   # Build a toggle with two paragraph children
//!   nblocks toggle "Details" --child "first" --child "second"
//!
//! Logs go to stderr; `-v` / `-vv` / `-vvv` or `RUST_LOG` raise verbosity.

mod config;
mod document;
mod render;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use notion_blocks::{Paragraph, Toggle};
use serde_json::Value;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::Config;
use crate::document::Document;

/// Render, normalize, and build Notion block JSON.
#[derive(Parser, Debug)]
#[command(name = "nblocks")]
#[command(about = "Render, normalize, and build Notion block JSON")]
struct Args {
    /// Config file (default: ~/.config/notion-blocks/config.ron)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// More log output (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a block tree as an indented outline
    Render {
        /// JSON file to read (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Parse block JSON and print it back out
    Normalize {
        /// JSON file to read (stdin when omitted)
        file: Option<PathBuf>,

        /// Single-line output regardless of config
        #[arg(long)]
        compact: bool,
    },
    /// Build a toggle block and print its JSON
    Toggle {
        /// Toggle label
        label: String,

        /// Paragraph child (repeatable, kept in order)
        #[arg(long = "child")]
        children: Vec<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_config(args.config.as_deref())?;
    let output = run(&args.command, &config)?;
    println!("{output}");
    Ok(())
}

fn run(command: &Command, config: &Config) -> Result<String> {
    match command {
        Command::Render { file } => {
            let doc = read_document(file.as_deref())?;
            tracing::info!(blocks = doc.blocks().len(), "rendering outline");
            Ok(render::render_outline(doc.blocks(), config))
        }
        Command::Normalize { file, compact } => {
            let doc = read_document(file.as_deref())?;
            to_output(&doc.to_json(), config.pretty_json && !compact)
        }
        Command::Toggle { label, children } => {
            let toggle = children
                .iter()
                .fold(Toggle::from_string(label.as_str()), |t, child| {
                    t.append_child(Paragraph::from_string(child.as_str()))
                });
            to_output(&toggle.to_json(), config.pretty_json)
        }
    }
}

fn read_document(file: Option<&Path>) -> Result<Document> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    parse_document(&text)
}

fn parse_document(text: &str) -> Result<Document> {
    let value: Value = serde_json::from_str(text).context("input is not valid JSON")?;
    Document::from_json(&value).context("input is not a supported block document")
}

fn to_output(value: &Value, pretty: bool) -> Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    })
}
