// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring logging, configuration and the command line.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::logging;
use crate::logic::markdown::markdown_to_html;
use crate::models::folder::with_unfiled;
use crate::models::{ApiResponse, Folder};
use crate::utils::sanitize_href;

/// Top-level CLI for the notefold helpers.
#[derive(Debug, Parser)]
#[command(name = "notefold")]
#[command(about = "Render notes safely and inspect folder listings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render Markdown to sanitized HTML.
    Render {
        /// Markdown file to read; stdin when omitted.
        path: Option<PathBuf>,

        /// Enable inline and display math.
        #[arg(long)]
        math: bool,
    },

    /// Print the link target that would be rendered for HREF.
    CheckLink {
        /// Link target as written in Markdown.
        href: String,
    },

    /// Print the folder listing from a saved API response, headed by "Unfiled".
    Folders {
        /// JSON file holding an API response with a folder array payload.
        path: PathBuf,
    },
}

/// Parse the command line, bootstrap logging and configuration, then execute.
///
/// The command line is parsed first so `--help` works with a broken environment.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging()?;
    tracing::debug!(?cli, "parsed command line");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(cli, |key| std::env::var(key).ok(), &mut out)
}

/// Resolve configuration through `lookup` and execute the parsed command.
pub fn run_with<F, W>(cli: Cli, lookup: F, out: &mut W) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    let config = AppConfig::from_lookup(lookup)?;
    config.log_summary();
    execute(cli.command, out)
}

/// Execute a single command, writing its output to `out`.
pub fn execute<W: Write>(command: Command, out: &mut W) -> Result<()> {
    match command {
        Command::Render { path, math } => {
            let body = read_input(path.as_deref())?;
            let html = markdown_to_html(&body, math);
            writeln!(out, "{html}").context("Failed to write rendered HTML")?;
        }
        Command::CheckLink { href } => {
            writeln!(out, "{}", sanitize_href(&href)).context("Failed to write link")?;
        }
        Command::Folders { path } => {
            let folders = load_folders(&path)?;
            let listing = with_unfiled(folders);
            tracing::info!(count = listing.len(), "folder listing ready");
            let json =
                serde_json::to_string_pretty(&listing).context("Failed to serialize folders")?;
            writeln!(out, "{json}").context("Failed to write folder listing")?;
        }
    }
    Ok(())
}

/// Read a whole file, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read Markdown file: {:?}", path)),
        None => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read Markdown from stdin")?;
            Ok(body)
        }
    }
}

/// Parse a saved folder response and unwrap its payload.
fn load_folders(path: &Path) -> Result<Vec<Folder>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read folder response: {:?}", path))?;
    let response: ApiResponse<Vec<Folder>> = serde_json::from_str(&raw)
        .with_context(|| format!("Malformed folder response in {:?}", path))?;
    if response.is_success() {
        tracing::debug!(detail = response.message(), "folder response succeeded");
    }
    response
        .into_result()
        .context("Backend reported an error for the folder request")
}
