//! Command-line interface for the Hokusai pipeline.

mod render;
mod validate;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Pattern-typed presentation pipeline.
#[derive(Debug, Parser)]
#[command(name = "hokusai", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a YAML presentation document
    Validate {
        /// Path to the document (raw or fenced generator output)
        path: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
    /// Render a YAML presentation document as text
    Render {
        /// Path to the document (raw or fenced generator output)
        path: PathBuf,
    },
}

/// Output format for validation results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Human,
    /// Machine-readable JSON
    Json,
}

/// Dispatches the parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Validate { path, format } => validate::handle_validate_command(path, format),
        Command::Render { path } => render::handle_render_command(path),
    }
}
