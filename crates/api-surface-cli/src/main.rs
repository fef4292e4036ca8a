//! api-surface CLI tool.
//!
//! Usage:
//! ```bash
//! api-surface lint [OPTIONS] <CURRENT>
//! api-surface diff <OLD> <NEW>
//! api-surface list-issues
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

/// API surface tracker: diff two API surfaces and lint new API against design rules
#[derive(Parser)]
#[command(name = "api-surface")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint an API surface against the design rules
    Lint {
        /// Signature JSON of the surface to lint
        current: PathBuf,

        /// Signature JSON of the released surface; lints only the delta
        #[arg(short, long)]
        previous: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated names)
        #[arg(long)]
        rules: Option<String>,
    },

    /// Show the structural differences between two API surfaces
    Diff {
        /// Signature JSON of the old surface
        old: PathBuf,

        /// Signature JSON of the new surface
        new: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// List the issue catalog
    ListIssues,
}

/// Output format for lint and diff results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-finding compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Lint {
            current,
            previous,
            format,
            rules,
        } => {
            let failed = commands::lint::run(
                &current,
                previous.as_deref(),
                format,
                rules,
                cli.config.as_deref(),
            )?;
            if failed {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Diff { old, new, format } => commands::diff::run(&old, &new, format),
        Commands::ListIssues => {
            commands::list_issues::run();
            Ok(())
        }
    }
}
