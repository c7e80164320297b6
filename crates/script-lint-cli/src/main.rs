//! script-lint CLI tool.
//!
//! Usage:
//! ```bash
//! script-lint check [OPTIONS] [PATH]
//! script-lint list-rules [--language js|ts]
//! script-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use script_lint_engine::StrategyKind;
use settings::Settings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod settings;

/// Tree-sitter based linter for JavaScript and TypeScript projects
#[derive(Parser)]
#[command(name = "script-lint")]
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
    /// Run lint checks
    Check {
        /// Path to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Lint only this language (js, ts). Default: every enabled language.
        #[arg(short, long)]
        language: Option<StrategyKind>,
    },

    /// List the rules each language engine loads
    ListRules {
        /// Path whose configuration applies (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Only list rules for this language (js, ts)
        #[arg(short, long)]
        language: Option<StrategyKind>,
    },

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
    /// Source snippets with highlighted spans.
    Rich,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            language,
        } => {
            let settings = Settings::load(&path, cli.config.as_deref())?;
            let passed = commands::check::run(settings, format, language).await?;
            if !passed {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::ListRules { path, language } => {
            let settings = Settings::load(&path, cli.config.as_deref())?;
            commands::list_rules::run(settings, language).await
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
