//! lint-gate - analysis submission gatekeeper
//!
//! CLI binary that filters files and prints the resulting analysis plan.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lint_gate::trigger::TriggerType;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "lint-gate")]
#[command(about = "Decide which files get analyzed and submit them per module")]
#[command(version)]
struct Cli {
    /// Project root (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    path: Option<PathBuf>,

    /// Global settings file (defaults to the user config directory)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Show console messages (exclusion reasons, triggers)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit files for analysis
    Submit {
        /// Files to submit, relative to the project root
        files: Vec<PathBuf>,

        /// What caused the submission
        #[arg(long, default_value = "action")]
        trigger: TriggerType,

        /// Run in background instead of foreground
        #[arg(long)]
        background: bool,

        /// Run modal; project and server exclusions are not applied
        #[arg(long, conflicts_with = "background")]
        modal: bool,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Submit files as if they were the open editors, honoring auto_trigger
    Auto {
        /// Open files, relative to the project root
        files: Vec<PathBuf>,

        /// What caused the submission
        #[arg(long, default_value = "editor-open")]
        trigger: TriggerType,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,lint_gate::console=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_env("LINT_GATE_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let path = cli.path.unwrap_or_else(|| PathBuf::from("."));
    let root = std::fs::canonicalize(&path)
        .with_context(|| format!("project root {} not found", path.display()))?;
    let settings = cli.settings.as_deref();

    match cli.command {
        Commands::Submit {
            files,
            trigger,
            background,
            modal,
            json,
        } => {
            cli::run_submit(
                &root,
                settings,
                &files,
                cli::SubmitOptions {
                    trigger,
                    background,
                    modal,
                    json,
                },
            )
            .await?;
        }
        Commands::Auto {
            files,
            trigger,
            json,
        } => {
            cli::run_auto(&root, settings, &files, trigger, json).await?;
        }
    }

    Ok(())
}
