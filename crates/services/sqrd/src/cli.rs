//! Command-line interface for the sqr report service.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface for the sqr report service.
#[derive(Parser)]
#[command(name = "sqrd")]
#[command(about = "Posts the running Slurm jobs of your projects to Slack")]
pub struct Cli {
    /// Path to the configuration file (.toml, or JSON otherwise)
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the sqr report service.
#[derive(Subcommand)]
pub enum Commands {
    /// Parse and display the configuration file
    Parse,
    /// Post a report at startup and then on every scheduled time (default)
    Run,
    /// Post a single report and exit
    Once,
    /// Print the report blocks as JSON without posting them
    Preview {
        /// Saved `squeue -o %all` output to render instead of running squeue
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}
