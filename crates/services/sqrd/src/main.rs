//! sqr Report Service (sqrd)
//!
//! Queries Slurm for the running jobs of a set of project accounts and posts
//! a report grouped by user to a Slack channel. The service can run in
//! different modes:
//!
//! - **Run**: Post once at startup, then at every scheduled time (midnight
//!   and noon by default)
//! - **Once**: Post a single report and exit
//! - **Preview**: Print the Slack blocks without posting
//! - **Parse**: Validate and display the configuration file

mod cli;
mod commands;
mod error;
mod prelude;
mod routine;
mod schedule;

use clap::Parser;
use cli::{Cli, Commands};
use sqr_config::SqrConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::prelude::*;
use crate::{
    commands::{handle_once, handle_parse, handle_preview, handle_run},
    routine::Routine,
    schedule::ReportSchedule,
};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "sqrd=info,sqr_config=info,sqr_io=info,sqr_slack=info";

/// Main entry point for the sqr Report Service.
///
/// Initializes logging, loads the configuration and dispatches to the
/// command handler.
///
/// # Examples
///
/// ```bash
/// # Report at startup and twice a day
/// sqrd --config config.json
///
/// # Check what would be posted
/// sqrd --config config.toml preview --input squeue.txt
/// ```
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = SqrConfig::from_file(&cli.config)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Parse => handle_parse(&config),
        Commands::Once => handle_once(&Routine::from_config(&config)?).await,
        Commands::Preview { input } => {
            handle_preview(&Routine::from_config(&config)?, input.as_deref()).await
        }
        Commands::Run => {
            let schedule = ReportSchedule::new(&config.schedule.cron)?;
            let routine = Routine::from_config(&config)?;
            handle_run(&routine, &schedule, config.schedule.run_on_startup).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_log_filter_covers_every_logging_crate() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        for target in ["sqrd", "sqr_config", "sqr_io", "sqr_slack"] {
            assert!(DEFAULT_LOG_FILTER.contains(&format!("{target}=info")));
        }
    }
}
