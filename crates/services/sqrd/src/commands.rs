//! Command handlers for the sqr report service.

use std::{path::Path, pin::pin};

use chrono::Local;
use sqr_config::SqrConfig;
use sqr_report::blocks::to_blocks;
use tracing::{info, warn};

use crate::prelude::*;
use crate::routine::Routine;
use crate::schedule::{ReportSchedule, until};

/// Handles the parse command to display configuration information.
pub fn handle_parse(config: &SqrConfig) -> Result<()> {
    println!("Configuration parsed successfully");
    println!("Slack channel: {}", config.slack.channel);
    println!("Squeue program: {}", config.squeue.program);
    println!(
        "Schedule: {} (run on startup: {})",
        config.schedule.cron, config.schedule.run_on_startup
    );

    println!("\nProjects: {}", config.project_map.len());
    for (account, label) in &config.project_map {
        println!("  {account}: {label}");
    }
    println!("\nUsers: {}", config.user_map.len());
    for (user, label) in &config.user_map {
        println!("  {user}: {label}");
    }

    let schedule = ReportSchedule::new(&config.schedule.cron)?;
    println!("\nNext reports:");
    for at in schedule.upcoming(&Local::now(), 3) {
        println!("  {}", at.format("%Y/%m/%d %H:%M:%S"));
    }
    Ok(())
}

/// Handles the once command: a single report cycle.
pub async fn handle_once(routine: &Routine) -> Result<()> {
    let posted = routine.run_once().await?;
    println!("Report posted to {} ({})", posted.channel, posted.ts);
    Ok(())
}

/// Renders the report blocks as pretty JSON.
///
/// Reads the `squeue` table from `input` when given, otherwise runs the
/// configured query.
pub async fn preview_blocks(routine: &Routine, input: Option<&Path>) -> Result<String> {
    let report = match input {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            routine.render(&raw, Local::now().naive_local())?
        }
        None => routine.build_report().await?,
    };
    Ok(serde_json::to_string_pretty(&to_blocks(&report))?)
}

/// Handles the preview command.
pub async fn handle_preview(routine: &Routine, input: Option<&Path>) -> Result<()> {
    println!("{}", preview_blocks(routine, input).await?);
    Ok(())
}

/// Handles the run command.
///
/// Posts a report right away when configured to, then sleeps until each
/// scheduled time and posts again, until Ctrl-C. Cycles run one after the
/// other and a failed cycle does not stop the service.
pub async fn handle_run(
    routine: &Routine,
    schedule: &ReportSchedule,
    run_on_startup: bool,
) -> Result<()> {
    run_until(routine, schedule, run_on_startup, async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C - {err}");
            std::future::pending::<()>().await;
        }
    })
    .await
}

/// Runs report cycles on `schedule` until `shutdown` completes.
///
/// `shutdown` is polled across the whole loop, so a signal that arrives
/// while a cycle is running stops the service once that cycle ends.
pub async fn run_until<F>(
    routine: &Routine,
    schedule: &ReportSchedule,
    run_on_startup: bool,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()>,
{
    let mut shutdown = pin!(shutdown);
    info!(
        "Reporting `{}` on schedule `{}`",
        routine.query().get_full_command(),
        schedule.expr()
    );
    if run_on_startup {
        routine.run_logged().await;
    }

    loop {
        let now = Local::now();
        let Some(next) = schedule.next_after(&now) else {
            warn!("Schedule `{}` has no upcoming time, stopping", schedule.expr());
            return Ok(());
        };
        info!("Next report at {}", next.format("%Y/%m/%d %H:%M:%S"));

        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutting down");
                return Ok(());
            }
            _ = tokio::time::sleep(until(&next, &now)) => routine.run_logged().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Write, time::Duration};

    use super::*;

    fn routine() -> Routine {
        routine_with_program("squeue")
    }

    fn routine_with_program(program: &str) -> Routine {
        let mut config = SqrConfig::from_toml(
            r#"
            [project_map]
            phys01 = "Physics"

            [slack]
            token = "xoxb-test"
            channel = "C1"
            "#,
        )
        .expect("valid config");
        config.squeue.program = program.to_string();
        Routine::from_config(&config).expect("routine")
    }

    #[tokio::test]
    async fn preview_renders_saved_output() -> Result<()> {
        let mut input = tempfile::NamedTempFile::new()?;
        input.write_all(
            b"JOBID|NAME|PARTITION|NODES|START_TIME|TIME|ACCOUNT|USER\n\
              7|sim|gp1d|1|N/A|0:10|phys01|alice\n",
        )?;

        let json = preview_blocks(&routine(), Some(input.path())).await?;
        let blocks: serde_json::Value = serde_json::from_str(&json)?;

        assert_eq!(blocks.as_array().map(Vec::len), Some(7));
        assert!(json.contains("📜 計畫ID：PHYS01(Physics)"));
        assert!(json.contains("🛠️ *sim*"));
        Ok(())
    }

    #[tokio::test]
    async fn preview_of_empty_file_fails() -> Result<()> {
        let input = tempfile::NamedTempFile::new()?;
        let result = preview_blocks(&routine(), Some(input.path())).await;
        assert!(matches!(
            result,
            Err(Error::Report(sqr_report::error::Error::MissingHeader))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn shutdown_during_startup_cycle_stops_the_loop() -> Result<()> {
        let routine = routine_with_program("/nonexistent/sqr/squeue");
        let schedule = ReportSchedule::new("0 0 0 1 1 *")?;
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        tx.send(()).expect("receiver alive");

        let stopped = tokio::time::timeout(
            Duration::from_secs(5),
            run_until(&routine, &schedule, true, async {
                let _ = rx.await;
            }),
        )
        .await;

        assert!(matches!(stopped, Ok(Ok(()))));
        Ok(())
    }
}
