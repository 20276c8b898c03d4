//! Scheduler query and timer settings.

use serde::{Deserialize, Serialize};

/// How `squeue` is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqueueConfig {
    /// Program to run. Defaults to `squeue` from `PATH`.
    #[serde(default = "default_program")]
    pub program: String,
}

impl Default for SqueueConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

fn default_program() -> String {
    String::from("squeue")
}

/// When reports are generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    /// Cron expression with a seconds column, evaluated in local time.
    /// Defaults to midnight and noon.
    #[serde(default = "default_cron")]
    pub cron: String,
    /// Post one report as soon as the service starts.
    #[serde(default = "default_run_on_startup")]
    pub run_on_startup: bool,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            cron: default_cron(),
            run_on_startup: default_run_on_startup(),
        }
    }
}

fn default_cron() -> String {
    String::from("0 0 0,12 * * *")
}

fn default_run_on_startup() -> bool {
    true
}
