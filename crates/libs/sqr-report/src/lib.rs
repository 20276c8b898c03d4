//! Job report pipeline for Slurm queue snapshots.
//!
//! Turns the `|` separated table printed by `squeue -o %all` into a report
//! grouped by user, ready to be posted to Slack.
//!
//! # Usage
//!
//! ```rust
//! use chrono::Local;
//! use sqr_report::{annotate::LookupTables, blocks::to_blocks, render};
//!
//! let raw = "JOBID|NAME|PARTITION|NODES|START_TIME|TIME|ACCOUNT|USER\n\
//!            1|build|gp1d|1|2024-05-01T08:00:00|10:00|phys01|alice";
//! let tables = LookupTables::new([("PHYS01", "Physics")], [("alice", "Alice")]);
//!
//! let report = render(raw, &tables, Local::now().naive_local()).unwrap();
//! let blocks = to_blocks(&report);
//! assert_eq!(report.job_count(), 1);
//! assert_eq!(blocks.len(), 7);
//! ```
//!
//! The pipeline performs no I/O and keeps no state between calls.

pub mod annotate;
pub mod blocks;
pub mod error;
pub mod group;
pub mod prelude;
pub mod record;
pub mod report;

use chrono::NaiveDateTime;

use crate::{annotate::LookupTables, group::build_groups, prelude::*, report::Report};

/// Parse `raw`, group it and assemble the report stamped with `now`.
pub fn render(raw: &str, tables: &LookupTables, now: NaiveDateTime) -> Result<Report> {
    let records = record::parse(raw)?;
    let groups = build_groups(&records, tables)?;
    Ok(report::assemble(groups, now))
}
