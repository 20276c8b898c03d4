//! Grouping of job records by owning user.

use crate::{
    annotate::{LookupTables, NAME_FIELD, USER_FIELD, annotate},
    prelude::*,
    record::JobRecord,
};

/// Title shown for jobs submitted without a name.
pub const UNNAMED_JOB: &str = "_未命名_";

/// One job of a user group, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// Job name, or [`UNNAMED_JOB`].
    pub title: String,
    /// Annotated fields in display order.
    pub fields: Vec<String>,
}

impl Job {
    pub fn from_record(record: &JobRecord, tables: &LookupTables) -> Result<Self> {
        let title = match record.field(NAME_FIELD)? {
            "" => UNNAMED_JOB.to_string(),
            name => name.to_string(),
        };
        Ok(Self {
            title,
            fields: annotate(record, tables)?,
        })
    }
}

/// A run of consecutive jobs owned by the same user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserGroup {
    /// Raw user id the run is keyed on.
    pub user: String,
    /// User id with its friendly label, when known.
    pub label: String,
    pub jobs: Vec<Job>,
}

/// Group records into runs of the same `USER`.
///
/// Only adjacent records are grouped together: a user whose jobs are
/// interleaved with another user's gets one group per run, in input order.
/// Every record ends up as exactly one job.
pub fn build_groups(records: &[JobRecord], tables: &LookupTables) -> Result<Vec<UserGroup>> {
    let mut groups: Vec<UserGroup> = Vec::new();
    for record in records {
        let user = record.field(USER_FIELD)?;
        let job = Job::from_record(record, tables)?;
        match groups.last_mut() {
            Some(group) if group.user == user => group.jobs.push(job),
            _ => groups.push(UserGroup {
                user: user.to_string(),
                label: tables.display_user(user),
                jobs: vec![job],
            }),
        }
    }
    Ok(groups)
}
