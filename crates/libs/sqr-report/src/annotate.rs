//! Field annotators.
//!
//! Each annotator turns one job record into one display line of the job's
//! field list. They are plain functions over a record and the lookup tables,
//! listed in display order by [`ANNOTATORS`].

use std::collections::HashMap;

use crate::{prelude::*, record::JobRecord};

pub const JOB_ID_FIELD: &str = "JOBID";
pub const NAME_FIELD: &str = "NAME";
pub const PARTITION_FIELD: &str = "PARTITION";
pub const NODES_FIELD: &str = "NODES";
pub const START_TIME_FIELD: &str = "START_TIME";
pub const TIME_FIELD: &str = "TIME";
pub const ACCOUNT_FIELD: &str = "ACCOUNT";
pub const USER_FIELD: &str = "USER";

/// Read-only lookup tables from identifiers to friendly labels.
///
/// Project accounts are matched case-insensitively, users exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupTables {
    projects: HashMap<String, String>,
    users: HashMap<String, String>,
}

impl LookupTables {
    /// Build the tables. Project keys are upper-cased here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sqr_report::annotate::LookupTables;
    ///
    /// let tables = LookupTables::new([("phys01", "Physics")], [("alice", "Alice")]);
    /// assert_eq!(tables.project_label("PHYS01"), Some("Physics"));
    /// assert_eq!(tables.user_label("Alice"), None);
    /// ```
    pub fn new<P, U, K1, V1, K2, V2>(project_map: P, user_map: U) -> Self
    where
        P: IntoIterator<Item = (K1, V1)>,
        U: IntoIterator<Item = (K2, V2)>,
        K1: AsRef<str>,
        V1: Into<String>,
        K2: Into<String>,
        V2: Into<String>,
    {
        Self {
            projects: project_map
                .into_iter()
                .map(|(key, value)| (key.as_ref().to_uppercase(), value.into()))
                .collect(),
            users: user_map
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    pub fn project_label(&self, account: &str) -> Option<&str> {
        self.projects
            .get(&account.to_uppercase())
            .map(String::as_str)
    }

    pub fn user_label(&self, user: &str) -> Option<&str> {
        self.users.get(user).map(String::as_str)
    }

    /// Upper-cased account, suffixed with its label when known.
    pub fn display_project(&self, account: &str) -> String {
        let account = account.to_uppercase();
        match self.project_label(&account) {
            Some(label) => format!("{account}({label})"),
            None => account,
        }
    }

    /// User id, suffixed with its label when known.
    pub fn display_user(&self, user: &str) -> String {
        match self.user_label(user) {
            Some(label) => format!("{user}({label})"),
            None => user.to_string(),
        }
    }
}

/// A single field annotator.
pub type Annotator = fn(&JobRecord, &LookupTables) -> Result<String>;

/// Every annotator, in the order the fields are displayed.
pub const ANNOTATORS: [Annotator; 8] = [
    job_id,
    job_name,
    partition,
    node_count,
    start_time,
    elapsed_time,
    project,
    user,
];

/// Apply every annotator in [`ANNOTATORS`] to `record`.
pub fn annotate(record: &JobRecord, tables: &LookupTables) -> Result<Vec<String>> {
    ANNOTATORS
        .iter()
        .map(|annotator| annotator(record, tables))
        .collect()
}

fn labeled(record: &JobRecord, label: &str, field: &str) -> Result<String> {
    Ok(format!("{label}：{}", record.field(field)?))
}

pub fn job_id(record: &JobRecord, _: &LookupTables) -> Result<String> {
    labeled(record, "🪪 任務ID", JOB_ID_FIELD)
}

pub fn job_name(record: &JobRecord, _: &LookupTables) -> Result<String> {
    labeled(record, "🛠️ 任務名稱", NAME_FIELD)
}

pub fn partition(record: &JobRecord, _: &LookupTables) -> Result<String> {
    labeled(record, "⚓ 分區名稱", PARTITION_FIELD)
}

pub fn node_count(record: &JobRecord, _: &LookupTables) -> Result<String> {
    labeled(record, "🖥️ 節點數量", NODES_FIELD)
}

pub fn start_time(record: &JobRecord, _: &LookupTables) -> Result<String> {
    labeled(record, "⏱ 開始時間", START_TIME_FIELD)
}

pub fn elapsed_time(record: &JobRecord, _: &LookupTables) -> Result<String> {
    labeled(record, "⏳ 運行時間", TIME_FIELD)
}

/// Account with its project label, e.g. `📜 計畫ID：PHYS01(Physics)`.
pub fn project(record: &JobRecord, tables: &LookupTables) -> Result<String> {
    let account = tables.display_project(record.field(ACCOUNT_FIELD)?);
    Ok(format!("📜 計畫ID：{account}"))
}

/// User id with its label, e.g. `🤪 使用者ID：alice(Alice)`.
pub fn user(record: &JobRecord, tables: &LookupTables) -> Result<String> {
    let user = tables.display_user(record.field(USER_FIELD)?);
    Ok(format!("🤪 使用者ID：{user}"))
}
