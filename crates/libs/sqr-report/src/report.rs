//! Report assembly.
//!
//! A report is the ordered list of sections posted as one chat message:
//! a header with the generation time, a divider, then one user group
//! followed by a divider for every run of jobs.

use chrono::NaiveDateTime;

use crate::group::UserGroup;

/// Title of every report.
pub const REPORT_TITLE: &str = "📋 TWCC HPC 任務例行檢查";

/// Format of the generation timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// One top-level node of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportSection {
    /// Report title and the time it was generated.
    Header {
        title: String,
        generated_at: NaiveDateTime,
    },
    /// Visual separator.
    Divider,
    /// A user's run of jobs.
    UserGroup(UserGroup),
}

impl ReportSection {
    /// Generation time as shown in the header, `None` for other sections.
    pub fn timestamp(&self) -> Option<String> {
        match self {
            ReportSection::Header { generated_at, .. } => {
                Some(generated_at.format(TIMESTAMP_FORMAT).to_string())
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    /// Plain text used where rich sections cannot be shown (notifications).
    pub fn fallback_text(&self) -> &str {
        self.sections
            .iter()
            .find_map(|section| match section {
                ReportSection::Header { title, .. } => Some(title.as_str()),
                _ => None,
            })
            .unwrap_or(REPORT_TITLE)
    }

    pub fn groups(&self) -> impl Iterator<Item = &UserGroup> {
        self.sections.iter().filter_map(|section| match section {
            ReportSection::UserGroup(group) => Some(group),
            _ => None,
        })
    }

    pub fn job_count(&self) -> usize {
        self.groups().map(|group| group.jobs.len()).sum()
    }
}

/// Assemble the report sections for `groups`, stamped with `now`.
pub fn assemble(groups: Vec<UserGroup>, now: NaiveDateTime) -> Report {
    let mut sections = Vec::with_capacity(2 + groups.len() * 2);
    sections.push(ReportSection::Header {
        title: REPORT_TITLE.to_string(),
        generated_at: now,
    });
    sections.push(ReportSection::Divider);
    for group in groups {
        sections.push(ReportSection::UserGroup(group));
        sections.push(ReportSection::Divider);
    }
    Report { sections }
}
