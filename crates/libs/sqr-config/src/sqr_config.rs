//! Top-level configuration for the reporter.

use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};
use sqr_report::annotate::LookupTables;
use tracing::info;

use crate::{
    prelude::*,
    slack_config::SlackConfig,
    squeue_config::{ScheduleConfig, SqueueConfig},
};

/// File formats a configuration can be read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// `.toml` files are TOML, everything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Reporter configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqrConfig {
    /// Slurm accounts to report on, mapped to a project label.
    /// The keys are also the accounts passed to `squeue -A`.
    pub project_map: BTreeMap<String, String>,
    /// User ids mapped to a display name.
    #[serde(default)]
    pub user_map: BTreeMap<String, String>,
    /// Slack delivery.
    pub slack: SlackConfig,
    /// Scheduler query.
    #[serde(default)]
    pub squeue: SqueueConfig,
    /// Report timer.
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

impl SqrConfig {
    /// Load and validate configuration from a TOML or JSON file.
    pub fn from_file(file_path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(file_path)?;
        let config = match ConfigFormat::from_path(file_path) {
            ConfigFormat::Toml => Self::from_toml(&contents)?,
            ConfigFormat::Json => Self::from_json(&contents)?,
        };
        config.validate()?;
        info!(
            "Loaded configuration from {} ({} projects, {} users)",
            file_path.display(),
            config.project_map.len(),
            config.user_map.len()
        );
        Ok(config)
    }

    /// Parse configuration from TOML string.
    pub fn from_toml(value: &str) -> Result<Self> {
        Ok(toml::from_str(value)?)
    }

    /// Parse configuration from JSON string.
    pub fn from_json(value: &str) -> Result<Self> {
        Ok(serde_json::from_str(value)?)
    }

    /// Check the settings every report cycle depends on.
    pub fn validate(&self) -> Result<()> {
        if self.project_map.is_empty() {
            return Err(Error::EmptyValue("project_map"));
        }
        if self.slack.token.trim().is_empty() {
            return Err(Error::EmptyValue("slack.token"));
        }
        if self.slack.channel.trim().is_empty() {
            return Err(Error::EmptyValue("slack.channel"));
        }
        if self.squeue.program.trim().is_empty() {
            return Err(Error::EmptyValue("squeue.program"));
        }
        Ok(())
    }

    /// Accounts to query, in key order.
    pub fn accounts(&self) -> Vec<String> {
        self.project_map.keys().cloned().collect()
    }

    /// Lookup tables used to annotate report fields.
    pub fn lookup_tables(&self) -> LookupTables {
        LookupTables::new(&self.project_map, &self.user_map)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const TOML_CONFIG: &str = r##"
        [project_map]
        phys01 = "Physics"
        CHEM02 = "Chemistry"

        [user_map]
        alice = "Alice Chen"

        [slack]
        token = "xoxb-test"
        channel = "#hpc"
    "##;

    const JSON_CONFIG: &str = r##"{
        "project_map": { "phys01": "Physics" },
        "user_map": { "alice": "Alice Chen" },
        "slack": { "token": "xoxb-test", "channel": "#hpc" },
        "schedule": { "cron": "0 30 9 * * *", "run_on_startup": false }
    }"##;

    #[test]
    pub fn deserialize_toml_with_defaults() -> Result<()> {
        let config = SqrConfig::from_toml(TOML_CONFIG)?;

        assert_eq!(config.accounts(), vec!["CHEM02", "phys01"]);
        assert_eq!(config.slack.channel, "#hpc");
        assert_eq!(config.slack.api_base, "https://slack.com/api");
        assert_eq!(config.squeue.program, "squeue");
        assert_eq!(config.schedule.cron, "0 0 0,12 * * *");
        assert!(config.schedule.run_on_startup);
        config.validate()
    }

    #[test]
    pub fn deserialize_json() -> Result<()> {
        let config = SqrConfig::from_json(JSON_CONFIG)?;

        assert_eq!(config.user_map.get("alice").map(String::as_str), Some("Alice Chen"));
        assert_eq!(config.schedule.cron, "0 30 9 * * *");
        assert!(!config.schedule.run_on_startup);
        Ok(())
    }

    #[test]
    pub fn lookup_tables_match_projects_case_insensitively() -> Result<()> {
        let tables = SqrConfig::from_toml(TOML_CONFIG)?.lookup_tables();

        assert_eq!(tables.project_label("PHYS01"), Some("Physics"));
        assert_eq!(tables.project_label("chem02"), Some("Chemistry"));
        assert_eq!(tables.user_label("alice"), Some("Alice Chen"));
        Ok(())
    }

    #[test]
    pub fn empty_project_map_is_rejected() -> Result<()> {
        let mut config = SqrConfig::from_toml(TOML_CONFIG)?;
        config.project_map.clear();
        assert!(matches!(
            config.validate(),
            Err(Error::EmptyValue("project_map"))
        ));
        Ok(())
    }

    #[test]
    pub fn missing_slack_section_fails_to_parse() {
        assert!(matches!(
            SqrConfig::from_toml("[project_map]\np = \"P\"\n"),
            Err(Error::Deserialization(_))
        ));
    }

    #[test]
    pub fn format_follows_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.TOML")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("config.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("config")), ConfigFormat::Json);
    }

    #[test]
    pub fn from_file_reads_both_formats() -> Result<()> {
        let mut toml_file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        toml_file.write_all(TOML_CONFIG.as_bytes())?;
        let mut json_file = tempfile::Builder::new().suffix(".json").tempfile()?;
        json_file.write_all(JSON_CONFIG.as_bytes())?;

        assert_eq!(SqrConfig::from_file(toml_file.path())?.project_map.len(), 2);
        assert_eq!(SqrConfig::from_file(json_file.path())?.project_map.len(), 1);
        Ok(())
    }

    #[test]
    pub fn from_file_reports_missing_file() {
        assert!(matches!(
            SqrConfig::from_file(Path::new("/nonexistent/sqr.toml")),
            Err(Error::IO(_))
        ));
    }
}
