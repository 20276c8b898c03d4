//! One report cycle: query the scheduler, render the report, post it.

use chrono::{Local, NaiveDateTime};
use sqr_config::SqrConfig;
use sqr_io::squeue::SqueueQuery;
use sqr_report::{
    annotate::LookupTables,
    blocks::{Block, to_blocks},
    render,
    report::Report,
};
use sqr_slack::{PostedMessage, SlackClient};
use tracing::{error, info};

use crate::prelude::*;

/// Everything a report cycle needs, built once from the configuration.
pub struct Routine {
    query: SqueueQuery,
    tables: LookupTables,
    slack: SlackClient,
    channel: String,
}

impl Routine {
    pub fn from_config(config: &SqrConfig) -> Result<Self> {
        Ok(Self {
            query: SqueueQuery::new(config.squeue.program.clone(), config.accounts())?,
            tables: config.lookup_tables(),
            slack: SlackClient::new(config.slack.api_base.clone(), config.slack.token.clone())?,
            channel: config.slack.channel.clone(),
        })
    }

    pub fn query(&self) -> &SqueueQuery {
        &self.query
    }

    /// Render a report from an already captured `squeue` table.
    pub fn render(&self, raw: &str, now: NaiveDateTime) -> Result<Report> {
        Ok(render(raw, &self.tables, now)?)
    }

    /// Query the scheduler and render the current report.
    pub async fn build_report(&self) -> Result<Report> {
        let raw = self.query.run().await?;
        self.render(&raw, Local::now().naive_local())
    }

    /// Post an already rendered report.
    pub async fn post(&self, report: &Report) -> Result<PostedMessage> {
        let blocks: Vec<Block> = to_blocks(report);
        Ok(self
            .slack
            .post_message(&self.channel, report.fallback_text(), &blocks)
            .await?)
    }

    /// Run a full cycle and return the posted message.
    pub async fn run_once(&self) -> Result<PostedMessage> {
        let report = self.build_report().await?;
        info!(
            "Report has {} jobs in {} user groups",
            report.job_count(),
            report.groups().count()
        );
        self.post(&report).await
    }

    /// Run a full cycle, logging the outcome instead of returning it.
    ///
    /// A failed cycle posts nothing; the next cycle starts from scratch.
    pub async fn run_logged(&self) {
        match self.run_once().await {
            Ok(posted) => info!("Report posted to {} ({})", posted.channel, posted.ts),
            Err(err) => error!("Report cycle failed - {err}"),
        }
    }
}
