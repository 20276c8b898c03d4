//! Slack Block Kit rendering of a report.

use serde::{Deserialize, Serialize};

use crate::{
    group::{Job, UserGroup},
    report::{Report, ReportSection},
};

/// Text object of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    PlainText { text: String, emoji: bool },
    Mrkdwn { text: String },
}

impl Text {
    pub fn plain(text: impl Into<String>) -> Self {
        Text::PlainText {
            text: text.into(),
            emoji: true,
        }
    }

    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Text::Mrkdwn { text: text.into() }
    }
}

/// Layout block of a Slack message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header {
        text: Text,
    },
    Section {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<Text>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        fields: Vec<Text>,
    },
    Divider,
}

impl Block {
    fn text_section(text: Text) -> Self {
        Block::Section {
            text: Some(text),
            fields: Vec::new(),
        }
    }

    fn fields_section(fields: Vec<Text>) -> Self {
        Block::Section { text: None, fields }
    }
}

/// Render `report` as Slack blocks, in section order.
pub fn to_blocks(report: &Report) -> Vec<Block> {
    let mut blocks = Vec::new();
    for section in report.sections() {
        match section {
            ReportSection::Header { title, .. } => {
                blocks.push(Block::Header {
                    text: Text::plain(title.as_str()),
                });
                let timestamp = section.timestamp().unwrap_or_default();
                blocks.push(Block::text_section(Text::mrkdwn(format!(
                    "⌚ 檢查時間： *{timestamp}*"
                ))));
            }
            ReportSection::Divider => blocks.push(Block::Divider),
            ReportSection::UserGroup(group) => push_group(&mut blocks, group),
        }
    }
    blocks
}

fn push_group(blocks: &mut Vec<Block>, group: &UserGroup) {
    blocks.push(Block::text_section(Text::mrkdwn(format!(
        "🤪 *{}* 有以下任務正在運行：",
        group.label
    ))));
    for job in &group.jobs {
        push_job(blocks, job);
    }
}

fn push_job(blocks: &mut Vec<Block>, job: &Job) {
    blocks.push(Block::text_section(Text::mrkdwn(format!(
        "🛠️ *{}*",
        job.title
    ))));
    blocks.push(Block::fields_section(
        job.fields.iter().map(|field| Text::plain(field.as_str())).collect(),
    ));
}
