//! # Commands
//!
//! One module per operation. Each exposes a `run` function taking the store (and
//! whatever else it needs) and returning a [`CmdResult`]: the records touched or
//! listed, plus messages for the user. Commands never print; rendering belongs to
//! the UI.
//!
//! Commands that address records take [`RecordSelector`](crate::index::RecordSelector)s
//! and resolve them against the current listing through [`helpers`].

use crate::config::PinbookConfig;
use crate::index::DisplayRecord;
use crate::model::Record;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod init;
pub mod list;
pub mod share;
pub mod update;
pub mod view;

pub use share::SharePayload;

/// Where pinbook keeps its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinbookPaths {
    pub data_dir: PathBuf,
}

impl PinbookPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join(crate::config::CONFIG_FILENAME)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<Record>,
    pub listed_records: Vec<DisplayRecord>,
    pub share: Option<SharePayload>,
    pub config: Option<PinbookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_share(mut self, share: SharePayload) -> Self {
        self.share = Some(share);
        self
    }

    pub fn with_config(mut self, config: PinbookConfig) -> Self {
        self.config = Some(config);
        self
    }
}
