//! # Command Layer
//!
//! Each command lives in its own submodule and is a plain function over a
//! `&mut RecordStore` (or `&RecordStore` for reads). There is no shared
//! store instance: callers construct a store and pass it in.
//!
//! Commands never print or prompt. They return a [`CmdResult`] carrying the
//! records they touched and user-facing messages; errors come back as
//! [`crate::error::WhoDatError`] for the caller to render.
//!
//! ## Command Modules
//!
//! - [`add`]: Add a record, rejecting identity collisions
//! - [`edit`]: Merge field overrides into the record with a given student id
//! - [`clear`]: Remove every record
//! - [`list`]: List records, optionally filtered

use crate::model::Record;
use serde::Serialize;

pub mod add;
pub mod clear;
pub mod edit;
pub mod list;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, Serialize)]
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
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Record>,
    pub listed: Vec<Record>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, records: Vec<Record>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, records: Vec<Record>) -> Self {
        self.listed = records;
        self
    }
}
