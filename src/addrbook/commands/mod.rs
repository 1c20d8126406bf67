//! # Commands
//!
//! One module per prompt command. Each command works on a borrowed
//! [`AddressBook`](crate::book::AddressBook), never touches the terminal and
//! never persists: it reports what it did through a [`CmdResult`] and the API
//! layer decides whether the book has to be flushed.
//!
//! A command that changed the book lists the changed (or removed) records in
//! [`CmdResult::affected`]; an empty list means nothing needs saving.

use crate::model::{Phone, Record};

pub mod add;
pub mod birthday;
pub mod delete;
pub mod help;
pub mod helpers;
pub mod list;
pub mod phones;
pub mod search;

#[derive(Debug, Clone, PartialEq, Eq)]
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
    pub affected: Vec<Record>,
    pub listed: Vec<Record>,
    pub phones: Vec<Phone>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected(mut self, records: Vec<Record>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, records: Vec<Record>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_phones(mut self, phones: Vec<Phone>) -> Self {
        self.phones = phones;
        self
    }

    pub fn changed(&self) -> bool {
        !self.affected.is_empty()
    }
}
