use crate::model::Bookmark;
use crate::store::InitStatus;
use std::path::PathBuf;

pub mod add;
pub mod init;
pub mod list;
pub mod open;
pub mod paths;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
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
    pub affected_bookmarks: Vec<Bookmark>,
    pub listed_bookmarks: Vec<Bookmark>,
    pub opened_urls: Vec<String>,
    pub store_path: Option<PathBuf>,
    pub init_status: Option<InitStatus>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_bookmarks(mut self, bookmarks: Vec<Bookmark>) -> Self {
        self.affected_bookmarks = bookmarks;
        self
    }

    pub fn with_listed_bookmarks(mut self, bookmarks: Vec<Bookmark>) -> Self {
        self.listed_bookmarks = bookmarks;
        self
    }

    pub fn with_store_path(mut self, path: PathBuf) -> Self {
        self.store_path = Some(path);
        self
    }
}
