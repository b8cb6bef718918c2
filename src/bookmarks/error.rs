use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookmarkError {
    #[error("Bookmarks file unavailable at {}: {reason}", .path.display())]
    StoreUnavailable { path: PathBuf, reason: String },

    #[error("Corrupt record in {} at line {line}: {reason}", .path.display())]
    CorruptRecord {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("URL already bookmarked: {0}")]
    DuplicateUrl(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl BookmarkError {
    pub fn unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        BookmarkError::StoreUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Errors that callers treat as a no-op rather than a failure.
    pub fn is_benign(&self) -> bool {
        matches!(self, BookmarkError::DuplicateUrl(_))
    }
}

pub type Result<T> = std::result::Result<T, BookmarkError>;
