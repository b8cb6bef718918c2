use crate::error::{BookmarkError, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

const APP_NAME: &str = "simple_bookmarks_manager";
const BOOKMARKS_FILENAME: &str = "bookmarks";

/// Process-wide settings, resolved once at startup and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Explicit path to the backing file; `None` means the platform default
    pub bookmarks: Option<PathBuf>,
    /// Enables debug-level logging
    pub debug: bool,
    /// Create the backing file on startup if it is missing
    pub create_bookmarks_file: bool,
}

impl AppConfig {
    pub fn new(bookmarks: Option<PathBuf>, debug: bool, create_bookmarks_file: bool) -> Self {
        Self {
            bookmarks,
            debug,
            create_bookmarks_file,
        }
    }

    /// The backing file path. The platform default is only looked up here,
    /// so commands that never touch the store never need a home directory.
    pub fn bookmarks_path(&self) -> Result<PathBuf> {
        match &self.bookmarks {
            Some(path) => Ok(path.clone()),
            None => default_bookmarks_path(),
        }
    }

    /// Log filter for the `bookmarks` target.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "bookmarks=debug"
        } else {
            "bookmarks=warn"
        }
    }
}

/// `<user data dir>/simple_bookmarks_manager/<version>/bookmarks`
pub fn default_bookmarks_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", APP_NAME).ok_or_else(|| {
        BookmarkError::Config("Could not determine the user data directory".to_string())
    })?;
    Ok(versioned_path(dirs.data_dir().to_path_buf()))
}

fn versioned_path(data_dir: PathBuf) -> PathBuf {
    data_dir
        .join(env!("CARGO_PKG_VERSION"))
        .join(BOOKMARKS_FILENAME)
}
