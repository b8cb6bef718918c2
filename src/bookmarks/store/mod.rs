//! # Storage Layer
//!
//! Bookmarks live in a single append-only backing file, one JSON record per
//! line. The [`BookmarkStore`] trait abstracts that file so the command layer
//! can be exercised without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production store over the backing file
//! - [`memory::InMemoryStore`]: in-memory store for tests
//!
//! ## States
//!
//! A store is either *uninitialized* (no backing file) or *ready* (the
//! backing file exists as a regular file). [`BookmarkStore::initialize`] is
//! the only transition between the two; every other operation requires a
//! ready store and fails with `StoreUnavailable` otherwise.
//!
//! ## Storage Format
//!
//! ```text
//! {"url":"https://a.com"}
//! {"url":"https://b.com","title":"B"}
//! ```
//!
//! Records are never rewritten: new bookmarks are appended, and there is no
//! update or delete. Loads return a fresh snapshot in file order.
//!
//! The duplicate check in [`BookmarkStore::append`] and the write that
//! follows are not atomic. Two processes appending the same URL at the same
//! time can both succeed.

use crate::error::{BookmarkError, Result};
use crate::model::Bookmark;
use std::path::PathBuf;

pub mod fs;
pub mod memory;
pub mod record;

/// Outcome of [`BookmarkStore::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStatus {
    /// The backing file was missing and has been created empty.
    Created,
    /// The backing file already existed; nothing was touched.
    AlreadyPresent,
    /// Something other than a regular file sits at the path. Left alone.
    NotARegularFile,
}

/// Abstract interface for bookmark storage.
pub trait BookmarkStore {
    /// Create the backing file (and its parents) if it is missing.
    /// Safe to call on every invocation.
    fn initialize(&mut self) -> Result<InitStatus>;

    /// Load every record, in insertion order.
    fn load_all(&self) -> Result<Vec<Bookmark>>;

    /// Append one record without checking for duplicates.
    fn write_record(&mut self, bookmark: &Bookmark) -> Result<()>;

    /// Where the records live, for display.
    fn location(&self) -> PathBuf;

    /// Whether a record with exactly this URL is stored.
    fn exists(&self, url: &str) -> Result<bool> {
        Ok(self.load_all()?.iter().any(|b| b.url == url))
    }

    /// Append a bookmark unless its URL is already stored.
    fn append(&mut self, bookmark: &Bookmark) -> Result<()> {
        if self.exists(&bookmark.url)? {
            return Err(BookmarkError::DuplicateUrl(bookmark.url.clone()));
        }
        self.write_record(bookmark)
    }
}
