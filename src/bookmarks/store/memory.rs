use super::{BookmarkStore, InitStatus};
use crate::error::{BookmarkError, Result};
use crate::model::Bookmark;
use std::path::PathBuf;

const MEMORY_LOCATION: &str = "memory://bookmarks";

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Option<Vec<Bookmark>>,
}

impl InMemoryStore {
    /// An uninitialized store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A ready store holding `bookmarks` in order.
    pub fn with_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        Self {
            records: Some(bookmarks),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.records.is_some()
    }

    fn records(&self) -> Result<&Vec<Bookmark>> {
        self.records
            .as_ref()
            .ok_or_else(|| BookmarkError::unavailable(MEMORY_LOCATION, "store is not initialized"))
    }
}

impl BookmarkStore for InMemoryStore {
    fn initialize(&mut self) -> Result<InitStatus> {
        if self.records.is_some() {
            return Ok(InitStatus::AlreadyPresent);
        }
        self.records = Some(Vec::new());
        Ok(InitStatus::Created)
    }

    fn load_all(&self) -> Result<Vec<Bookmark>> {
        self.records().cloned()
    }

    fn write_record(&mut self, bookmark: &Bookmark) -> Result<()> {
        match self.records.as_mut() {
            Some(records) => {
                records.push(bookmark.clone());
                Ok(())
            }
            None => Err(BookmarkError::unavailable(
                MEMORY_LOCATION,
                "store is not initialized",
            )),
        }
    }

    fn location(&self) -> PathBuf {
        PathBuf::from(MEMORY_LOCATION)
    }
}
