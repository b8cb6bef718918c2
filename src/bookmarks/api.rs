//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for all
//! bookmark operations. It dispatches to `commands/*.rs` and returns
//! structured [`CmdResult`] values; it never prints.
//!
//! `BookmarksApi<S: BookmarkStore>` is generic over the storage backend:
//! `FileStore` in production, `InMemoryStore` in tests. External capabilities
//! (clipboard, browser) are passed in per call so they can be faked as well.

use crate::browser::BrowserLauncher;
use crate::clipboard::ClipboardSource;
use crate::commands;
use crate::error::Result;
use crate::store::BookmarkStore;

pub struct BookmarksApi<S: BookmarkStore> {
    store: S,
}

impl<S: BookmarkStore> BookmarksApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn add_bookmarks<U: AsRef<str>>(&mut self, urls: &[U]) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, urls)
    }

    pub fn add_from_clipboard<C: ClipboardSource + ?Sized>(
        &mut self,
        clipboard: &C,
    ) -> Result<commands::CmdResult> {
        commands::add::from_clipboard(&mut self.store, clipboard)
    }

    pub fn list_bookmarks(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn open_urls<B: BrowserLauncher + ?Sized, U: AsRef<str>>(
        &self,
        browser: &B,
        urls: &[U],
    ) -> commands::CmdResult {
        commands::open::run(browser, urls)
    }

    pub fn store_path(&self) -> commands::CmdResult {
        commands::paths::run(&self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::store::InitStatus;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
