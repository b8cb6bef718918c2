use crate::commands::CmdResult;
use crate::store::BookmarkStore;

/// Reports where the bookmarks live. Works whether or not the store is initialized.
pub fn run<S: BookmarkStore>(store: &S) -> CmdResult {
    CmdResult::default().with_store_path(store.location())
}
