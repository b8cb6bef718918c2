use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::BookmarkStore;

pub fn run<S: BookmarkStore>(store: &S) -> Result<CmdResult> {
    let bookmarks = store.load_all()?;
    Ok(CmdResult::default().with_listed_bookmarks(bookmarks))
}
