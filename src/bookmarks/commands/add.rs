use crate::clipboard::{url_from_clipboard_text, ClipboardSource};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Bookmark;
use crate::store::BookmarkStore;
use tracing::debug;

/// Adds each URL in order. URLs that are already stored are skipped silently.
pub fn run<S: BookmarkStore, U: AsRef<str>>(store: &mut S, urls: &[U]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut added = Vec::new();

    for url in urls {
        let url = url.as_ref();
        if url.trim().is_empty() {
            result.add_message(CmdMessage::warning("Skipping empty URL"));
            continue;
        }

        let bookmark = Bookmark::new(url);
        match store.append(&bookmark) {
            Ok(()) => {
                result.add_message(CmdMessage::success(format!("Added {}", url)));
                added.push(bookmark);
            }
            Err(e) if e.is_benign() => {
                debug!(%url, "already bookmarked, skipping");
            }
            Err(e) => return Err(e),
        }
    }

    Ok(result.with_affected_bookmarks(added))
}

/// Adds the current clipboard contents as a single URL.
pub fn from_clipboard<S: BookmarkStore, C: ClipboardSource + ?Sized>(
    store: &mut S,
    clipboard: &C,
) -> Result<CmdResult> {
    let text = clipboard.read_text()?;
    let url = url_from_clipboard_text(&text)?;
    run(store, &[url])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::BookmarkError;
    use crate::store::memory::InMemoryStore;

    struct FixedClipboard(&'static str);

    impl ClipboardSource for FixedClipboard {
        fn read_text(&self) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct BrokenClipboard;

    impl ClipboardSource for BrokenClipboard {
        fn read_text(&self) -> Result<String> {
            Err(BookmarkError::Clipboard("no display".into()))
        }
    }

    fn ready_store() -> InMemoryStore {
        InMemoryStore::with_bookmarks(Vec::new())
    }

    fn stored_urls(store: &InMemoryStore) -> Vec<String> {
        store
            .load_all()
            .unwrap()
            .into_iter()
            .map(|b| b.url)
            .collect()
    }

    #[test]
    fn adding_twice_keeps_one_record() {
        let mut store = ready_store();
        run(&mut store, &["https://a.com"]).unwrap();
        let second = run(&mut store, &["https://a.com"]).unwrap();

        assert!(second.affected_bookmarks.is_empty());
        assert!(second.messages.is_empty());
        assert_eq!(stored_urls(&store), vec!["https://a.com"]);
    }

    #[test]
    fn appends_after_existing_records() {
        let mut store = InMemoryStore::with_bookmarks(vec![
            Bookmark::new("https://a.com"),
            Bookmark::new("https://b.com"),
        ]);
        run(&mut store, &["https://c.com"]).unwrap();

        assert_eq!(
            stored_urls(&store),
            vec!["https://a.com", "https://b.com", "https://c.com"]
        );
    }

    #[test]
    fn duplicates_within_one_call_are_skipped() {
        let mut store = ready_store();
        let result = run(&mut store, &["https://a.com", "https://b.com", "https://a.com"]).unwrap();

        assert_eq!(result.affected_bookmarks.len(), 2);
        assert_eq!(stored_urls(&store), vec!["https://a.com", "https://b.com"]);
    }

    #[test]
    fn reports_each_added_url() {
        let mut store = ready_store();
        let result = run(&mut store, &["https://a.com"]).unwrap();

        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains("https://a.com"));
    }

    #[test]
    fn empty_urls_are_skipped_with_warning() {
        let mut store = ready_store();
        let result = run(&mut store, &["  ", "https://a.com"]).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(stored_urls(&store), vec!["https://a.com"]);
    }

    #[test]
    fn uninitialized_store_aborts() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, &["https://a.com"]);
        assert!(matches!(result, Err(BookmarkError::StoreUnavailable { .. })));
    }

    #[test]
    fn clipboard_url_is_trimmed_and_added() {
        let mut store = ready_store();
        let result = from_clipboard(&mut store, &FixedClipboard("https://a.com\n")).unwrap();

        assert_eq!(result.affected_bookmarks, vec![Bookmark::new("https://a.com")]);
        assert_eq!(stored_urls(&store), vec!["https://a.com"]);
    }

    #[test]
    fn clipboard_duplicate_is_silent() {
        let mut store = InMemoryStore::with_bookmarks(vec![Bookmark::new("https://a.com")]);
        let result = from_clipboard(&mut store, &FixedClipboard("https://a.com")).unwrap();

        assert!(result.affected_bookmarks.is_empty());
        assert_eq!(stored_urls(&store).len(), 1);
    }

    #[test]
    fn clipboard_failures_propagate() {
        let mut store = ready_store();
        assert!(from_clipboard(&mut store, &BrokenClipboard).is_err());
        assert!(from_clipboard(&mut store, &FixedClipboard("")).is_err());
        assert!(stored_urls(&store).is_empty());
    }
}
