use crate::browser::BrowserLauncher;
use crate::commands::{CmdMessage, CmdResult};
use tracing::warn;

/// Opens each URL with the launcher, in order. The store is never consulted.
///
/// A URL that fails to open is reported and the rest are still attempted.
pub fn run<B: BrowserLauncher + ?Sized, U: AsRef<str>>(browser: &B, urls: &[U]) -> CmdResult {
    let mut result = CmdResult::default();

    for url in urls {
        let url = url.as_ref();
        match browser.open(url) {
            Ok(()) => result.opened_urls.push(url.to_string()),
            Err(e) => {
                warn!(%url, error = %e, "failed to open browser");
                result.add_message(CmdMessage::error(format!(
                    "Failed to open {}: {}",
                    url, e
                )));
            }
        }
    }

    result
}
