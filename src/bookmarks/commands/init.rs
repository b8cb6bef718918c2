use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{BookmarkStore, InitStatus};

pub fn run<S: BookmarkStore>(store: &mut S) -> Result<CmdResult> {
    let status = store.initialize()?;
    let location = store.location();

    let mut result = CmdResult::default().with_store_path(location.clone());
    result.init_status = Some(status);
    result.add_message(match status {
        InitStatus::Created => CmdMessage::success(format!(
            "Initialized bookmarks file at {}",
            location.display()
        )),
        InitStatus::AlreadyPresent => CmdMessage::info(format!(
            "Bookmarks file already present at {}",
            location.display()
        )),
        InitStatus::NotARegularFile => CmdMessage::warning(format!(
            "{} exists but is not a regular file",
            location.display()
        )),
    });
    Ok(result)
}
