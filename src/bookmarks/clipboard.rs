use crate::error::{BookmarkError, Result};
use std::process::Command;

/// Anything that can hand back the current clipboard text.
pub trait ClipboardSource {
    fn read_text(&self) -> Result<String>;
}

/// The OS clipboard, read through the platform's command-line tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSource for SystemClipboard {
    fn read_text(&self) -> Result<String> {
        get_from_clipboard()
    }
}

/// Reads text from the system clipboard in an OS-specific way.
/// - macOS: uses pbpaste
/// - Linux: uses xclip or xsel
/// - Windows: uses powershell Get-Clipboard
pub fn get_from_clipboard() -> Result<String> {
    #[cfg(target_os = "macos")]
    {
        get_macos()
    }

    #[cfg(target_os = "linux")]
    {
        get_linux()
    }

    #[cfg(target_os = "windows")]
    {
        get_windows()
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(BookmarkError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

fn decode_output(stdout: Vec<u8>) -> Result<String> {
    String::from_utf8(stdout)
        .map_err(|e| BookmarkError::Clipboard(format!("Invalid UTF-8 in clipboard: {}", e)))
}

#[cfg(target_os = "macos")]
fn get_macos() -> Result<String> {
    let output = Command::new("pbpaste")
        .output()
        .map_err(|e| BookmarkError::Clipboard(format!("Failed to execute pbpaste: {}", e)))?;

    if output.status.success() {
        decode_output(output.stdout)
    } else {
        Err(BookmarkError::Clipboard(
            "pbpaste exited with error".to_string(),
        ))
    }
}

#[cfg(target_os = "linux")]
fn get_linux() -> Result<String> {
    let result = Command::new("xclip")
        .args(["-selection", "clipboard", "-o"])
        .output();

    if let Ok(output) = result {
        if output.status.success() {
            return decode_output(output.stdout);
        }
    }

    // xsel as fallback
    let result = Command::new("xsel")
        .args(["--clipboard", "--output"])
        .output();

    match result {
        Ok(output) if output.status.success() => decode_output(output.stdout),
        Ok(_) => Err(BookmarkError::Clipboard(
            "xsel exited with error".to_string(),
        )),
        Err(e) => Err(BookmarkError::Clipboard(format!(
            "Failed to execute xclip or xsel: {}. Install xclip or xsel.",
            e
        ))),
    }
}

#[cfg(target_os = "windows")]
fn get_windows() -> Result<String> {
    let output = Command::new("powershell")
        .args(["-command", "Get-Clipboard"])
        .output()
        .map_err(|e| BookmarkError::Clipboard(format!("Failed to execute powershell: {}", e)))?;

    if output.status.success() {
        decode_output(output.stdout)
    } else {
        Err(BookmarkError::Clipboard(
            "powershell exited with error".to_string(),
        ))
    }
}

/// Turns raw clipboard text into a single URL candidate.
/// Surrounding whitespace (including the trailing newline most tools add) is dropped.
pub fn url_from_clipboard_text(text: &str) -> Result<String> {
    let url = text.trim();
    if url.is_empty() {
        return Err(BookmarkError::Clipboard("Clipboard is empty".to_string()));
    }
    Ok(url.to_string())
}
