//! Line codec for the backing file: one JSON object per line.

use crate::error::Result;
use crate::model::Bookmark;

/// Serializes a bookmark as a single line, without the trailing newline.
pub fn encode(bookmark: &Bookmark) -> Result<String> {
    Ok(serde_json::to_string(bookmark)?)
}

/// Parses one line of the backing file.
pub fn decode(line: &str) -> serde_json::Result<Bookmark> {
    serde_json::from_str(line)
}

/// Empty and whitespace-only lines carry no record.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
