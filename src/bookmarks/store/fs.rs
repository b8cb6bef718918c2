use super::{record, BookmarkStore, InitStatus};
use crate::error::{BookmarkError, Result};
use crate::model::Bookmark;
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Bookmark store backed by a single newline-delimited JSON file.
///
/// The file is opened and closed on every operation; nothing is cached.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, reason: impl ToString) -> BookmarkError {
        BookmarkError::unavailable(&self.path, reason)
    }

    fn ensure_ready(&self) -> Result<()> {
        match fs::metadata(&self.path) {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => Err(self.unavailable("not a regular file")),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(self.unavailable("file does not exist"))
            }
            Err(e) => Err(self.unavailable(e)),
        }
    }

    fn create_empty(&self) -> Result<InitStatus> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.unavailable(e))?;
        }

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(_) => {
                debug!(path = %self.path.display(), "created bookmarks file");
                Ok(InitStatus::Created)
            }
            // Another process got there first.
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(InitStatus::AlreadyPresent),
            Err(e) => Err(self.unavailable(e)),
        }
    }
}

/// True for an empty file or one whose last byte is `\n`.
fn ends_with_newline(file: &mut fs::File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

impl BookmarkStore for FileStore {
    fn initialize(&mut self) -> Result<InitStatus> {
        match fs::metadata(&self.path) {
            Ok(meta) if meta.is_file() => Ok(InitStatus::AlreadyPresent),
            Ok(_) => {
                warn!(
                    path = %self.path.display(),
                    "bookmarks path exists but is not a regular file; leaving it untouched"
                );
                Ok(InitStatus::NotARegularFile)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => self.create_empty(),
            Err(e) => Err(self.unavailable(e)),
        }
    }

    fn load_all(&self) -> Result<Vec<Bookmark>> {
        self.ensure_ready()?;
        let file = fs::File::open(&self.path).map_err(|e| self.unavailable(e))?;

        let mut bookmarks = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line_no = idx + 1;
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    return Err(BookmarkError::CorruptRecord {
                        path: self.path.clone(),
                        line: line_no,
                        reason: "line is not valid UTF-8".to_string(),
                    });
                }
                Err(e) => return Err(self.unavailable(e)),
            };

            if record::is_blank(&line) {
                continue;
            }

            let bookmark = record::decode(&line).map_err(|e| BookmarkError::CorruptRecord {
                path: self.path.clone(),
                line: line_no,
                reason: e.to_string(),
            })?;
            bookmarks.push(bookmark);
        }

        debug!(path = %self.path.display(), count = bookmarks.len(), "loaded bookmarks");
        Ok(bookmarks)
    }

    fn write_record(&mut self, bookmark: &Bookmark) -> Result<()> {
        self.ensure_ready()?;

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.unavailable(e))?;

        // A hand-edited file may end without a newline; keep records on their own lines.
        let mut line = String::new();
        if !ends_with_newline(&mut file)? {
            line.push('\n');
        }
        line.push_str(&record::encode(bookmark)?);
        line.push('\n');
        file.write_all(line.as_bytes())?;

        debug!(path = %self.path.display(), url = %bookmark.url, "appended bookmark");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
