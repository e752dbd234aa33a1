use super::codec::RecordEntry;
use super::traits::RecordStore;
use crate::error::{StorageError, StorageResult};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Record store backed by a single JSON file.
///
/// The whole book is read and rewritten at once; there is no incremental
/// or append mode. Writes go to a temporary file next to the target which
/// then replaces it, so a failed write leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordStore for JsonFileStore {
    fn read_entries(&self) -> StorageResult<Vec<RecordEntry>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };

        let entries: Vec<RecordEntry> = serde_json::from_str(&text)?;
        debug!(path = %self.path.display(), count = entries.len(), "Read entries");
        Ok(entries)
    }

    fn write_entries(&self, entries: &[RecordEntry]) -> StorageResult<()> {
        let text = serde_json::to_string(entries)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(text.as_bytes())?;
        staged.as_file().sync_all()?;
        // On failure the PersistError drops the temp file with it.
        staged.persist(&self.path).map_err(|e| e.error)?;
        debug!(path = %self.path.display(), count = entries.len(), "Wrote entries");
        Ok(())
    }
}
