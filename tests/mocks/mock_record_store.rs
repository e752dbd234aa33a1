use contact_book::error::{StorageError, StorageResult};
use contact_book::storage::{RecordEntry, RecordStore};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock record store for testing.
///
/// Provides an in-memory implementation of RecordStore that can be
/// seeded with entries, made to fail on write, and tracks method calls
/// for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockRecordStore {
    entries: Arc<Mutex<Option<Vec<RecordEntry>>>>,
    fail_writes: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockRecordStore {
    /// Create a store that holds nothing yet (reads report NotFound).
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(None)),
            fail_writes: Arc::new(Mutex::new(false)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Create a store pre-seeded with `entries`.
    pub fn with_entries(entries: Vec<RecordEntry>) -> Self {
        let store = Self::new();
        *store.entries.lock().unwrap() = Some(entries);
        store
    }

    /// Make every subsequent write fail with an I/O error.
    pub fn fail_writes(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }

    /// Entries written so far, if any.
    pub fn stored(&self) -> Option<Vec<RecordEntry>> {
        self.entries.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MockRecordStore {
    fn read_entries(&self) -> StorageResult<Vec<RecordEntry>> {
        self.track_call("read_entries");

        self.entries
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| StorageError::NotFound(PathBuf::from("memory")))
    }

    fn write_entries(&self, entries: &[RecordEntry]) -> StorageResult<()> {
        self.track_call("write_entries");

        if *self.fail_writes.lock().unwrap() {
            return Err(StorageError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only store",
            )));
        }

        *self.entries.lock().unwrap() = Some(entries.to_vec());
        Ok(())
    }
}
