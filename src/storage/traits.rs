use super::codec::RecordEntry;
use crate::error::StorageResult;

/// Persistent backing for an address book.
///
/// Provides abstraction over where the serialized book lives, enabling
/// different implementations (JSON file, in-memory for tests).
pub trait RecordStore {
    /// Read every persisted entry, in stored order.
    ///
    /// Returns `StorageError::NotFound` when nothing has been stored yet.
    fn read_entries(&self) -> StorageResult<Vec<RecordEntry>>;

    /// Replace the stored contents with `entries`.
    fn write_entries(&self, entries: &[RecordEntry]) -> StorageResult<()>;
}
