//! Persistence of the address book.
//!
//! Records are projected to `RecordEntry` values and written through a
//! `RecordStore`. The shipped store is a flat JSON file.

mod codec;
mod json_file;
mod traits;

pub use codec::RecordEntry;
pub use json_file::JsonFileStore;
pub use traits::RecordStore;
