//! The contact collection.
//!
//! `AddressBook` owns every `Record`, offers paginated listing and substring
//! search, and saves/loads itself through a `RecordStore`.

mod address_book;

pub use address_book::{AddressBook, LoadReport, Pages};
