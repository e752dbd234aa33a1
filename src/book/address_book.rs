//! The address book: contacts keyed by name, in insertion order.

use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use crate::storage::{JsonFileStore, RecordEntry, RecordStore};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use tracing::{debug, info, warn};

/// Result of loading persisted contacts.
///
/// Loading never fails hard: a missing or broken file is reported here and
/// the book is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadReport {
    /// This many distinct contacts were merged into the book.
    Loaded(usize),

    /// Nothing has been stored yet.
    Missing,

    /// The stored data could not be read or failed validation.
    Malformed(String),
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loaded(count) => write!(f, "Address book data loaded ({} contacts).", count),
            Self::Missing => write!(f, "No saved address book found, starting empty."),
            Self::Malformed(reason) => write!(
                f,
                "Saved address book does not contain valid data ({}), starting empty.",
                reason
            ),
        }
    }
}

/// All contacts, keyed by name.
///
/// Iteration follows first-insertion order. Adding a record under a name
/// that already exists replaces the old record in its original position.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&idx| &self.records[idx])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        let idx = *self.index.get(name)?;
        Some(&mut self.records[idx])
    }

    /// All records in iteration order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Insert `record`, replacing any record with the same name.
    ///
    /// Returns a confirmation message naming the stored contact.
    pub fn add_record(&mut self, record: Record) -> String {
        let message = format!("Contact {} added", record);
        self.insert(record);
        message
    }

    fn insert(&mut self, record: Record) {
        let key = record.name().to_string();
        match self.index.get(&key).copied() {
            Some(idx) => {
                debug!(contact = %key, "Replacing existing contact");
                self.records[idx] = record;
            }
            None => {
                debug!(contact = %key, "Adding contact");
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Remove and return the record filed under `name`.
    pub fn remove_record(&mut self, name: &str) -> Option<Record> {
        let idx = self.index.remove(name)?;
        let record = self.records.remove(idx);

        for slot in self.index.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }

        debug!(contact = %name, "Removed contact");
        Some(record)
    }

    /// Lazily render the book in pages of up to `page_size` records.
    ///
    /// Each call starts over from the first record. A `page_size` of zero
    /// is treated as one.
    pub fn pages(&self, page_size: usize) -> Pages<'_> {
        Pages {
            records: self.records.iter(),
            page_size: page_size.max(1),
        }
    }

    /// Every record whose rendered form contains `needle`, case-sensitively.
    pub fn search(&self, needle: &str) -> Vec<&Record> {
        let hits: Vec<&Record> = self
            .records
            .iter()
            .filter(|record| record.to_string().contains(needle))
            .collect();

        debug!(needle = %needle, result_count = hits.len(), "Search completed");
        hits
    }

    /// Write every record to `store`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::MissingBirthday` if any record lacks a birthday,
    /// in which case nothing is written, or the store's own write error.
    pub fn save_to(&self, store: &dyn RecordStore) -> StorageResult<()> {
        let entries = self
            .records
            .iter()
            .map(RecordEntry::try_from)
            .collect::<StorageResult<Vec<_>>>()?;

        store.write_entries(&entries)?;
        info!(count = entries.len(), "Address book saved");
        Ok(())
    }

    /// Write every record as JSON to the file at `path`.
    pub fn save_json(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        self.save_to(&JsonFileStore::new(path.as_ref()))
    }

    /// Merge the records held by `store` into the book.
    ///
    /// Either every stored record is merged or none is. When the store
    /// holds several entries under one name, the last one wins.
    pub fn load_from(&mut self, store: &dyn RecordStore) -> LoadReport {
        let loaded = store.read_entries().and_then(|entries| {
            entries
                .into_iter()
                .map(Record::try_from)
                .collect::<StorageResult<Vec<_>>>()
        });

        match loaded {
            Ok(records) => {
                let mut merged = HashSet::new();
                for record in records {
                    let name = record.name().to_string();
                    if merged.contains(&name) {
                        warn!(contact = %name, "Stored contact appears more than once");
                    }
                    self.insert(record);
                    merged.insert(name);
                }
                info!(count = merged.len(), "Address book loaded");
                LoadReport::Loaded(merged.len())
            }
            Err(StorageError::NotFound(path)) => {
                warn!(path = %path.display(), "No saved address book");
                LoadReport::Missing
            }
            Err(e) => {
                warn!(error = %e, "Saved address book is unreadable");
                LoadReport::Malformed(e.to_string())
            }
        }
    }

    /// Merge the records in the JSON file at `path` into the book.
    pub fn load_json(&mut self, path: impl AsRef<Path>) -> LoadReport {
        self.load_from(&JsonFileStore::new(path.as_ref()))
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

/// Iterator over rendered pages of an [`AddressBook`].
///
/// Pages are built on demand; each holds up to `page_size` records joined
/// by newlines, and the last page may be shorter.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    records: std::slice::Iter<'a, Record>,
    page_size: usize,
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let page: Vec<String> = self
            .records
            .by_ref()
            .take(self.page_size)
            .map(|record| record.to_string())
            .collect();

        if page.is_empty() {
            None
        } else {
            Some(page.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Birthday, Name, Phone};

    fn record(name: &str, phone: &str) -> Record {
        Record::new(
            Name::new(name).unwrap(),
            Some(Birthday::new("01.01.1990").unwrap()),
            Some(Phone::new(phone).unwrap()),
        )
    }

    fn book_of(count: usize) -> AddressBook {
        let mut book = AddressBook::new();
        for i in 0..count {
            book.add_record(record(&format!("Contact{}", i), &format!("38050000000{}", i)));
        }
        book
    }

    #[test]
    fn test_add_record_and_get() {
        let mut book = AddressBook::new();
        let message = book.add_record(record("Bill", "380501234567"));
        assert!(message.starts_with("Contact Bill "));
        assert!(message.ends_with(" added"));
        assert!(book.contains("Bill"));
        assert_eq!(book.get("Bill").unwrap().phones().len(), 1);
        assert!(book.get("Jill").is_none());
    }

    #[test]
    fn test_add_record_overwrites_same_name_in_place() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", "111111111111"));
        book.add_record(record("Bob", "222222222222"));
        book.add_record(record("Ann", "333333333333"));

        assert_eq!(book.len(), 2);
        let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bob"]);
        assert_eq!(
            book.get("Ann").unwrap().phones(),
            &[Phone::new("333333333333").unwrap()]
        );
    }

    #[test]
    fn test_get_mut_mutates_stored_record() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", "111111111111"));

        book.get_mut("Ann")
            .unwrap()
            .add_phone(Phone::new("222222222222").unwrap());
        assert_eq!(book.get("Ann").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_remove_record_keeps_order_and_index() {
        let mut book = book_of(4);
        let removed = book.remove_record("Contact1").unwrap();
        assert_eq!(removed.name().as_str(), "Contact1");
        assert!(book.remove_record("Contact1").is_none());

        let names: Vec<&str> = book.records().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Contact0", "Contact2", "Contact3"]);
        assert_eq!(book.get("Contact3").unwrap().name().as_str(), "Contact3");
    }

    #[test]
    fn test_pages_split_with_remainder() {
        let book = book_of(5);
        let sizes: Vec<usize> = book.pages(2).map(|page| page.lines().count()).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn test_pages_exact_fit_yields_single_page() {
        let book = book_of(5);
        let pages: Vec<String> = book.pages(5).collect();
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0], book.to_string());
    }

    #[test]
    fn test_pages_follow_insertion_order_and_restart() {
        let book = book_of(3);
        let first: Vec<String> = book.pages(1).collect();
        let second: Vec<String> = book.pages(1).collect();
        assert_eq!(first, second);
        assert!(first[0].starts_with("Contact0 "));
        assert!(first[2].starts_with("Contact2 "));
    }

    #[test]
    fn test_pages_zero_size_acts_as_one() {
        let book = book_of(3);
        assert_eq!(book.pages(0).count(), 3);
    }

    #[test]
    fn test_pages_of_empty_book() {
        assert_eq!(AddressBook::new().pages(3).count(), 0);
    }

    #[test]
    fn test_search_matches_rendered_text() {
        let mut book = AddressBook::new();
        book.add_record(record("Ann", "111111111111"));
        book.add_record(record("Bob", "222222222222"));
        book.add_record(record("Annette", "333333333333"));

        let hits = book.search("Ann");
        let names: Vec<&str> = hits.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Ann", "Annette"]);

        let by_phone = book.search("2222");
        assert_eq!(by_phone.len(), 1);
        assert_eq!(by_phone[0].name().as_str(), "Bob");

        assert!(book.search("ann").is_empty());
    }

    #[test]
    fn test_display_joins_records() {
        let book = book_of(2);
        assert_eq!(book.to_string().lines().count(), 2);
        assert_eq!(AddressBook::new().to_string(), "");
    }

    #[test]
    fn test_load_report_display() {
        assert_eq!(
            LoadReport::Loaded(2).to_string(),
            "Address book data loaded (2 contacts)."
        );
    }
}
