//! Test fixtures and sample data.
//!
//! This module provides reusable records and persisted entries for the
//! integration tests.

use contact_book::{Birthday, Name, Phone, Record, RecordEntry};

/// Create a record with a birthday and the given phones.
pub fn sample_record(name: &str, birthday: &str, phones: &[&str]) -> Record {
    Record::with_phones(
        Name::new(name).unwrap(),
        Some(Birthday::new(birthday).unwrap()),
        phones.iter().map(|p| Phone::new(p).unwrap()),
    )
}

/// Create a record that has no birthday.
#[allow(dead_code)]
pub fn record_without_birthday(name: &str, phone: &str) -> Record {
    Record::new(Name::new(name).unwrap(), None, Some(Phone::new(phone).unwrap()))
}

/// Create a persisted entry.
#[allow(dead_code)]
pub fn sample_entry(name: &str, birthday: &str, phones: &[&str]) -> RecordEntry {
    RecordEntry {
        name: name.to_string(),
        birthday: birthday.to_string(),
        phones: phones.iter().map(|p| p.to_string()).collect(),
    }
}

/// Project a record to comparable (name, birthday, phones) form.
#[allow(dead_code)]
pub fn tuple_of(record: &Record) -> (String, Option<String>, Vec<String>) {
    (
        record.name().to_string(),
        record.birthday().map(|b| b.to_string()),
        record.phones().iter().map(|p| p.to_string()).collect(),
    )
}
