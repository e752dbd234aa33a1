//! Mapping between records and their persisted JSON shape.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};

/// One contact as written to disk.
///
/// ```json
/// {"name": "Bill", "birthday": "01.01.1990", "phones": ["+380501234567"]}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordEntry {
    pub name: String,
    pub birthday: String,
    #[serde(default)]
    pub phones: Vec<String>,
}

impl TryFrom<&Record> for RecordEntry {
    type Error = StorageError;

    fn try_from(record: &Record) -> StorageResult<Self> {
        let birthday = record
            .birthday()
            .ok_or_else(|| StorageError::MissingBirthday {
                name: record.name().to_string(),
            })?;

        Ok(Self {
            name: record.name().to_string(),
            birthday: birthday.to_string(),
            phones: record.phones().iter().map(|p| p.to_string()).collect(),
        })
    }
}

impl TryFrom<RecordEntry> for Record {
    type Error = StorageError;

    fn try_from(entry: RecordEntry) -> StorageResult<Self> {
        let invalid = |source: ValidationError| StorageError::InvalidEntry {
            name: entry.name.clone(),
            source,
        };

        let name = Name::new(entry.name.as_str()).map_err(invalid)?;
        let birthday = Birthday::new(&entry.birthday).map_err(invalid)?;
        let phones = entry
            .phones
            .iter()
            .map(|raw| Phone::new(raw))
            .collect::<Result<Vec<_>, _>>()
            .map_err(invalid)?;

        Ok(Record::with_phones(name, Some(birthday), phones))
    }
}
