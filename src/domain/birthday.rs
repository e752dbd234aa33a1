//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format used for input, display and persistence.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})\.(\d{1,2})\.(\d{4})$").expect("Failed to compile birthday regex")
});

/// A contact's date of birth.
///
/// Parsed from `dd.mm.yyyy`; the stored date is always a real calendar day.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("29.02.2000").unwrap();
/// assert_eq!(birthday.to_string(), "29.02.2000");
/// assert!(Birthday::new("29.02.2001").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `dd.mm.yyyy`.
    ///
    /// Day and month may omit the leading zero.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthdayFormat` when the text does not
    /// match the pattern or names a day that does not exist.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::parse(raw).map(Self)
    }

    fn parse(raw: &str) -> Result<NaiveDate, ValidationError> {
        let invalid = || ValidationError::InvalidBirthdayFormat(raw.to_string());

        let caps = BIRTHDAY_REGEX.captures(raw.trim()).ok_or_else(invalid)?;
        let day: u32 = caps[1].parse().map_err(|_| invalid())?;
        let month: u32 = caps[2].parse().map_err(|_| invalid())?;
        let year: i32 = caps[3].parse().map_err(|_| invalid())?;

        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

impl Field for Birthday {
    type Value = NaiveDate;

    fn value(&self) -> &NaiveDate {
        &self.0
    }

    fn set(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.0 = Self::parse(raw)?;
        Ok(())
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
