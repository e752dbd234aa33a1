//! Phone value object.

use super::errors::ValidationError;
use super::field::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of digits a phone must carry after the `+` prefix.
pub const PHONE_DIGITS: usize = 12;

/// A normalized phone number.
///
/// The stored value is always `+` followed by exactly twelve ASCII digits.
/// Input may be given with or without the leading `+`.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("380501234567").unwrap();
/// assert_eq!(phone.as_str(), "+380501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, normalizing the format.
    ///
    /// # Validation Rules
    ///
    /// - One leading `+` is stripped if present
    /// - Exactly 12 characters must remain
    /// - Every remaining character must be an ASCII digit
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhoneFormat` if the phone format is invalid.
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        Self::normalize(raw).map(Self)
    }

    fn normalize(raw: &str) -> Result<String, ValidationError> {
        let digits = raw.strip_prefix('+').unwrap_or(raw);

        if digits.len() != PHONE_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidPhoneFormat(raw.to_string()));
        }

        Ok(format!("+{}", digits))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Phone {
    type Value = String;

    fn value(&self) -> &String {
        &self.0
    }

    fn set(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.0 = Self::normalize(raw)?;
        Ok(())
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
