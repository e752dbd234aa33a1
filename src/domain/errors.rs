//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is not `+` followed by 12 digits.
    InvalidPhoneFormat(String),

    /// The provided birthday is not a real `dd.mm.yyyy` date.
    InvalidBirthdayFormat(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Contact name cannot be empty"),
            Self::InvalidPhoneFormat(phone) => write!(
                f,
                "Invalid phone format in {}. Please use +XXXXXXXXXXXX format.",
                phone
            ),
            Self::InvalidBirthdayFormat(birthday) => write!(
                f,
                "Invalid birthday format in {}. Please use dd.mm.yyyy format.",
                birthday
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
