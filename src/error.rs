//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the persisted book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The storage file does not exist
    #[error("Storage file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON or does not match the expected layout
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A record cannot be persisted because it has no birthday
    #[error("Contact {name} has no birthday and cannot be saved")]
    MissingBirthday { name: String },

    /// A persisted entry holds a value that fails validation
    #[error("Invalid entry for contact {name}: {source}")]
    InvalidEntry {
        name: String,
        #[source]
        source: ValidationError,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while parsing or executing a command.
#[derive(Error, Debug)]
pub enum CommandError {
    /// No command keyword matched the input
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The command keyword matched but its arguments are unusable
    #[error("Invalid arguments for {command}: {reason}")]
    InvalidArguments {
        command: &'static str,
        reason: String,
    },

    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Saving the book failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorageError::NotFound(PathBuf::from("book.json"));
        assert_eq!(err.to_string(), "Storage file not found: book.json");

        let err = StorageError::MissingBirthday {
            name: "Bill".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Contact Bill has no birthday and cannot be saved"
        );

        let err = ConfigError::InvalidValue {
            var: "SEARCH_MIN_CHARS".to_string(),
            reason: "Must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for SEARCH_MIN_CHARS: Must be at least 1"
        );

        let err = CommandError::UnknownCommand("fly".to_string());
        assert_eq!(err.to_string(), "Unknown command: fly");
    }

    #[test]
    fn test_validation_error_passes_through() {
        let err: CommandError = ValidationError::InvalidPhoneFormat("12".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Invalid phone format in 12. Please use +XXXXXXXXXXXX format."
        );
    }
}
