//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honored if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// File the address book is loaded from at start and saved to on exit
    /// (default: "address_book.json")
    pub book_path: PathBuf,

    /// Minimum length of a search string (default: 3)
    pub min_search_chars: usize,

    /// Log level used when RUST_LOG is not set (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: Path of the JSON book file (default: "address_book.json")
    /// - `SEARCH_MIN_CHARS`: Minimum search length (default: 3)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let book_path = match env::var("CONTACT_BOOK_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => defaults.book_path,
        };

        let min_search_chars = Self::parse_env_usize("SEARCH_MIN_CHARS", defaults.min_search_chars)?;
        if min_search_chars == 0 {
            return Err(ConfigError::InvalidValue {
                var: "SEARCH_MIN_CHARS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            book_path,
            min_search_chars,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from("address_book.json"),
            min_search_chars: 3,
            log_level: "warn".to_string(),
        }
    }
}
