//! Contact Book - a personal contact directory.
//!
//! This library stores contacts with validated phone numbers and birthdays,
//! supports paginated listing and substring search, and persists the whole
//! book to a flat JSON file.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (name, phone, birthday)
//! - **models**: The contact `Record` and the outcomes of its mutations
//! - **book**: The `AddressBook` collection with paging and search
//! - **storage**: JSON persistence behind the `RecordStore` trait
//! - **commands**: Typed commands, their parser and their handler
//! - **config**: Configuration from environment variables
//! - **error**: Error types for storage, configuration and commands

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use book::{AddressBook, LoadReport, Pages};
pub use commands::{parse_command, Command, CommandHandler};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{PhoneOutcome, Record};
pub use storage::{JsonFileStore, RecordEntry, RecordStore};
