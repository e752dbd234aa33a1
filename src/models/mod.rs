//! Data models for the contact book.
//!
//! This module contains the `Record` entity (one contact with its phones and
//! birthday) and the outcome values its mutations report.

pub mod outcome;
pub mod record;

pub use outcome::PhoneOutcome;
pub use record::Record;
