//! Domain value objects and types.
//!
//! This module contains the validated fields a contact is made of: its
//! name, phone numbers and birthday. These value objects validate at
//! construction time so malformed input never reaches a record.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
