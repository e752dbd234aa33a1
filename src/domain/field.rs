//! The `Field` abstraction shared by all contact values.

use super::errors::ValidationError;
use std::fmt;

/// A labeled scalar value belonging to a contact.
///
/// Every implementor validates its input in `set`, so a value that exists
/// always satisfies the format rules of its kind. A failed `set` leaves the
/// previous value untouched.
pub trait Field: fmt::Display + PartialEq {
    /// The stored representation.
    type Value;

    /// Borrow the stored value.
    fn value(&self) -> &Self::Value;

    /// Replace the stored value from raw user input.
    ///
    /// # Errors
    ///
    /// Returns the kind-specific `ValidationError` when `raw` is malformed.
    fn set(&mut self, raw: &str) -> Result<(), ValidationError>;
}
