//! Informational results of phone mutations.

use crate::domain::{Name, Phone};
use std::fmt;

/// What a phone mutation on a record did.
///
/// None of these are failures; a `NotFound` is an ordinary negative answer
/// the caller is expected to branch on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneOutcome {
    /// The phone was appended to the record.
    Added { contact: Name, phone: Phone },

    /// An equal phone already existed; nothing changed.
    AlreadyPresent { contact: Name, phone: Phone },

    /// The old phone was replaced by the new one.
    Changed {
        contact: Name,
        old_phone: Phone,
        new_phone: Phone,
    },

    /// The phone was removed from the record.
    Deleted { contact: Name, phone: Phone },

    /// The record has no such phone.
    NotFound { contact: Name, phone: Phone },
}

impl PhoneOutcome {
    /// Whether the record was modified.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::Added { .. } | Self::Changed { .. } | Self::Deleted { .. }
        )
    }
}

impl fmt::Display for PhoneOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added { contact, phone } => {
                write!(f, "phone {} added to contact {}", phone, contact)
            }
            Self::AlreadyPresent { contact, phone } => {
                write!(f, "{} present in phones of contact {}", phone, contact)
            }
            Self::Changed {
                old_phone,
                new_phone,
                ..
            } => write!(f, "old phone {} changed to {}", old_phone, new_phone),
            Self::Deleted { contact, phone } => {
                write!(f, "Phone {} deleted from contact {}.", phone, contact)
            }
            Self::NotFound { contact, phone } => {
                write!(f, "Phone {} not found in contact {}.", phone, contact)
            }
        }
    }
}
