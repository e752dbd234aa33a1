//! Record model representing one contact in the address book.

use super::outcome::PhoneOutcome;
use crate::domain::{Birthday, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use tracing::debug;

/// A contact: a name, an optional birthday and an ordered list of phones.
///
/// Phones keep their insertion order and are unique by normalized value.
/// The name is fixed at construction; only the phone list can be mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    birthday: Option<Birthday>,
    phones: Vec<Phone>,
}

impl Record {
    /// Create a new record with an optional birthday and first phone.
    pub fn new(name: Name, birthday: Option<Birthday>, phone: Option<Phone>) -> Self {
        Self {
            name,
            birthday,
            phones: phone.into_iter().collect(),
        }
    }

    /// Create a record carrying several phones at once.
    ///
    /// Duplicate phones are dropped, keeping the first occurrence.
    pub fn with_phones(
        name: Name,
        birthday: Option<Birthday>,
        phones: impl IntoIterator<Item = Phone>,
    ) -> Self {
        let mut record = Self::new(name, birthday, None);
        for phone in phones {
            record.add_phone(phone);
        }
        record
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    fn position_of(&self, phone: &Phone) -> Option<usize> {
        self.phones.iter().position(|p| p == phone)
    }

    /// Append a phone unless an equal one is already present.
    pub fn add_phone(&mut self, phone: Phone) -> PhoneOutcome {
        let contact = self.name.clone();

        if self.position_of(&phone).is_some() {
            return PhoneOutcome::AlreadyPresent { contact, phone };
        }

        debug!(contact = %contact, phone = %phone, "Adding phone");
        self.phones.push(phone.clone());
        PhoneOutcome::Added { contact, phone }
    }

    /// Replace the first phone equal to `old_phone` with `new_phone`, in place.
    ///
    /// If `new_phone` already sits elsewhere in the list, the old entry is
    /// dropped instead so phones stay unique.
    pub fn change_phone(&mut self, old_phone: Phone, new_phone: Phone) -> PhoneOutcome {
        let contact = self.name.clone();

        let Some(idx) = self.position_of(&old_phone) else {
            return PhoneOutcome::NotFound {
                contact,
                phone: old_phone,
            };
        };

        debug!(contact = %contact, old = %old_phone, new = %new_phone, "Changing phone");
        match self.position_of(&new_phone) {
            Some(existing) if existing != idx => {
                self.phones.remove(idx);
            }
            _ => self.phones[idx] = new_phone.clone(),
        }

        PhoneOutcome::Changed {
            contact,
            old_phone,
            new_phone,
        }
    }

    /// Remove the first phone equal to `phone`.
    pub fn delete_phone(&mut self, phone: Phone) -> PhoneOutcome {
        let contact = self.name.clone();

        match self.position_of(&phone) {
            Some(idx) => {
                debug!(contact = %contact, phone = %phone, "Deleting phone");
                self.phones.remove(idx);
                PhoneOutcome::Deleted { contact, phone }
            }
            None => PhoneOutcome::NotFound { contact, phone },
        }
    }

    /// Days until the next birthday, counting from today's local date.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday.
    ///
    /// Returns `None` when no birthday is set. A birthday that does not exist
    /// in the target year (29 February outside leap years) falls on 1 March.
    /// A birthday that is today yields `0`.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;
        let (month, day) = (birthday.month(), birthday.day());

        let mut next = occurrence_in(today.year(), month, day)?;
        if next < today {
            next = occurrence_in(today.year() + 1, month, day)?;
        }

        Some((next - today).num_days())
    }
}

/// The day a `month`/`day` birthday is celebrated in `year`.
fn occurrence_in(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let birthday = self
            .birthday
            .map(|b| b.to_string())
            .unwrap_or_default();
        let days = self
            .days_to_birthday()
            .map(|d| d.to_string())
            .unwrap_or_default();
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "{} {} ({}): {}", self.name, birthday, days, phones)
    }
}
