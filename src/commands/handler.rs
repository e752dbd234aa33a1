//! Executing parsed commands against an address book.

use super::parser::Command;
use crate::book::AddressBook;
use crate::config::Config;
use crate::domain::{Birthday, Name, Phone};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use tracing::info;

/// Runs commands against a borrowed address book.
///
/// The handler owns no state of its own; the book is created by the caller
/// and lent for the duration of the session.
pub struct CommandHandler<'a> {
    book: &'a mut AddressBook,
    config: &'a Config,
}

impl<'a> CommandHandler<'a> {
    pub fn new(book: &'a mut AddressBook, config: &'a Config) -> Self {
        Self { book, config }
    }

    /// Execute `command` and return the reply to show the user.
    ///
    /// Unknown contacts and phones are ordinary replies, not errors.
    ///
    /// # Errors
    ///
    /// `CommandError::Validation` for malformed names, phones or birthdays,
    /// `CommandError::InvalidArguments` when a new contact lacks a birthday,
    /// `CommandError::Storage` when an explicit save fails.
    pub fn execute(&mut self, command: Command) -> CommandResult<String> {
        let config = self.config;

        match command {
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add {
                name,
                birthday,
                phone,
            } => self.add(&name, birthday.as_deref(), &phone),
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => {
                let old_phone = Phone::new(&old_phone)?;
                let new_phone = Phone::new(&new_phone)?;
                Ok(match self.book.get_mut(&name) {
                    Some(record) => record.change_phone(old_phone, new_phone).to_string(),
                    None => no_contact(&name),
                })
            }
            Command::DeletePhone { name, phone } => {
                let phone = Phone::new(&phone)?;
                Ok(match self.book.get_mut(&name) {
                    Some(record) => record.delete_phone(phone).to_string(),
                    None => no_contact(&name),
                })
            }
            Command::DeleteContact { name } => Ok(match self.book.remove_record(&name) {
                Some(record) => format!("Contact {} deleted.", record.name()),
                None => no_contact(&name),
            }),
            Command::Search { needle } => Ok(self.search(&needle)),
            Command::ShowAll { page_size } => Ok(self.show_all(page_size)),
            Command::Load { path } => {
                let path = path.as_deref().unwrap_or(&config.book_path);
                Ok(self.book.load_json(path).to_string())
            }
            Command::Save { path } => {
                let path = path.as_deref().unwrap_or(&config.book_path);
                self.book.save_json(path)?;
                info!(path = %path.display(), "Saved on request");
                Ok("The address book data has been saved.".to_string())
            }
            Command::Exit => Ok("Good bye!".to_string()),
        }
    }

    fn add(&mut self, name: &str, birthday: Option<&str>, phone: &str) -> CommandResult<String> {
        let name = Name::new(name)?;
        let phone = Phone::new(phone)?;

        if let Some(record) = self.book.get_mut(name.as_str()) {
            return Ok(record.add_phone(phone).to_string());
        }

        let birthday = birthday.ok_or_else(|| CommandError::InvalidArguments {
            command: "add",
            reason: format!("a birthday is required to create contact {}", name),
        })?;
        let birthday = Birthday::new(birthday)?;

        Ok(self
            .book
            .add_record(Record::new(name, Some(birthday), Some(phone))))
    }

    fn search(&self, needle: &str) -> String {
        if needle.chars().count() < self.config.min_search_chars {
            return format!(
                "Not enough characters (at least {})",
                self.config.min_search_chars
            );
        }

        let hits = self.book.search(needle);
        if hits.is_empty() {
            return format!("No contacts match '{}'", needle);
        }

        hits.iter()
            .map(|record| record.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn show_all(&self, page_size: Option<usize>) -> String {
        if self.book.is_empty() {
            return "Address book is empty".to_string();
        }

        match page_size {
            Some(size) => self
                .book
                .pages(size)
                .enumerate()
                .map(|(i, page)| format!("page {}\n{}", i + 1, page))
                .collect::<Vec<_>>()
                .join("\n"),
            None => self.book.to_string(),
        }
    }
}

fn no_contact(name: &str) -> String {
    format!("No contact {} in address book", name)
}
