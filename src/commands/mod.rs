//! Command layer between the interactive prompt and the address book.
//!
//! Input lines are parsed into a typed [`Command`]; a [`CommandHandler`]
//! executes it against an injected [`AddressBook`](crate::book::AddressBook)
//! and returns the text to show.

mod handler;
mod parser;

pub use handler::CommandHandler;
pub use parser::{parse_command, Command};
