//! Turning an input line into a [`Command`].

use crate::error::{CommandError, CommandResult};
use std::path::PathBuf;

/// A request to the address book, already split into typed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    /// Add a phone to an existing contact, or create the contact.
    Add {
        name: String,
        birthday: Option<String>,
        phone: String,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    DeletePhone {
        name: String,
        phone: String,
    },
    DeleteContact {
        name: String,
    },
    Search {
        needle: String,
    },
    ShowAll {
        page_size: Option<usize>,
    },
    Load {
        path: Option<PathBuf>,
    },
    Save {
        path: Option<PathBuf>,
    },
    Exit,
}

#[derive(Debug, Clone, Copy)]
enum Keyword {
    Hello,
    Add,
    Change,
    DeletePhone,
    DeleteContact,
    Search,
    ShowAll,
    Load,
    Save,
    Exit,
}

// Longer keywords come before their prefixes.
const KEYWORDS: &[(&str, Keyword)] = &[
    ("hello", Keyword::Hello),
    ("add", Keyword::Add),
    ("+", Keyword::Add),
    ("change", Keyword::Change),
    ("delete phone", Keyword::DeletePhone),
    ("delete contact", Keyword::DeleteContact),
    ("search", Keyword::Search),
    ("show all", Keyword::ShowAll),
    ("load", Keyword::Load),
    ("save", Keyword::Save),
    ("good bye", Keyword::Exit),
    ("bye", Keyword::Exit),
    ("exit", Keyword::Exit),
    ("close", Keyword::Exit),
    ("end", Keyword::Exit),
];

/// Parse one line of user input.
///
/// The keyword is matched case-insensitively at the start of the line; the
/// rest is split on whitespace and keeps its original case.
///
/// # Errors
///
/// `CommandError::UnknownCommand` when no keyword matches,
/// `CommandError::InvalidArguments` when the argument count or a numeric
/// argument is wrong.
pub fn parse_command(line: &str) -> CommandResult<Command> {
    let line = line.trim();
    let lowered = line.to_lowercase();

    let (keyword_len, keyword) = KEYWORDS
        .iter()
        .find(|(kw, _)| lowered.starts_with(kw))
        .map(|(kw, keyword)| (kw.len(), *keyword))
        .ok_or_else(|| CommandError::UnknownCommand(line.to_string()))?;

    // Lowercasing can shift byte offsets for non-ASCII input; keywords are
    // ASCII so the prefix length is only valid when the boundary lines up.
    let rest = line
        .get(keyword_len..)
        .ok_or_else(|| CommandError::UnknownCommand(line.to_string()))?;
    let args: Vec<String> = rest.split_whitespace().map(str::to_string).collect();

    build(keyword, args)
}

fn build(keyword: Keyword, args: Vec<String>) -> CommandResult<Command> {
    let mut args = args.into_iter();
    let mut next = || args.next();

    let command = match keyword {
        Keyword::Hello => Command::Hello,
        Keyword::Exit => Command::Exit,
        Keyword::Add => {
            let name = required(next(), "add", "name")?;
            let first = required(next(), "add", "phone")?;
            match next() {
                Some(phone) => Command::Add {
                    name,
                    birthday: Some(first),
                    phone,
                },
                None => Command::Add {
                    name,
                    birthday: None,
                    phone: first,
                },
            }
        }
        Keyword::Change => Command::Change {
            name: required(next(), "change", "name")?,
            old_phone: required(next(), "change", "old phone")?,
            new_phone: required(next(), "change", "new phone")?,
        },
        Keyword::DeletePhone => Command::DeletePhone {
            name: required(next(), "delete phone", "name")?,
            phone: required(next(), "delete phone", "phone")?,
        },
        Keyword::DeleteContact => Command::DeleteContact {
            name: required(next(), "delete contact", "name")?,
        },
        Keyword::Search => Command::Search {
            needle: required(next(), "search", "search text")?,
        },
        Keyword::ShowAll => {
            let page_size = next()
                .map(|raw| {
                    raw.parse::<usize>()
                        .ok()
                        .filter(|&n| n > 0)
                        .ok_or_else(|| CommandError::InvalidArguments {
                            command: "show all",
                            reason: format!("page size must be a positive number, got {}", raw),
                        })
                })
                .transpose()?;
            Command::ShowAll { page_size }
        }
        Keyword::Load => Command::Load {
            path: next().map(PathBuf::from),
        },
        Keyword::Save => Command::Save {
            path: next().map(PathBuf::from),
        },
    };

    if let Some(extra) = next() {
        return Err(CommandError::InvalidArguments {
            command: keyword.name(),
            reason: format!("unexpected argument {}", extra),
        });
    }

    Ok(command)
}

fn required(arg: Option<String>, command: &'static str, what: &str) -> CommandResult<String> {
    arg.ok_or_else(|| CommandError::InvalidArguments {
        command,
        reason: format!("missing {}", what),
    })
}

impl Keyword {
    fn name(self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::DeletePhone => "delete phone",
            Self::DeleteContact => "delete contact",
            Self::Search => "search",
            Self::ShowAll => "show all",
            Self::Load => "load",
            Self::Save => "save",
            Self::Exit => "exit",
        }
    }
}
