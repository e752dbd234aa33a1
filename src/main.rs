//! Contact Book - Main entry point
//!
//! Interactive prompt over the address book. The book is loaded from the
//! configured file at start and written back when the session ends.

use anyhow::{Context, Result};
use contact_book::{parse_command, AddressBook, Command, CommandHandler, Config};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr so they never interleave with replies on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(path = %config.book_path.display(), "Starting contact book");

    let mut book = AddressBook::new();
    println!("{}", book.load_json(&config.book_path));

    run_session(&mut book, &config)?;

    if let Err(e) = book.save_json(&config.book_path) {
        error!("Failed to save address book: {}", e);
        return Err(e).context("Address book was not saved");
    }
    println!("The address book data has been saved.");

    info!("Contact book shutdown complete");
    Ok(())
}

/// Read commands until an exit keyword or end of input.
fn run_session(book: &mut AddressBook, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handler = CommandHandler::new(book, config);
    let mut lines = stdin.lock().lines();

    loop {
        write!(stdout, ">>> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(stdout, "{}", e)?;
                continue;
            }
        };
        let exit = command == Command::Exit;

        match handler.execute(command) {
            Ok(reply) => writeln!(stdout, "{}", reply)?,
            Err(e) => writeln!(stdout, "{}", e)?,
        }

        if exit {
            break;
        }
    }

    Ok(())
}
