//! Command handlers against the address book.
//!
//! Each handler returns `Result<String, CommandError>`; [`respond`] is the
//! single place where an error becomes user-facing text, so no recognized
//! failure ever escapes a command's processing or touches book state it
//! should not.

use crate::book::AddressBook;
use crate::domain::ContactName;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use crate::repl::parse::{parse_line, Command};
use chrono::{Local, NaiveDate};
use tracing::debug;

/// The outcome of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Text to print; the loop continues.
    Reply(String),
    /// The session is over.
    Exit,
}

/// Parse and execute one line against the book, normalizing every
/// recognized failure into its user-facing message.
///
/// Returns `None` for blank lines.
pub fn respond(line: &str, book: &mut AddressBook, horizon_days: i64) -> Option<Response> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let command = match parse_line(trimmed) {
        Ok(Command::Exit) => return Some(Response::Exit),
        Ok(Command::Unknown(_)) => {
            return Some(Response::Reply("Invalid command.".to_string()));
        }
        Ok(command) => command,
        Err(err) => return Some(Response::Reply(err.to_string())),
    };

    debug!(?command, "dispatching");
    let reply = execute(command, book, horizon_days).unwrap_or_else(|err| err.to_string());
    Some(Response::Reply(reply))
}

/// Execute a parsed command. `Exit` and `Unknown` are handled by
/// [`respond`] before reaching this point.
fn execute(command: Command, book: &mut AddressBook, horizon_days: i64) -> CommandResult<String> {
    match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add { name, phone } => add_contact(&name, &phone, book),
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => change_phone(&name, &old_phone, &new_phone, book),
        Command::Phone { name } => show_phones(&name, book),
        Command::All => Ok(show_all(book)),
        Command::AddBirthday { name, birthday } => add_birthday(&name, &birthday, book),
        Command::ShowBirthday { name } => show_birthday(&name, book),
        Command::Birthdays => Ok(birthdays_on(book, Local::now().date_naive(), horizon_days)),
        Command::Delete { name } => delete_contact(&name, book),
        Command::Exit | Command::Unknown(_) => Ok(String::new()),
    }
}

/// `add`: insert-or-update a contact and append the phone.
///
/// The phone is validated before a new record is stored, so a rejected
/// phone never leaves a phoneless contact behind.
fn add_contact(name: &str, phone: &str, book: &mut AddressBook) -> CommandResult<String> {
    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            Ok("Contact updated.".to_string())
        }
        None => {
            let mut record = Record::new(ContactName::new(name)?);
            record.add_phone(phone)?;
            book.add_record(record);
            Ok("Contact added.".to_string())
        }
    }
}

/// `change`: replace one phone on an existing contact.
fn change_phone(
    name: &str,
    old_phone: &str,
    new_phone: &str,
    book: &mut AddressBook,
) -> CommandResult<String> {
    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.edit_phone(old_phone, new_phone)?;
    Ok("Contact phone changed.".to_string())
}

/// `phone`: list a contact's phones, comma-joined.
fn show_phones(name: &str, book: &AddressBook) -> CommandResult<String> {
    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;
    Ok(record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", "))
}

/// `all`: every record, one per line, in name order.
fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts found.".to_string();
    }
    book.records()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday`: set a birthday on an existing contact.
fn add_birthday(name: &str, birthday: &str, book: &mut AddressBook) -> CommandResult<String> {
    let record = book.find_mut(name).ok_or(CommandError::ContactNotFound)?;
    record.set_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday`: a contact's birthday in `DD.MM.YYYY`.
fn show_birthday(name: &str, book: &AddressBook) -> CommandResult<String> {
    let record = book.find(name).ok_or(CommandError::ContactNotFound)?;
    match record.birthday() {
        Some(birthday) => Ok(birthday.to_string()),
        None => Err(CommandError::BirthdayNotSet),
    }
}

/// `birthdays`: the grouped reminder report relative to `today`.
///
/// Split out from [`execute`] so tests can pin the reference date.
pub fn birthdays_on(book: &AddressBook, today: NaiveDate, horizon_days: i64) -> String {
    let groups = book.upcoming_birthdays(today, horizon_days);
    if groups.is_empty() {
        return "No upcoming birthdays in the next week.".to_string();
    }
    groups
        .iter()
        .map(|group| group.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// `delete`: remove a contact.
fn delete_contact(name: &str, book: &mut AddressBook) -> CommandResult<String> {
    book.delete(name)?;
    Ok("Contact deleted.".to_string())
}
