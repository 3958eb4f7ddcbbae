//! Line → typed command conversion.
//!
//! One line of user text becomes a [`Command`]: the line is trimmed, split
//! on whitespace, the first token lower-cased as the command name, and the
//! remaining tokens taken as positional arguments. Tokens beyond a
//! command's arity are ignored.

use crate::error::{CommandError, CommandResult};

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello` — greeting
    Hello,
    /// `add <name> <phone>` — insert-or-update a contact, add the phone
    Add { name: String, phone: String },
    /// `change <name> <old> <new>` — replace one phone on a contact
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    /// `phone <name>` — list a contact's phones
    Phone { name: String },
    /// `all` — list every contact
    All,
    /// `add-birthday <name> <DD.MM.YYYY>` — set a contact's birthday
    AddBirthday { name: String, birthday: String },
    /// `show-birthday <name>` — show a contact's birthday
    ShowBirthday { name: String },
    /// `birthdays` — the upcoming-reminder report
    Birthdays,
    /// `delete <name>` — remove a contact
    Delete { name: String },
    /// `close` / `exit` — terminate the session
    Exit,
    /// Anything else; carries the unrecognized command name
    Unknown(String),
}

/// Positional argument at `index`, or the too-few-tokens error.
fn arg<'a>(args: &[&'a str], index: usize) -> CommandResult<&'a str> {
    args.get(index)
        .copied()
        .ok_or(CommandError::MissingArguments)
}

/// Parse one line of input into a [`Command`].
///
/// # Errors
///
/// Returns `CommandError::MissingArguments` when a recognized command is
/// given fewer tokens than it requires.
pub fn parse_line(line: &str) -> CommandResult<Command> {
    let mut tokens = line.split_whitespace();
    let head = match tokens.next() {
        Some(head) => head.to_lowercase(),
        // Blank lines are filtered by the loop; treat one as unrecognized
        None => return Ok(Command::Unknown(String::new())),
    };
    let args: Vec<&str> = tokens.collect();

    match head.as_str() {
        "hello" => Ok(Command::Hello),
        "add" => Ok(Command::Add {
            name: arg(&args, 0)?.to_string(),
            phone: arg(&args, 1)?.to_string(),
        }),
        "change" => Ok(Command::Change {
            name: arg(&args, 0)?.to_string(),
            old_phone: arg(&args, 1)?.to_string(),
            new_phone: arg(&args, 2)?.to_string(),
        }),
        "phone" => Ok(Command::Phone {
            name: arg(&args, 0)?.to_string(),
        }),
        "all" => Ok(Command::All),
        "add-birthday" => Ok(Command::AddBirthday {
            name: arg(&args, 0)?.to_string(),
            birthday: arg(&args, 1)?.to_string(),
        }),
        "show-birthday" => Ok(Command::ShowBirthday {
            name: arg(&args, 0)?.to_string(),
        }),
        "birthdays" => Ok(Command::Birthdays),
        "delete" => Ok(Command::Delete {
            name: arg(&args, 0)?.to_string(),
        }),
        "close" | "exit" => Ok(Command::Exit),
        _ => Ok(Command::Unknown(head)),
    }
}
