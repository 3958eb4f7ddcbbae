//! The interactive loop.
//!
//! Interactive mode: rustyline prompt with history and TAB completion.
//! Pipe mode: read lines from stdin, execute each.
//!
//! Either way the flow per line is the same: parse, dispatch, print the
//! normalized result, continue. Only `close`/`exit` (or end of input) ends
//! the session.

use std::io::{self, BufRead, IsTerminal};

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config as LineConfig, Context, Editor, Helper};

use tracing::info;

use crate::book::AddressBook;
use crate::config::Config;
use crate::repl::handlers::{respond, Response};

const PROMPT: &str = "Enter a command: ";

/// Run the assistant session to completion.
///
/// Picks interactive or pipe mode based on whether stdin is a terminal,
/// prints the banner and the farewell around the loop.
pub fn run(book: &mut AddressBook, config: &Config) -> anyhow::Result<()> {
    println!("Welcome to the assistant bot!");

    if io::stdin().is_terminal() {
        run_repl(book, config)?;
    } else {
        run_pipe(book, config)?;
    }

    println!("Good bye!");
    Ok(())
}

/// Interactive mode: prompt, history, TAB completion.
fn run_repl(book: &mut AddressBook, config: &Config) -> anyhow::Result<()> {
    let line_config = LineConfig::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<BookbotHelper, DefaultHistory> = Editor::with_config(line_config)?;
    rl.set_helper(Some(BookbotHelper));

    if let Some(path) = &config.history_file {
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(trimmed);

                match respond(trimmed, book, config.horizon_days) {
                    Some(Response::Reply(text)) => println!("{}", text),
                    Some(Response::Exit) => break,
                    None => continue,
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C — just show a new prompt
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D — exit
                break;
            }
            Err(err) => {
                return Err(err.into());
            }
        }
    }

    if let Some(path) = &config.history_file {
        let _ = rl.save_history(path);
    }

    Ok(())
}

/// Pipe mode: read lines from stdin, execute each, skip blanks and
/// `#` comments.
fn run_pipe(book: &mut AddressBook, config: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match respond(trimmed, book, config.horizon_days) {
            Some(Response::Reply(text)) => println!("{}", text),
            Some(Response::Exit) => break,
            None => continue,
        }
    }

    info!("input exhausted");
    Ok(())
}

// =========================================================================
// TAB Completion
// =========================================================================

/// Known commands for TAB completion.
const COMMANDS: &[&str] = &[
    "hello",
    "add",
    "change",
    "phone",
    "all",
    "add-birthday",
    "show-birthday",
    "birthdays",
    "delete",
    "close",
    "exit",
];

struct BookbotHelper;

impl Helper for BookbotHelper {}
impl Validator for BookbotHelper {}
impl Highlighter for BookbotHelper {}
impl Hinter for BookbotHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for BookbotHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_pos = &line[..pos];

        // Only the first word is a command; arguments are free-form
        if line_to_pos.contains(char::is_whitespace) {
            return Ok((pos, vec![]));
        }

        let candidates: Vec<Pair> = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line_to_pos))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}
