//! bookbot — an interactive command-line assistant over an in-memory
//! address book.
//!
//! Contacts carry a validated 10-digit phone number and an optional
//! `DD.MM.YYYY` birthday; the assistant answers one command per input line
//! and can report which contacts have a birthday reminder due within the
//! next week, shifting weekend dates to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (name, phone, birthday)
//! - **models**: the contact record
//! - **book**: the name-keyed record store and reminder scheduling
//! - **repl**: line parsing, command handlers, and the interactive loop
//! - **error**: the command-level error taxonomy
//! - **config**: configuration from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::{AddressBook, ReminderGroup};
pub use config::Config;
pub use error::{CommandError, CommandResult, ConfigError};
pub use models::Record;
