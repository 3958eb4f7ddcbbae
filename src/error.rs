//! Error types for the assistant.
//!
//! This module defines the command-level error taxonomy using `thiserror`.
//! Every recognized failure of a command is one of these variants; the REPL
//! renders the `Display` text to the user and keeps running. Anything
//! outside this taxonomy (I/O, configuration) propagates out of the loop.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a single command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A field failed validation; the validation message is shown verbatim
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The named contact does not exist
    #[error("Contact not found.")]
    ContactNotFound,

    /// An edit referenced a phone number the contact does not have
    #[error("Old phone number not found.")]
    PhoneNotFound,

    /// The command was invoked with too few tokens
    #[error("Not enough arguments. Please provide full command parameters.")]
    MissingArguments,

    /// A birthday was requested but never set
    #[error("Birthday not set for this contact.")]
    BirthdayNotSet,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            CommandError::ContactNotFound.to_string(),
            "Contact not found."
        );
        assert_eq!(
            CommandError::PhoneNotFound.to_string(),
            "Old phone number not found."
        );
        assert_eq!(
            CommandError::MissingArguments.to_string(),
            "Not enough arguments. Please provide full command parameters."
        );
        assert_eq!(
            CommandError::BirthdayNotSet.to_string(),
            "Birthday not set for this contact."
        );
    }

    #[test]
    fn test_validation_message_surfaces_verbatim() {
        let err = CommandError::from(ValidationError::InvalidPhone("123".into()));
        assert_eq!(err.to_string(), "Phone number must be 10 digits.");

        let err = CommandError::from(ValidationError::InvalidDate("x".into()));
        assert_eq!(err.to_string(), "Invalid date format. Use DD.MM.YYYY");
    }
}
