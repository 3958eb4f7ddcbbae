//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{CommandError, CommandResult};
use std::fmt;

/// A single contact: a name, an ordered list of phone numbers, and an
/// optional birthday.
///
/// The name is assigned at creation and never changes. Phones are appended
/// or replaced over time; duplicates by value are permitted unless
/// explicitly edited. Re-setting the birthday overwrites the previous value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<PhoneNumber>,
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with the given name and no phones or birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The contact's phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `value` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `value` is not 10 digits.
    pub fn add_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old` with a validated `new` value.
    ///
    /// The replacement is validated before the list is scanned, so an
    /// invalid `new` never mutates the record.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Validation` if `new` is not a valid phone, or
    /// `CommandError::PhoneNotFound` if no phone matches `old`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> CommandResult<()> {
        let replacement = PhoneNumber::new(new)?;

        match self.phones.iter().position(|p| p.as_str() == old) {
            Some(index) => {
                self.phones[index] = replacement;
                Ok(())
            }
            None => Err(CommandError::PhoneNotFound),
        }
    }

    /// Find the phone equal to `value`, if present. Absence is not an error;
    /// this is a display-side lookup.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Validate `value` and set it as the birthday, overwriting any
    /// previous one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if `value` is not a real
    /// `DD.MM.YYYY` date.
    pub fn set_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
