//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The one textual format birthdays are exchanged in.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for a contact's birthday.
///
/// Parsed from the exact `DD.MM.YYYY` pattern at construction time; an
/// impossible calendar date (32.01., 30.02., wrong separators) is rejected.
/// The inner value is a plain calendar date, usable for comparison and for
/// computing the next occurrence of (month, day).
///
/// # Example
///
/// ```
/// use bookbot::domain::Birthday;
///
/// let birthday = Birthday::new("09.11.1985").unwrap();
/// assert_eq!(birthday.to_string(), "09.11.1985");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, parsing the `DD.MM.YYYY` format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` on any parse failure.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        match NaiveDate::parse_from_str(&value, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self(date)),
            Err(_) => Err(ValidationError::InvalidDate(value)),
        }
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

// Serde support - serialize in the textual format
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("09.11.1985").unwrap();
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1985, 11, 9).unwrap()
        );
    }

    #[test]
    fn test_birthday_validates_format() {
        assert!(Birthday::new("1985-11-09").is_err()); // wrong separators
        assert!(Birthday::new("09.11.1985 ").is_err()); // trailing garbage
        assert!(Birthday::new("32.01.2000").is_err()); // day out of range
        assert!(Birthday::new("30.02.2000").is_err()); // not a real date
        assert!(Birthday::new("ab.cd.efgh").is_err()); // non-numeric
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("29.02.2000").is_ok()); // leap day
        assert!(Birthday::new("29.02.2001").is_err()); // non-leap year
    }

    #[test]
    fn test_birthday_round_trips_through_formatting() {
        let birthday = Birthday::new("01.03.1990").unwrap();
        assert_eq!(birthday.to_string(), "01.03.1990");
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("09.11.1985").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"09.11.1985\"");

        let back: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);

        let result: Result<Birthday, _> = serde_json::from_str("\"1985/11/09\"");
        assert!(result.is_err());
    }
}
