//! The address book: a name-keyed store of contact records.

pub mod upcoming;

pub use upcoming::ReminderGroup;

use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use std::collections::BTreeMap;

/// A name-keyed collection of [`Record`]s.
///
/// At most one record per name; inserting under an existing name replaces
/// the stored record. The map is ordered so listings and reports come out
/// in a deterministic (alphabetical) order. The book owns its records
/// exclusively and lives only as long as the process.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name, replacing any existing record with
    /// the same name. Returns the replaced record, if there was one.
    ///
    /// This is an upsert: re-adding a name swaps the whole record, it does
    /// not merge phone lists.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records
            .insert(record.name().as_str().to_string(), record)
    }

    /// Look up a record by name. Absence is not an error here; callers
    /// decide whether a missing contact is a failure.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Mutable lookup by name.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::ContactNotFound` if no such record exists.
    pub fn delete(&mut self, name: &str) -> CommandResult<Record> {
        self.records
            .remove(name)
            .ok_or(CommandError::ContactNotFound)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in name order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}
