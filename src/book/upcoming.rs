//! Upcoming-birthday reminders.
//!
//! For every record with a birthday, the next occurrence of its
//! (month, day) is compared against a reference date. Occurrences inside
//! the half-open window `[today, today + horizon)` qualify; the reminder
//! date is the occurrence shifted off a weekend to the following Monday.
//! The reference date is a parameter, not read from the clock here, so the
//! window is testable against fixed dates.

use super::AddressBook;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeMap;
use std::fmt;

/// Default reminder window, in days.
pub const DEFAULT_HORIZON_DAYS: i64 = 7;

/// One reminder date and the contacts congratulated on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderGroup {
    /// The weekend-adjusted date the reminder is due.
    pub date: NaiveDate,
    /// Contact names sharing that reminder date, in book order.
    pub names: Vec<String>,
}

impl fmt::Display for ReminderGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.date.format("%A, %d %B"),
            self.names.join(", ")
        )
    }
}

/// The birthday's occurrence in the given year.
///
/// Feb 29 birthdays resolve to Mar 1 in non-leap years.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    birthday
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .expect("March 1 exists in every year")
}

/// The next occurrence of the birthday's (month, day) on or after `today`.
fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = occurrence_in_year(birthday, today.year());
    if this_year < today {
        occurrence_in_year(birthday, today.year() + 1)
    } else {
        this_year
    }
}

/// Shift a date falling on a weekend forward to Monday.
fn congratulation_date(occurrence: NaiveDate) -> NaiveDate {
    match occurrence.weekday() {
        Weekday::Sat => occurrence + Duration::days(2),
        Weekday::Sun => occurrence + Duration::days(1),
        _ => occurrence,
    }
}

impl AddressBook {
    /// Contacts whose birthday falls within `[today, today + horizon_days)`,
    /// grouped by weekend-adjusted reminder date, groups in ascending date
    /// order.
    ///
    /// An empty result means no qualifying birthdays; the caller decides how
    /// to phrase that.
    pub fn upcoming_birthdays(&self, today: NaiveDate, horizon_days: i64) -> Vec<ReminderGroup> {
        let mut groups: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();

        for record in self.records() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let occurrence = next_occurrence(birthday.date(), today);
            let delta_days = (occurrence - today).num_days();

            if (0..horizon_days).contains(&delta_days) {
                groups
                    .entry(congratulation_date(occurrence))
                    .or_default()
                    .push(record.name().as_str().to_string());
            }
        }

        groups
            .into_iter()
            .map(|(date, names)| ReminderGroup { date, names })
            .collect()
    }
}
