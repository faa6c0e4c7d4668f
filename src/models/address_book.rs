//! AddressBook model: the name-keyed collection of contact records.

use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::{Datelike, Duration, Local, NaiveDate};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// An upcoming birthday paired with the date to send congratulations.
///
/// The congratulation date is the birthday's next occurrence, shifted to the
/// following Monday when it lands on a weekend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayReminder {
    /// Contact name, original casing
    pub name: String,

    /// Effective date to send wishes
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for BirthdayReminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format("%Y.%m.%d")
        )
    }
}

/// The collection of contact records, keyed by normalized (lowercased) name.
///
/// At most one record exists per normalized name; adding a second record
/// under a case-insensitively equal name is a conflict, never a silent
/// overwrite. The record keeps the original casing for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    contacts: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record into the book.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateContact` if a record already exists under
    /// the record's normalized name.
    pub fn add_record(&mut self, record: Record) -> BookResult<()> {
        let key = record.name().normalized();
        if self.contacts.contains_key(&key) {
            return Err(BookError::DuplicateContact(
                record.name().as_str().to_string(),
            ));
        }
        self.contacts.insert(key, record);
        Ok(())
    }

    /// Look up a record by name, case-insensitively.
    ///
    /// Absence is a normal outcome here, not an error; callers must handle
    /// the `None` case.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.contacts.get(&name.to_lowercase())
    }

    /// Mutable variant of [`AddressBook::find`].
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.contacts.get_mut(&name.to_lowercase())
    }

    /// Remove a record by name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if no record matches.
    pub fn delete(&mut self, name: &str) -> BookResult<()> {
        match self.contacts.remove(&name.to_lowercase()) {
            Some(_) => Ok(()),
            None => Err(BookError::ContactNotFound(name.to_string())),
        }
    }

    /// Iterate over the records in normalized-name order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.contacts.values()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Whether the book has no records.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Birthdays falling within the next 7 days of the current local date.
    ///
    /// See [`AddressBook::upcoming_birthdays`] for the exact semantics.
    pub fn get_upcoming_birthdays(&self) -> Vec<BirthdayReminder> {
        self.upcoming_birthdays(Local::now().date_naive())
    }

    /// Birthdays whose next occurrence relative to `today` is less than 7
    /// days away.
    ///
    /// For each record with a birthday, the birthday's month/day is applied
    /// to the current year; occurrences already past roll over to next year.
    /// A candidate landing on Saturday or Sunday has its congratulation date
    /// shifted to the following Monday.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<BirthdayReminder> {
        let mut upcoming = Vec::new();

        for record in self.contacts.values() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let mut candidate = birthday.on_year(today.year());
            if candidate < today {
                candidate = birthday.on_year(today.year() + 1);
            }

            // Candidate is never before today here, so the window is [0, 7).
            if (candidate - today).num_days() < 7 {
                let weekday = i64::from(candidate.weekday().num_days_from_monday());
                let congratulation_date = if weekday >= 5 {
                    candidate + Duration::days(7 - weekday)
                } else {
                    candidate
                };

                upcoming.push(BirthdayReminder {
                    name: record.name().as_str().to_string(),
                    congratulation_date,
                });
            }
        }

        upcoming
    }
}

// Serde support - serialize as an array of records; the normalized keys are
// derived data and are rebuilt on load.
impl Serialize for AddressBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.contacts.values())
    }
}

// Serde support - deserialize from an array of records, re-checking the
// case-insensitive uniqueness invariant.
impl<'de> Deserialize<'de> for AddressBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record).map_err(D::Error::custom)?;
        }
        Ok(book)
    }
}
