//! Record model representing one contact in the address book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name, an ordered list of distinct phone numbers, and
/// an optional birthday.
///
/// The name is set at construction and never changes afterwards. Phone
/// numbers keep insertion order and no two phones on the same record compare
/// equal. Every operation takes raw string input and validates it before
/// touching the record, so a failed call leaves the record unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Contact name, original casing preserved
    name: ContactName,

    /// Phone numbers in insertion order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    /// Birthday, absent until explicitly set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with the given contact name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is empty or all
    /// whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: ContactName::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The contact's phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The contact's birthday, if set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Add a phone number to the record.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` for malformed input, or
    /// `RecordError::DuplicatePhone` if an equal phone is already present.
    pub fn add_phone(&mut self, phone: &str) -> RecordResult<()> {
        let new_phone = PhoneNumber::new(phone)?;
        if self.phones.contains(&new_phone) {
            return Err(RecordError::DuplicatePhone(new_phone.into_inner()));
        }
        self.phones.push(new_phone);
        Ok(())
    }

    /// Remove a phone number from the record.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` for malformed input, or
    /// `RecordError::PhoneNotFound` if no equal phone is present.
    pub fn remove_phone(&mut self, phone: &str) -> RecordResult<()> {
        let target = PhoneNumber::new(phone)?;
        match self.phones.iter().position(|p| *p == target) {
            Some(index) => {
                self.phones.remove(index);
                Ok(())
            }
            None => Err(RecordError::PhoneNotFound(target.into_inner())),
        }
    }

    /// Replace an existing phone number in place, preserving its position.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if either input is malformed,
    /// `RecordError::PhoneNotFound` if `old_phone` has no match, or
    /// `RecordError::DuplicatePhone` if `new_phone` is already present.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> RecordResult<()> {
        let old = PhoneNumber::new(old_phone)?;
        let new = PhoneNumber::new(new_phone)?;

        let index = self
            .phones
            .iter()
            .position(|p| *p == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.into_inner()))?;

        if self.phones.contains(&new) {
            return Err(RecordError::DuplicatePhone(new.into_inner()));
        }

        self.phones[index] = new;
        Ok(())
    }

    /// Look up a phone number on the record.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` for malformed input, or
    /// `RecordError::PhoneNotFound` if no equal phone is present.
    pub fn find_phone(&self, phone: &str) -> RecordResult<&PhoneNumber> {
        let target = PhoneNumber::new(phone)?;
        self.phones
            .iter()
            .find(|p| **p == target)
            .ok_or_else(|| RecordError::PhoneNotFound(target.into_inner()))
    }

    /// Set the record's birthday. A previously set birthday is overwritten.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` for malformed input.
    pub fn add_birthday(&mut self, birthday: &str) -> RecordResult<()> {
        self.birthday = Some(Birthday::new(birthday)?);
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
        write!(f, "name: {:10} phones: {}", self.name.as_str(), phones)
    }
}
