//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const DATE_FORMAT: &str = "%d.%m.%Y";

// chrono accepts 1-digit days/months and short years for %d.%m.%Y, so the
// fixed-width shape is enforced up front.
static DATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile date regex"));

/// A type-safe wrapper for birthdays.
///
/// Parses and renders the `DD.MM.YYYY` format used throughout the
/// application; impossible calendar dates are rejected at construction.
///
/// # Example
///
/// ```
/// use addressbook::domain::Birthday;
///
/// let birthday = Birthday::new("24.03.1990").unwrap();
/// assert_eq!(birthday.to_string(), "24.03.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` when the input does not match
    /// the format or encodes an impossible date (e.g. 30.02.2000).
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if !DATE_REGEX.is_match(&value) {
            return Err(ValidationError::InvalidDate(value));
        }

        match NaiveDate::parse_from_str(&value, DATE_FORMAT) {
            Ok(date) => Ok(Self(date)),
            Err(_) => Err(ValidationError::InvalidDate(value)),
        }
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The birthday's month/day applied to the given year.
    ///
    /// A Feb 29 birthday in a non-leap year resolves to Mar 1 of that year.
    pub fn on_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .unwrap_or(self.0)
    }
}

// Serde support - serialize as the DD.MM.YYYY string
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
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("24.03.1990").unwrap();
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1990, 3, 24).unwrap()
        );
    }

    #[test]
    fn test_birthday_round_trips() {
        for input in ["01.01.2000", "31.12.1999", "29.02.2020", "05.07.1985"] {
            let birthday = Birthday::new(input).unwrap();
            assert_eq!(birthday.to_string(), input);
        }
    }

    #[test]
    fn test_birthday_rejects_malformed() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1990-03-24").is_err());
        assert!(Birthday::new("24/03/1990").is_err());
        assert!(Birthday::new("24.03.90").is_err());
        assert!(Birthday::new("1.1.2000").is_err()); // fixed-width only
        assert!(Birthday::new("not a date").is_err());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("30.02.2000").is_err());
        assert!(Birthday::new("32.01.2000").is_err());
        assert!(Birthday::new("01.13.2000").is_err());
        assert!(Birthday::new("29.02.2021").is_err()); // not a leap year
    }

    #[test]
    fn test_birthday_rejection_carries_input() {
        match Birthday::new("30.02.2000") {
            Err(ValidationError::InvalidDate(d)) => assert_eq!(d, "30.02.2000"),
            other => panic!("Expected InvalidDate, got: {:?}", other),
        }
    }

    #[test]
    fn test_on_year_plain() {
        let birthday = Birthday::new("24.03.1990").unwrap();
        assert_eq!(
            birthday.on_year(2024),
            NaiveDate::from_ymd_opt(2024, 3, 24).unwrap()
        );
    }

    #[test]
    fn test_on_year_feb_29() {
        let birthday = Birthday::new("29.02.2020").unwrap();
        // Leap year keeps Feb 29
        assert_eq!(
            birthday.on_year(2024),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        // Non-leap year resolves to Mar 1
        assert_eq!(
            birthday.on_year(2023),
            NaiveDate::from_ymd_opt(2023, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("24.03.1990").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"24.03.1990\"");
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"2024-01-01\"");
        assert!(result.is_err());
    }
}
