//! ContactName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for contact names.
///
/// The original casing is preserved for display; [`ContactName::normalized`]
/// yields the lowercased form used as the address book lookup key.
///
/// # Example
///
/// ```
/// use addressbook::domain::ContactName;
///
/// let name = ContactName::new("Alice").unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// assert_eq!(name.normalized(), "alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the input is empty or all
    /// whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(ValidationError::InvalidName);
        }

        Ok(Self(name))
    }

    /// Get the name as supplied at construction.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the lowercased form used as a lookup key.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = ContactName::new("Alice").unwrap();
        assert_eq!(name.as_str(), "Alice");
    }

    #[test]
    fn test_name_rejects_empty() {
        assert_eq!(ContactName::new(""), Err(ValidationError::InvalidName));
        assert_eq!(ContactName::new("   "), Err(ValidationError::InvalidName));
        assert_eq!(ContactName::new("\t\n"), Err(ValidationError::InvalidName));
    }

    #[test]
    fn test_name_preserves_casing() {
        let name = ContactName::new("John Doe").unwrap();
        assert_eq!(name.as_str(), "John Doe");
        assert_eq!(name.normalized(), "john doe");
    }

    #[test]
    fn test_name_display() {
        let name = ContactName::new("Alice").unwrap();
        assert_eq!(format!("{}", name), "Alice");
    }

    #[test]
    fn test_name_deserialization_invalid_fails() {
        let result: Result<ContactName, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
