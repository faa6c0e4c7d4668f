//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when mutating a single contact record.
#[derive(Error, Debug)]
pub enum RecordError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number is already present on the record
    #[error("Phone {0} already exists")]
    DuplicatePhone(String),

    /// The phone number is not present on the record
    #[error("Phone number {0} not found")]
    PhoneNotFound(String),
}

/// Errors that can occur when operating on the address book as a whole.
#[derive(Error, Debug)]
pub enum BookError {
    /// A record-level operation failed
    #[error(transparent)]
    Record(#[from] RecordError),

    /// A contact with the same (case-insensitive) name already exists
    #[error("Contact {0} already exists")]
    DuplicateContact(String),

    /// No contact matches the given name
    #[error("Contact {0} not found")]
    ContactNotFound(String),
}

/// Errors that can occur while saving or loading the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents could not be (de)serialized
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors produced by the interactive command loop.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command was given the wrong number of arguments
    #[error("Invalid input. {0}")]
    Usage(String),

    /// A core operation failed
    #[error(transparent)]
    Book(#[from] BookError),

    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<RecordError> for CommandError {
    fn from(err: RecordError) -> Self {
        CommandError::Book(BookError::Record(err))
    }
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
