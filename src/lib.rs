//! Personal address book with validated contact records, JSON persistence,
//! and upcoming-birthday reminders.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phone numbers, birthdays)
//! - **models**: The `Record` aggregate and the `AddressBook` collection
//! - **storage**: Saving/loading the whole book as JSON on disk
//! - **repl**: Interactive command loop (parsing, dispatch, message rendering)
//! - **config**: Configuration management from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError, RecordError, StorageError};
pub use models::{AddressBook, BirthdayReminder, Record};
