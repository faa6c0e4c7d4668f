//! Configuration management for the address book.
//!
//! Configuration is loaded from environment variables, with a `.env` file
//! honored if present. Every variable has a default, so a bare environment
//! works out of the box.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the address book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the persisted address book file (default: "addressbook.json")
    pub book_file: PathBuf,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE`: Path of the persisted book (default: "addressbook.json")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let book_file = env::var("ADDRESS_BOOK_FILE")
            .unwrap_or_else(|_| "addressbook.json".to_string());

        if book_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_FILE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_file: PathBuf::from(book_file),
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_file: PathBuf::from("addressbook.json"),
            log_level: "error".to_string(),
        }
    }
}
