//! Persistence boundary: saving and loading the address book as JSON.
//!
//! The destination path is always an explicit parameter; callers source it
//! from [`crate::Config`]. The format is only guaranteed readable by the
//! same version that wrote it.

use crate::error::StorageResult;
use crate::models::AddressBook;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Serialize the whole book to `path`, overwriting any prior content.
pub fn save(book: &AddressBook, path: impl AsRef<Path>) -> StorageResult<()> {
    let json = serde_json::to_string_pretty(book)?;
    fs::write(path, json)?;
    Ok(())
}

/// Deserialize a previously saved book from `path`.
///
/// A missing file is not an error: it yields a fresh empty book, so first
/// runs start cleanly.
pub fn load(path: impl AsRef<Path>) -> StorageResult<AddressBook> {
    let json = match fs::read_to_string(path) {
        Ok(json) => json,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(AddressBook::new()),
        Err(err) => return Err(err.into()),
    };
    Ok(serde_json::from_str(&json)?)
}
