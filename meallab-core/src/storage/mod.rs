//! Durable records for the meal lists.
//!
//! Each list is stored as its own record: a JSON object mapping meal id to
//! display name, e.g. `{"52772": "Teriyaki Chicken Casserole"}`.
//!
//! # Files
//!
//! - `favorites.json`: the Favorites list
//! - `cooked.json`: the Cooked list
//!
//! Records are replaced whole on every save. There is no cross-file
//! transaction, so each list's durability is independent of the other's.

pub mod codec;
mod file;
mod memory;

use indexmap::IndexMap;
use std::io;
use std::path::PathBuf;

use crate::lists::ListName;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

/// Backend that loads and saves one list record at a time.
///
/// `load` returns the record as decoded, before any sanitizing. A missing
/// record is `Ok(None)`, not an error.
pub trait ListStorage {
    fn load(&self, list: ListName) -> Result<Option<IndexMap<String, String>>, StorageError>;

    fn save(&mut self, list: ListName, entries: &IndexMap<String, String>)
        -> Result<(), StorageError>;
}

/// Errors that can occur while reading or writing a list record.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error reading or writing a file.
    IoError(PathBuf, io::Error),
    /// The record exists but is not an id -> name mapping.
    DecodeError(PathBuf, String),
    /// The in-memory list could not be serialized for writing.
    EncodeError(PathBuf, String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::IoError(path, e) => {
                write!(f, "I/O error for {}: {}", path.display(), e)
            }
            StorageError::DecodeError(path, e) => {
                write!(f, "Failed to decode {}: {}", path.display(), e)
            }
            StorageError::EncodeError(path, e) => {
                write!(f, "Failed to encode {}: {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::IoError(_, e) => Some(e),
            StorageError::DecodeError(_, _) | StorageError::EncodeError(_, _) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_error_messages_name_the_direction() {
        let path = PathBuf::from("/data/cooked.json");

        let err = StorageError::DecodeError(path.clone(), "expected an object".into());
        assert_eq!(
            err.to_string(),
            "Failed to decode /data/cooked.json: expected an object"
        );

        let err = StorageError::EncodeError(path, "key must be a string".into());
        assert_eq!(
            err.to_string(),
            "Failed to encode /data/cooked.json: key must be a string"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = StorageError::IoError(
            PathBuf::from("/data"),
            io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        );
        assert!(err.to_string().starts_with("I/O error for /data"));
        assert!(err.source().is_some());
    }
}
