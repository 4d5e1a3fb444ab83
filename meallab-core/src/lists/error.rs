//! List store error and warning types.

use std::fmt;

use thiserror::Error;

use super::ListName;
use crate::storage::StorageError;

/// Errors returned by list mutations.
///
/// None of these leave a partial change behind: every check runs before the
/// in-memory lists are touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    #[error("Please provide a valid meal id")]
    InvalidId,

    #[error("Meal already exists in {} (id={id})", .list.label())]
    AlreadyExists { list: ListName, id: String },

    #[error("This id is not in {}: {id}", .list.label())]
    NotFound { list: ListName, id: String },
}

impl ListError {
    /// True for expected outcomes the caller reports without treating as failure.
    pub fn is_soft(&self) -> bool {
        matches!(self, ListError::AlreadyExists { .. })
    }
}

/// Which side of a persistence round trip went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceOp {
    Load,
    Save,
}

/// A load or save that failed without failing the list operation.
///
/// Memory stays authoritative; the record on disk may be stale until the next
/// successful save of the same list.
#[derive(Debug)]
pub struct PersistenceWarning {
    pub list: ListName,
    pub op: PersistenceOp,
    pub error: StorageError,
}

impl fmt::Display for PersistenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.op {
            PersistenceOp::Load => "load",
            PersistenceOp::Save => "save",
        };
        write!(f, "could not {} {}: {}", verb, self.list, self.error)
    }
}
