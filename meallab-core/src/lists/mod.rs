//! Favorites and Cooked lists.
//!
//! Both lists map a catalog meal id to the name it had when it was added,
//! in insertion order. [`ListStore`] is the only way to change them; it keeps
//! ids unique per list, rejects blank ids and writes each change through to
//! storage.

mod entry;
mod error;
mod list_name;
mod sanitize;
mod store;

pub use entry::ListEntry;
pub use error::{ListError, PersistenceOp, PersistenceWarning};
pub use list_name::ListName;
pub use sanitize::{normalize_id, sanitize};
pub use store::{ListStore, MoveOutcome, Removal};
