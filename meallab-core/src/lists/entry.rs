use serde::{Deserialize, Serialize};
use std::fmt;

/// One meal in a list: the catalog id and the name it had when added.
///
/// Identity is the `id` alone. The name is informational; the catalog stays
/// the source of truth for current names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub id: String,
    pub name: String,
}

impl ListEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id={})", self.name, self.id)
    }
}
