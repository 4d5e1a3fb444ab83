use indexmap::IndexMap;
use std::collections::HashMap;

use super::{ListStorage, StorageError};
use crate::lists::ListName;

/// In-process storage that keeps records in a map instead of on disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    records: HashMap<ListName, IndexMap<String, String>>,
    saves: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a record as if it had been written by an earlier run.
    pub fn with_record(mut self, list: ListName, entries: IndexMap<String, String>) -> Self {
        self.records.insert(list, entries);
        self
    }

    pub fn record(&self, list: ListName) -> Option<&IndexMap<String, String>> {
        self.records.get(&list)
    }

    /// Number of successful saves, across both lists.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ListStorage for MemoryStorage {
    fn load(&self, list: ListName) -> Result<Option<IndexMap<String, String>>, StorageError> {
        Ok(self.records.get(&list).cloned())
    }

    fn save(
        &mut self,
        list: ListName,
        entries: &IndexMap<String, String>,
    ) -> Result<(), StorageError> {
        self.records.insert(list, entries.clone());
        self.saves += 1;
        Ok(())
    }
}
