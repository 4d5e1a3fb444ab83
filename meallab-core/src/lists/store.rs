//! The Favorites/Cooked list store.
//!
//! This module owns both lists in memory and writes each one through to its
//! storage backend after every change:
//! 1. Mutations validate first, then change memory, then save
//! 2. Queries read memory only and never touch storage
//!
//! Save failures do not undo the in-memory change. They are queued as
//! [`PersistenceWarning`]s for the caller to report.

use indexmap::IndexMap;

use super::error::{ListError, PersistenceOp, PersistenceWarning};
use super::sanitize::{normalize_id, sanitize};
use super::{ListEntry, ListName};
use crate::storage::{JsonFileStorage, ListStorage};

/// Outcome of moving a meal from Favorites to Cooked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The meal left Favorites and was appended to Cooked.
    Moved(ListEntry),
    /// The meal left Favorites; Cooked already had it and was left untouched.
    AlreadyInTarget(ListEntry),
}

/// Which lists a [`ListStore::remove_from_any`] call changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Removal {
    pub favorites: bool,
    pub cooked: bool,
}

impl Removal {
    pub fn any(&self) -> bool {
        self.favorites || self.cooked
    }

    /// The lists that changed, in display order.
    pub fn lists(&self) -> Vec<ListName> {
        ListName::ALL
            .into_iter()
            .filter(|list| match list {
                ListName::Favorites => self.favorites,
                ListName::Cooked => self.cooked,
            })
            .collect()
    }
}

/// Single-owner store for the two meal lists.
pub struct ListStore<S: ListStorage = JsonFileStorage> {
    storage: S,
    favorites: IndexMap<String, String>,
    cooked: IndexMap<String, String>,
    warnings: Vec<PersistenceWarning>,
}

impl<S: ListStorage> ListStore<S> {
    /// Loads both lists from `storage`.
    ///
    /// A missing record is an empty list. An unreadable or malformed record is
    /// also an empty list, with a warning queued.
    pub fn load(storage: S) -> Self {
        let mut store = Self {
            storage,
            favorites: IndexMap::new(),
            cooked: IndexMap::new(),
            warnings: Vec::new(),
        };

        for list in ListName::ALL {
            let entries = match store.storage.load(list) {
                Ok(Some(raw)) => sanitize(raw),
                Ok(None) => IndexMap::new(),
                Err(error) => {
                    store.warn(list, PersistenceOp::Load, error);
                    IndexMap::new()
                }
            };
            *store.entries_mut(list) = entries;
        }

        tracing::debug!(
            favorites = store.favorites.len(),
            cooked = store.cooked.len(),
            "list store loaded"
        );
        store
    }

    /// Adds a meal to a list and saves that list.
    ///
    /// Both `id` and `name` are trimmed. An id already present is rejected
    /// with [`ListError::AlreadyExists`] and the stored name is kept.
    pub fn add(&mut self, list: ListName, id: &str, name: &str) -> Result<ListEntry, ListError> {
        let id = valid_id(id)?;

        let entries = self.entries_mut(list);
        if entries.contains_key(id) {
            return Err(ListError::AlreadyExists {
                list,
                id: id.to_string(),
            });
        }

        let entry = ListEntry::new(id, name.trim());
        entries.insert(entry.id.clone(), entry.name.clone());
        self.persist(list);
        Ok(entry)
    }

    /// Removes a meal from a list. Returns whether anything was removed.
    pub fn remove(&mut self, list: ListName, id: &str) -> Result<bool, ListError> {
        let id = valid_id(id)?;

        let removed = self.entries_mut(list).shift_remove(id).is_some();
        if removed {
            self.persist(list);
        }
        Ok(removed)
    }

    /// Moves a meal from Favorites to Cooked.
    ///
    /// If Cooked already holds the id, its entry is kept as is and the meal
    /// is only dropped from Favorites.
    pub fn move_to_cooked(&mut self, id: &str) -> Result<MoveOutcome, ListError> {
        let id = valid_id(id)?;

        let Some(name) = self.favorites.shift_remove(id) else {
            return Err(ListError::NotFound {
                list: ListName::Favorites,
                id: id.to_string(),
            });
        };

        if let Some(existing) = self.cooked.get(id) {
            let kept = ListEntry::new(id, existing.clone());
            self.persist(ListName::Favorites);
            return Ok(MoveOutcome::AlreadyInTarget(kept));
        }

        self.cooked.insert(id.to_string(), name.clone());
        self.persist(ListName::Favorites);
        self.persist(ListName::Cooked);
        Ok(MoveOutcome::Moved(ListEntry::new(id, name)))
    }

    /// Removes a meal from whichever lists hold it.
    ///
    /// Each changed list is saved on its own; a failed save of one does not
    /// stop the other.
    pub fn remove_from_any(&mut self, id: &str) -> Result<Removal, ListError> {
        let id = valid_id(id)?;

        let removal = Removal {
            favorites: self.favorites.shift_remove(id).is_some(),
            cooked: self.cooked.shift_remove(id).is_some(),
        };
        for list in removal.lists() {
            self.persist(list);
        }
        Ok(removal)
    }

    /// Returns a list's entries, oldest first.
    pub fn entries(&self, list: ListName) -> Vec<ListEntry> {
        self.entries_ref(list)
            .iter()
            .map(|(id, name)| ListEntry::new(id.clone(), name.clone()))
            .collect()
    }

    pub fn contains(&self, list: ListName, id: &str) -> bool {
        self.entries_ref(list).contains_key(normalize_id(id))
    }

    /// Returns the stored name for an id, if the list holds it.
    pub fn get(&self, list: ListName, id: &str) -> Option<&str> {
        self.entries_ref(list)
            .get(normalize_id(id))
            .map(String::as_str)
    }

    pub fn len(&self, list: ListName) -> usize {
        self.entries_ref(list).len()
    }

    pub fn is_empty(&self, list: ListName) -> bool {
        self.entries_ref(list).is_empty()
    }

    /// Drains the warnings queued since the last call.
    pub fn take_warnings(&mut self) -> Vec<PersistenceWarning> {
        std::mem::take(&mut self.warnings)
    }

    /// Returns the storage backend.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn entries_ref(&self, list: ListName) -> &IndexMap<String, String> {
        match list {
            ListName::Favorites => &self.favorites,
            ListName::Cooked => &self.cooked,
        }
    }

    fn entries_mut(&mut self, list: ListName) -> &mut IndexMap<String, String> {
        match list {
            ListName::Favorites => &mut self.favorites,
            ListName::Cooked => &mut self.cooked,
        }
    }

    fn persist(&mut self, list: ListName) {
        let entries = match list {
            ListName::Favorites => &self.favorites,
            ListName::Cooked => &self.cooked,
        };
        if let Err(error) = self.storage.save(list, entries) {
            self.warn(list, PersistenceOp::Save, error);
        }
    }

    fn warn(&mut self, list: ListName, op: PersistenceOp, error: crate::storage::StorageError) {
        let warning = PersistenceWarning { list, op, error };
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
    }
}

fn valid_id(id: &str) -> Result<&str, ListError> {
    let id = normalize_id(id);
    if id.is_empty() {
        return Err(ListError::InvalidId);
    }
    Ok(id)
}
