//! MealLab Core Library
//!
//! The Favorites/Cooked list store with its on-disk records, plus the client
//! and models for the remote meal catalog.

pub mod catalog;
pub mod instructions;
pub mod lists;
pub mod models;
pub mod storage;

pub use catalog::{CatalogClient, CatalogError, ClientOptions, DEFAULT_BASE_URL};
pub use instructions::format_instructions;
pub use lists::{
    ListEntry, ListError, ListName, ListStore, MoveOutcome, PersistenceOp, PersistenceWarning,
    Removal,
};
pub use models::{Meal, MealSummary};
pub use storage::{JsonFileStorage, ListStorage, MemoryStorage, StorageError};
