//! Storage layer
//!
//! One injected `ListStore` interface with two backends: a persistent
//! SQLite database and a process-local map.

pub mod memory;
pub mod models;
pub mod sqlite;

pub use memory::MemoryStore;
pub use models::{Item, ItemId, TodoList};
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use thiserror::Error;

/// Name of the list shown in the top section of the home page
pub const GENERAL_LIST: &str = "General";

/// Name of the second list shown on the home page
pub const WORK_LIST: &str = "Trabajo";

/// Texts of the items seeded into a brand-new list (or an empty store)
pub const SEED_ITEMS: [&str; 3] = [
    "Welcome to your todolist!",
    "Hit the + button to add a new item.",
    "<-- Hit this to delete an item.",
];

/// Errors surfaced by storage backends
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Filesystem failure while preparing the database location
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Normalize a list name: uppercase the first character, leave the rest
/// as typed. "pepito" and "Pepito" resolve to the same list.
pub fn normalize_name(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Build a fresh set of seed items
pub(crate) fn seed_items() -> Vec<Item> {
    SEED_ITEMS.iter().map(|text| Item::new(*text)).collect()
}

/// Storage interface for lists and items
///
/// Every operation normalizes the list name before lookup, so callers may
/// pass names exactly as they arrived in the URL or form body.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Seed initial data: the default items into an empty "General" list
    /// and an empty "Trabajo" list if it does not exist. Idempotent.
    async fn ensure_defaults(&self) -> Result<(), StoreError>;

    /// Items of the named list in insertion order; empty when the list
    /// does not exist. Never creates the list.
    async fn list_items(&self, name: &str) -> Result<Vec<Item>, StoreError>;

    /// Return the named list, creating it pre-populated with the seed
    /// items when absent.
    async fn find_or_create(&self, name: &str) -> Result<TodoList, StoreError>;

    /// Append a new item to the named list, creating the list (without
    /// seeds) if absent. Callers pass already-trimmed, non-empty text.
    async fn add_item(&self, name: &str, text: &str) -> Result<Item, StoreError>;

    /// Remove the matching item; silent no-op when the list or item does
    /// not exist.
    async fn delete_item(&self, name: &str, item_id: &str) -> Result<(), StoreError>;
}
