//! Storage data models
//!
//! Typed structs for lists and items, replacing the schema-less documents
//! the original storage used.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Unique identifier for an item
pub type ItemId = String;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Item {
    /// Unique identifier for the item
    pub id: ItemId,
    /// Text of the entry
    pub name: String,
    /// When the item was created (Unix timestamp); drives display order
    pub created_at: i64,
}

impl Item {
    /// Create a new item with a fresh id and the current timestamp
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: Utc::now().timestamp(),
        }
    }
}

/// A named, ordered collection of items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    /// Unique list name (normalized)
    pub name: String,
    /// Items in insertion order
    pub items: Vec<Item>,
}
