//! In-memory storage backend
//!
//! Holds every list in one process-wide map guarded by a single lock, so
//! concurrent requests cannot interleave read-modify-write on a list.
//! Data is lost on restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::store::models::{Item, TodoList};
use crate::store::{normalize_name, seed_items, ListStore, StoreError, GENERAL_LIST, WORK_LIST};

/// Process-local list storage
#[derive(Default)]
pub struct MemoryStore {
    lists: RwLock<HashMap<String, Vec<Item>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ListStore for MemoryStore {
    async fn ensure_defaults(&self) -> Result<(), StoreError> {
        let mut lists = self.lists.write().await;
        let general = lists.entry(GENERAL_LIST.to_string()).or_default();
        if general.is_empty() {
            general.extend(seed_items());
        }
        lists.entry(WORK_LIST.to_string()).or_default();
        Ok(())
    }

    async fn list_items(&self, name: &str) -> Result<Vec<Item>, StoreError> {
        let name = normalize_name(name);
        let lists = self.lists.read().await;
        Ok(lists.get(&name).cloned().unwrap_or_default())
    }

    async fn find_or_create(&self, name: &str) -> Result<TodoList, StoreError> {
        let name = normalize_name(name);
        let mut lists = self.lists.write().await;
        let items = lists.entry(name.clone()).or_insert_with(seed_items);
        Ok(TodoList {
            name,
            items: items.clone(),
        })
    }

    async fn add_item(&self, name: &str, text: &str) -> Result<Item, StoreError> {
        let name = normalize_name(name);
        let item = Item::new(text);
        let mut lists = self.lists.write().await;
        lists.entry(name).or_default().push(item.clone());
        Ok(item)
    }

    async fn delete_item(&self, name: &str, item_id: &str) -> Result<(), StoreError> {
        let name = normalize_name(name);
        let mut lists = self.lists.write().await;
        if let Some(items) = lists.get_mut(&name) {
            items.retain(|item| item.id != item_id);
        }
        Ok(())
    }
}
