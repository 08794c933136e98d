//! Storage backend integration tests
//!
//! Exercises the `ListStore` contract against both backends so the two
//! variants cannot drift apart.

use std::sync::Arc;

use tempfile::TempDir;
use todolist_backend::store::{
    ListStore, MemoryStore, SqliteStore, GENERAL_LIST, SEED_ITEMS, WORK_LIST,
};

async fn sqlite_store(dir: &TempDir) -> SqliteStore {
    let db_path = dir.path().join("todolist.db");
    SqliteStore::new(db_path.to_str().unwrap())
        .await
        .expect("Failed to open sqlite store")
}

/// The full `ListStore` contract, backend-agnostic
async fn check_contract(store: Arc<dyn ListStore>) {
    // An untouched store has no lists
    assert!(store.list_items(GENERAL_LIST).await.unwrap().is_empty());

    // Seeding is idempotent: General gets the three defaults, the work
    // list is created empty
    store.ensure_defaults().await.unwrap();
    store.ensure_defaults().await.unwrap();

    let general = store.list_items(GENERAL_LIST).await.unwrap();
    let names: Vec<&str> = general.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, SEED_ITEMS);
    assert!(store.list_items(WORK_LIST).await.unwrap().is_empty());

    // The work list already exists, so find-or-create must not seed it
    let work = store.find_or_create(WORK_LIST).await.unwrap();
    assert!(work.items.is_empty());

    // First reference to an unknown list creates it with the seed items;
    // the second reference returns it unchanged
    let first = store.find_or_create("Viajes").await.unwrap();
    assert_eq!(first.name, "Viajes");
    assert_eq!(first.items.len(), 3);

    let second = store.find_or_create("Viajes").await.unwrap();
    assert_eq!(first, second);

    // Lookup is case-insensitive at the first letter
    let lower = store.find_or_create("viajes").await.unwrap();
    assert_eq!(lower, first);

    // Adding creates unknown lists WITHOUT seeds and keeps insertion order
    let milk = store.add_item("compras", "Buy milk").await.unwrap();
    let eggs = store.add_item("Compras", "Buy eggs").await.unwrap();

    let compras = store.list_items("Compras").await.unwrap();
    assert_eq!(compras.len(), 2);
    assert_eq!(compras[0].id, milk.id);
    assert_eq!(compras[1].id, eggs.id);

    // Deleting an unknown id (or from an unknown list) is a silent no-op
    store.delete_item("Compras", "no-such-id").await.unwrap();
    store.delete_item("NoSuchList", &milk.id).await.unwrap();
    assert_eq!(store.list_items("Compras").await.unwrap().len(), 2);

    // Deleting a real item removes exactly that item
    store.delete_item("Compras", &milk.id).await.unwrap();
    let compras = store.list_items("Compras").await.unwrap();
    assert_eq!(compras.len(), 1);
    assert_eq!(compras[0].id, eggs.id);

    // Reading never creates
    assert!(store.list_items("Fantasma").await.unwrap().is_empty());
    assert!(store.list_items("Fantasma").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_memory_store_contract() {
    check_contract(Arc::new(MemoryStore::new())).await;
}

#[tokio::test]
async fn test_sqlite_store_contract() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    check_contract(Arc::new(sqlite_store(&dir).await)).await;
}

#[tokio::test]
async fn test_sqlite_store_persists_across_reopen() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let added = {
        let store = sqlite_store(&dir).await;
        store.ensure_defaults().await.unwrap();
        store.add_item(WORK_LIST, "Send report").await.unwrap()
    };

    // A fresh pool over the same file sees the same data
    let store = sqlite_store(&dir).await;
    let work = store.list_items(WORK_LIST).await.unwrap();
    assert_eq!(work.len(), 1);
    assert_eq!(work[0].id, added.id);
    assert_eq!(work[0].name, "Send report");
}
