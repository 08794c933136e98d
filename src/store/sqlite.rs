//! SQLite storage backend
//!
//! Handles all database interactions for lists and items.

use std::path::PathBuf;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::store::models::{Item, TodoList};
use crate::store::{normalize_name, seed_items, ListStore, StoreError, GENERAL_LIST, WORK_LIST};

/// Database connection pool for list operations
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Initialize the database connection pool
    ///
    /// # Arguments
    /// * `db_path` - Path to the SQLite database file, with or without a
    ///   `sqlite:` prefix
    ///
    /// # Returns
    /// * `Ok(SqliteStore)` if the database was opened and migrated
    /// * `Err(StoreError)` if connection or migration failed
    pub async fn new(db_path: &str) -> Result<Self, StoreError> {
        // Ensure parent directory exists
        let bare_path = db_path.trim_start_matches("sqlite:");
        if let Some(parent) = PathBuf::from(bare_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        // SQLite connection string format: sqlite://path/to/db.db
        let connection_string = if db_path.starts_with("sqlite:") {
            db_path.to_string()
        } else {
            format!("sqlite:{}", db_path)
        };

        let options = SqliteConnectOptions::from_str(&connection_string)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        info!("Connected to SQLite database at: {}", db_path);

        let store = Self { pool };
        store.run_migrations().await?;

        Ok(store)
    }

    /// Run database migrations
    async fn run_migrations(&self) -> Result<(), StoreError> {
        let migration_sql = include_str!("../../migrations/001_create_lists.sql");

        // Remove comments (lines starting with --) and normalize whitespace
        let mut cleaned_sql = String::new();
        for line in migration_sql.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with("--") {
                continue;
            }
            // Remove inline comments (everything after --)
            let without_comments = match trimmed.find("--") {
                Some(comment_pos) => &trimmed[..comment_pos],
                None => trimmed,
            };
            cleaned_sql.push_str(without_comments.trim());
            cleaned_sql.push(' ');
        }

        // Execute each statement separately
        for statement in cleaned_sql.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        debug!("Database migrations completed");
        Ok(())
    }

    /// Insert the list row if missing; true when a new row was created
    async fn insert_list(&self, name: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("INSERT OR IGNORE INTO lists (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() == 1)
    }

    async fn insert_item(&self, list_name: &str, item: &Item) -> Result<(), StoreError> {
        sqlx::query("INSERT INTO items (id, list_name, name, created_at) VALUES (?, ?, ?, ?)")
            .bind(&item.id)
            .bind(list_name)
            .bind(&item.name)
            .bind(item.created_at)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Items of a list in insertion order (name already normalized)
    async fn fetch_items(&self, name: &str) -> Result<Vec<Item>, StoreError> {
        let items = sqlx::query_as::<_, Item>(
            "SELECT id, name, created_at FROM items WHERE list_name = ? \
             ORDER BY created_at ASC, rowid ASC",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }
}

#[async_trait]
impl ListStore for SqliteStore {
    async fn ensure_defaults(&self) -> Result<(), StoreError> {
        self.insert_list(GENERAL_LIST).await?;
        let general = self.fetch_items(GENERAL_LIST).await?;
        if general.is_empty() {
            for item in seed_items() {
                self.insert_item(GENERAL_LIST, &item).await?;
            }
            debug!("Seeded '{}' with default items", GENERAL_LIST);
        }

        self.insert_list(WORK_LIST).await?;
        Ok(())
    }

    async fn list_items(&self, name: &str) -> Result<Vec<Item>, StoreError> {
        self.fetch_items(&normalize_name(name)).await
    }

    async fn find_or_create(&self, name: &str) -> Result<TodoList, StoreError> {
        let name = normalize_name(name);
        if self.insert_list(&name).await? {
            for item in seed_items() {
                self.insert_item(&name, &item).await?;
            }
            debug!("Created list '{}' with default items", name);
        }

        let items = self.fetch_items(&name).await?;
        Ok(TodoList { name, items })
    }

    async fn add_item(&self, name: &str, text: &str) -> Result<Item, StoreError> {
        let name = normalize_name(name);
        self.insert_list(&name).await?;

        let item = Item::new(text);
        self.insert_item(&name, &item).await?;

        debug!("Added item {} to list '{}'", item.id, name);
        Ok(item)
    }

    async fn delete_item(&self, name: &str, item_id: &str) -> Result<(), StoreError> {
        let name = normalize_name(name);
        sqlx::query("DELETE FROM items WHERE list_name = ? AND id = ?")
            .bind(&name)
            .bind(item_id)
            .execute(&self.pool)
            .await?;

        debug!("Deleted item {} from list '{}'", item_id, name);
        Ok(())
    }
}
