//! Shared application state
//!
//! Handlers receive the storage backend through axum state; interior
//! synchronization lives inside the store implementations.

use std::sync::Arc;

use crate::store::ListStore;

/// State handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Injected storage backend for lists and items
    pub store: Arc<dyn ListStore>,
}

impl AppState {
    /// Create state around a storage backend
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }
}
