//! HTTP route handlers
//!
//! Page rendering and form submission handlers.

pub mod items;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Build the application router
///
/// Explicit routes are registered before the `/:list_name` capture so that
/// `/work`, `/about`, `/healthz`, `/favicon.ico` and `/delete` never resolve
/// as list names.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home).post(items::add_item))
        .route("/work", get(pages::work_redirect))
        .route("/about", get(pages::about))
        .route("/healthz", get(pages::health))
        .route("/favicon.ico", get(pages::favicon))
        .route("/delete", post(items::delete_item))
        .route("/:list_name", get(pages::custom_list))
        .fallback(pages::not_found)
}
