//! Page handlers
//!
//! Renders the combined home view, dynamic custom lists, and the static
//! pages.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Json, Redirect},
};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;
use crate::store::{ListStore, GENERAL_LIST, WORK_LIST};
use crate::views::{AboutTemplate, CustomListTemplate, HomeTemplate};

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Status indicator (e.g., "healthy")
    pub status: String,
    /// Crate version
    pub version: String,
}

/// GET / - Combined view of the "General" and work lists
pub async fn home(State(state): State<AppState>) -> Result<HomeTemplate, AppError> {
    state.store.ensure_defaults().await?;

    let general_items = state.store.list_items(GENERAL_LIST).await?;
    let work_items = state.store.list_items(WORK_LIST).await?;

    Ok(HomeTemplate {
        general_items,
        work_items,
        work_title: WORK_LIST.to_string(),
    })
}

/// GET /:list_name - Find-or-create a named list and render it
pub async fn custom_list(
    State(state): State<AppState>,
    Path(list_name): Path<String>,
) -> Result<CustomListTemplate, AppError> {
    let list = state.store.find_or_create(&list_name).await?;

    Ok(CustomListTemplate {
        list_title: list.name,
        items: list.items,
    })
}

/// GET /work - The work list lives on the home page
pub async fn work_redirect() -> Redirect {
    Redirect::to("/")
}

/// GET /about - Static about page
pub async fn about() -> AboutTemplate {
    AboutTemplate {
        page_title: "About this app".to_string(),
    }
}

/// GET /favicon.ico - Keep browser favicon probes out of the list route
pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// GET /healthz - Service health and version
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Fallback for unmatched routes - 404 with the about page body
pub async fn not_found() -> (StatusCode, AboutTemplate) {
    (
        StatusCode::NOT_FOUND,
        AboutTemplate {
            page_title: "Page not found".to_string(),
        },
    )
}
