//! Error types and error handling for the application
//!
//! This module defines the application error type and its conversion to
//! HTTP responses. Page handlers surface storage failures as a generic 500;
//! form handlers log and redirect instead, so they never return `AppError`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Error occurred in the storage layer
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Internal server error (catch-all for unexpected errors)
    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {}", self);

        let body = match self {
            AppError::Store(_) => "Error loading lists",
            AppError::Internal(_) => "Internal server error",
        };

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
