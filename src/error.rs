//! Error types and error handling for the application
//!
//! This module defines the API-level error type and its conversion to HTTP
//! responses. Store errors never cross the operation boundary raw: every
//! failure becomes a structured `{"success": false, "error": ...}` payload
//! with a mapped status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Application-level error types
///
/// All errors that can occur at the operation boundary are represented by
/// this enum. Each variant implements automatic conversion to HTTP responses
/// via `IntoResponse`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Error raised by the agent record store
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::Store(StoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Store(StoreError::Corruption(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Store(StoreError::Io(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "success": false,
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
