//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the slotbook
//! API. It maps domain-specific errors to appropriate HTTP status codes and
//! JSON error responses, so every surface reports failures the same way.
//!
//! The implementation is based on Axum's error handling mechanisms and
//! integrates with the core's `SlotError` taxonomy. Every core error is
//! recoverable and carries a displayable message; none is fatal to the
//! process.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use slotbook_core::errors::SlotError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `SlotError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub SlotError);

/// Converts application errors to HTTP responses.
///
/// Validation problems are the caller's fault (400), scheduling and
/// equivalence failures are state conflicts (409), unknown ids are stale
/// views (404), and an unreachable persistence service is a 503 rather
/// than a silent success.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            SlotError::NotFound(_) => StatusCode::NOT_FOUND,
            SlotError::Validation(_) => StatusCode::BAD_REQUEST,
            SlotError::Conflict(_) => StatusCode::CONFLICT,
            SlotError::Equivalence(_) => StatusCode::CONFLICT,
            SlotError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Automatic conversion from SlotError to AppError.
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, SlotError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<SlotError> for AppError {
    fn from(err: SlotError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError.
///
/// Reports escaping the persistence boundary become the `Unavailable`
/// condition rather than a masked success.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(SlotError::Unavailable(err))
    }
}
