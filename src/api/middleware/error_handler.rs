//! Error handler for converting AppError to HTTP responses.
//!
//! Implements IntoResponse for AppError so handlers can return
//! `AppResult<T>` directly. Expected errors keep their message; everything
//! else is logged server-side and surfaced as an opaque internal error.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

impl IntoResponse for AppError {
    /// Converts an AppError into an HTTP response.
    ///
    /// # Status Code Mapping
    /// - NotFound → 404 NOT_FOUND
    /// - BadRequest → 400 BAD_REQUEST
    /// - Database / ConnectionPool / Internal → 500 INTERNAL_SERVER_ERROR
    ///
    /// Unexpected kinds never leak detail to the client; the body is always
    /// `{"error": "Internal Server Error"}` and the source is logged here.
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);

        let body = match &self {
            AppError::NotFound { message } | AppError::BadRequest { message } => {
                ErrorResponse::new(message.clone())
            }
            AppError::Database { operation, source } => {
                tracing::error!(operation = %operation, error = %source, "Database error");
                ErrorResponse::new("Internal Server Error")
            }
            AppError::ConnectionPool { source } => {
                tracing::error!(error = %source, "Connection pool error");
                ErrorResponse::new("Internal Server Error")
            }
            AppError::Internal { source } => {
                tracing::error!(error = %source, "Internal error");
                ErrorResponse::new("Internal Server Error")
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Maps an AppError variant to its corresponding HTTP status code.
///
/// This function is useful for testing and validation purposes.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        AppError::Database { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::ConnectionPool { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
