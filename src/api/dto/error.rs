//! Error response DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response format.
///
/// Every error body is `{"error": "<message>"}`, whatever the status code.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Astronaut not found")]
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new error response with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
