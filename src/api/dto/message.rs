//! Acknowledgement response DTOs.

use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgement body returned by update and delete operations.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Astronaut updated successfully")]
    pub message: String,
}

impl MessageResponse {
    /// Creates a new acknowledgement with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
