use thiserror::Error;

/// Application-wide error type that represents all possible errors in the system.
///
/// `NotFound` and `BadRequest` are the only expected kinds; both carry the
/// exact message the client will see. Everything else is unexpected,
/// keeps its source for server-side logging, and surfaces to clients as an
/// opaque internal error.
#[derive(Error, Debug)]
pub enum AppError {
    /// Requested entity or referenced entity does not exist
    #[error("{message}")]
    NotFound { message: String },

    /// Request violates a business rule or is missing required fields
    #[error("{message}")]
    BadRequest { message: String },

    /// Database operation error with operation context
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    /// Builds a `NotFound` with a client-facing message.
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound {
            message: message.into(),
        }
    }

    /// Builds a `BadRequest` with a client-facing message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        AppError::Database {
            operation: "query execution".to_string(),
            source: anyhow::Error::new(error),
        }
    }
}

impl From<diesel_async::pooled_connection::bb8::RunError> for AppError {
    fn from(error: diesel_async::pooled_connection::bb8::RunError) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::new(error),
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
