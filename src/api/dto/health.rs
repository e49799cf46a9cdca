//! Health check DTOs for API responses.

use serde::Serialize;
use utoipa::ToSchema;

/// Liveness response: the process is up.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"` when the server answers at all.
    #[schema(example = "ok")]
    pub status: String,
    /// Application version from build-time metadata.
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Timestamp of the health check (ISO 8601 format).
    #[schema(example = "2025-01-01T12:00:00Z")]
    pub timestamp: String,
}

/// Readiness response: whether the database answers a probe query.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessResponse {
    /// `"ready"` when the database probe succeeds, `"unavailable"` when not.
    #[schema(example = "ready")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            timestamp: "2025-01-01T12:00:00Z".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], "0.1.0");
    }
}
