//! Health check endpoint handlers.
//!
//! This module provides health check functionality for monitoring
//! and load balancer health checks. The readiness probe directly accesses
//! the database connection pool for efficient connectivity testing.

use axum::{Router, extract::State, http::StatusCode, response::Json, routing::get};
use diesel_async::RunQueryDsl;

use crate::api::doc::HEALTH_TAG;
use crate::api::dto::{HealthResponse, ReadinessResponse};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Creates health check routes.
///
/// # Routes
/// - `GET /health` - Liveness check
/// - `GET /health/ready` - Readiness probe
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
}

/// Liveness check endpoint.
///
/// Reports that the process is up without touching external dependencies.
///
/// # Example Response
/// ```json
/// {
///   "status": "ok",
///   "version": "0.1.0",
///   "timestamp": "2025-01-01T12:00:00Z"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    ),
    tag = HEALTH_TAG
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: jiff::Timestamp::now().to_string(),
    })
}

/// Readiness probe endpoint.
///
/// Indicates whether the service is ready to accept traffic by checking
/// out a pooled connection and running a probe query against it.
///
/// # Responses
/// - `200 OK` - Database answered the probe
/// - `503 Service Unavailable` - Database is unreachable
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessResponse),
        (status = 503, description = "Service is not ready", body = ReadinessResponse)
    ),
    tag = HEALTH_TAG
)]
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    match check_database(&state).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "ready".to_string(),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "unavailable".to_string(),
                }),
            )
        }
    }
}

/// Check database connectivity by directly accessing the connection pool.
///
/// Bypasses the service layer so the probe reflects raw pool health rather
/// than any business-level behavior.
async fn check_database(state: &AppState) -> AppResult<()> {
    let mut conn = state.db_pool.get().await?;

    diesel::sql_query("SELECT 1")
        .execute(&mut conn)
        .await
        .map_err(AppError::from)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check_reports_ok() {
        let Json(response) = health_check().await;

        assert_eq!(response.status, "ok");
        assert!(!response.version.is_empty());
        assert!(!response.timestamp.is_empty());
    }

    #[tokio::test]
    async fn test_health_check_timestamp_is_iso8601() {
        let Json(response) = health_check().await;

        assert!(response.timestamp.parse::<jiff::Timestamp>().is_ok());
    }
}
