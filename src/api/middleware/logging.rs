//! Logging middleware for request/response tracing.
//!
//! Wraps each request in a span carrying the method, path and request id,
//! and logs a single completion record with the status and elapsed time.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{Instrument, info};

use super::RequestId;

/// Middleware that logs one record per completed request.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|r| r.0.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let span = tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = %request_id
    );

    let start = Instant::now();
    let response = next.run(request).instrument(span).await;
    let duration = start.elapsed();

    info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = duration.as_millis() as u64,
        request_id = %request_id,
        "Request completed"
    );

    response
}
