//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Compression (runs first) - negotiates response compression
/// 2. CORS - answers preflight requests and stamps CORS headers
/// 3. Request ID middleware - generates/propagates request IDs
/// 4. Logging middleware - logs requests with request IDs
///
/// # Routes
/// - `/images` - Image CRUD operations
/// - `/planets` - Planet CRUD operations
/// - `/astronauts` - Astronaut CRUD operations
/// - `/health`, `/health/ready` - Health probes
/// - `/swagger-ui` - Interactive API documentation
///
/// # Example
/// ```ignore
/// let state = AppState::new(pool);
/// let router = create_router(state);
/// ```
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(handlers::images::image_routes())
        .merge(handlers::planets::planet_routes())
        .merge(handlers::astronauts::astronaut_routes())
        .merge(handlers::health::health_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware is applied in reverse order - last added runs first
        // So logging runs after request_id has set the ID
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(CompressionLayer::new())
        .with_state(state)
}
