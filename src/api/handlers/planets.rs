//! Planet CRUD request handlers.
//!
//! Provides HTTP handlers for planet management operations. Reads return
//! the nested `PlanetView` shape; create echoes the flat input fields.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::api::doc::PLANET_TAG;
use crate::api::dto::{
    CreatePlanetRequest, ErrorResponse, ListPlanetsQuery, MessageResponse, PlanetCreatedResponse,
    UpdatePlanetRequest,
};
use crate::error::AppResult;
use crate::services::PlanetView;
use crate::state::AppState;

/// Creates planet-related routes.
///
/// Routes:
/// - GET /planets          - List planets, optionally filtered by name
/// - POST /planets         - Create a new planet
/// - GET /planets/{id}     - Get planet by ID
/// - PUT /planets/{id}     - Update planet by ID
/// - DELETE /planets/{id}  - Delete planet by ID
pub fn planet_routes() -> Router<AppState> {
    Router::new()
        .route("/planets", get(list_planets).post(create_planet))
        .route(
            "/planets/{id}",
            get(get_planet).put(update_planet).delete(delete_planet),
        )
}

/// GET /planets - List planets
///
/// Returns a JSON array of planets with their images nested. The optional
/// `name` query parameter restricts the result to planets whose name
/// contains the given substring, case-insensitively. An empty `name` is
/// treated as absent.
#[utoipa::path(
    get,
    path = "/planets",
    params(ListPlanetsQuery),
    responses(
        (status = 200, description = "List of planets", body = Vec<PlanetView>)
    ),
    tag = PLANET_TAG
)]
pub async fn list_planets(
    State(state): State<AppState>,
    Query(query): Query<ListPlanetsQuery>,
) -> AppResult<Json<Vec<PlanetView>>> {
    let name_filter = query.name.as_deref().filter(|term| !term.is_empty());
    let planets = state.services.planets.list_planets(name_filter).await?;
    Ok(Json(planets))
}

/// GET /planets/{id} - Get planet by ID
///
/// Returns the planet with its image nested or 404 if not found.
#[utoipa::path(
    get,
    path = "/planets/{id}",
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet found", body = PlanetView),
        (status = 404, description = "Planet not found", body = ErrorResponse)
    ),
    tag = PLANET_TAG
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<PlanetView>> {
    let planet = state.services.planets.get_planet(id).await?;
    Ok(Json(planet))
}

/// POST /planets - Create new planet
///
/// Creates a new planet from the JSON request body. The referenced image
/// must exist. Returns 201 Created with the flat input fields plus the
/// generated id.
#[utoipa::path(
    post,
    path = "/planets",
    request_body = CreatePlanetRequest,
    responses(
        (status = 201, description = "Planet created", body = PlanetCreatedResponse),
        (status = 404, description = "Referenced image not found", body = ErrorResponse)
    ),
    tag = PLANET_TAG
)]
pub async fn create_planet(
    State(state): State<AppState>,
    Json(payload): Json<CreatePlanetRequest>,
) -> AppResult<(StatusCode, Json<PlanetCreatedResponse>)> {
    let new_planet = payload.into_new_planet();
    let planet = state.services.planets.create_planet(new_planet).await?;
    Ok((StatusCode::CREATED, Json(PlanetCreatedResponse::from(planet))))
}

/// PUT /planets/{id} - Update planet
///
/// Rewrites every field of the planet with the specified ID. The referenced
/// image must exist. Returns an acknowledgement message.
#[utoipa::path(
    put,
    path = "/planets/{id}",
    params(("id" = i32, Path, description = "Planet ID")),
    request_body = UpdatePlanetRequest,
    responses(
        (status = 200, description = "Planet updated", body = MessageResponse),
        (status = 404, description = "Planet or referenced image not found", body = ErrorResponse)
    ),
    tag = PLANET_TAG
)]
pub async fn update_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePlanetRequest>,
) -> AppResult<Json<MessageResponse>> {
    let update_data = payload.into_update_planet();
    state
        .services
        .planets
        .update_planet(id, update_data)
        .await?;
    Ok(Json(MessageResponse::new("Planet updated successfully")))
}

/// DELETE /planets/{id} - Delete planet
///
/// Deletes the planet with the specified ID.
/// Returns an acknowledgement message.
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet deleted", body = MessageResponse),
        (status = 404, description = "Planet not found", body = ErrorResponse)
    ),
    tag = PLANET_TAG
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.planets.delete_planet(id).await?;
    Ok(Json(MessageResponse::new("Planet deleted successfully")))
}
