//! Astronaut CRUD request handlers.
//!
//! Provides HTTP handlers for astronaut management operations. Create
//! carries a pre-validation step: all required fields must be present and
//! non-empty before the service is invoked.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::api::doc::ASTRONAUT_TAG;
use crate::api::dto::{
    AstronautCreatedResponse, CreateAstronautRequest, ErrorResponse, MessageResponse,
    UpdateAstronautRequest,
};
use crate::error::{AppError, AppResult};
use crate::services::AstronautView;
use crate::state::AppState;

/// Creates astronaut-related routes.
///
/// Routes:
/// - GET /astronauts          - List all astronauts
/// - POST /astronauts         - Create a new astronaut
/// - GET /astronauts/{id}     - Get astronaut by ID
/// - PUT /astronauts/{id}     - Update astronaut by ID
/// - DELETE /astronauts/{id}  - Delete astronaut by ID
pub fn astronaut_routes() -> Router<AppState> {
    Router::new()
        .route("/astronauts", get(list_astronauts).post(create_astronaut))
        .route(
            "/astronauts/{id}",
            get(get_astronaut)
                .put(update_astronaut)
                .delete(delete_astronaut),
        )
}

/// GET /astronauts - List all astronauts
///
/// Returns a JSON array of astronauts with their origin planets nested.
#[utoipa::path(
    get,
    path = "/astronauts",
    responses(
        (status = 200, description = "List of all astronauts", body = Vec<AstronautView>)
    ),
    tag = ASTRONAUT_TAG
)]
pub async fn list_astronauts(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AstronautView>>> {
    let astronauts = state.services.astronauts.list_astronauts().await?;
    Ok(Json(astronauts))
}

/// GET /astronauts/{id} - Get astronaut by ID
///
/// Returns the astronaut with its origin planet nested or 404 if not found.
#[utoipa::path(
    get,
    path = "/astronauts/{id}",
    params(("id" = i32, Path, description = "Astronaut ID")),
    responses(
        (status = 200, description = "Astronaut found", body = AstronautView),
        (status = 404, description = "Astronaut not found", body = ErrorResponse)
    ),
    tag = ASTRONAUT_TAG
)]
pub async fn get_astronaut(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<AstronautView>> {
    let astronaut = state.services.astronauts.get_astronaut(id).await?;
    Ok(Json(astronaut))
}

/// POST /astronauts - Create new astronaut
///
/// Creates a new astronaut from the JSON request body. All fields are
/// required and checked here before the service runs its origin-planet
/// rules. Returns 201 Created with the flat input fields plus the
/// generated id.
#[utoipa::path(
    post,
    path = "/astronauts",
    request_body = CreateAstronautRequest,
    responses(
        (status = 201, description = "Astronaut created", body = AstronautCreatedResponse),
        (status = 400, description = "Missing fields or non-habitable planet", body = ErrorResponse),
        (status = 404, description = "Origin planet not found", body = ErrorResponse)
    ),
    tag = ASTRONAUT_TAG
)]
pub async fn create_astronaut(
    State(state): State<AppState>,
    Json(payload): Json<CreateAstronautRequest>,
) -> AppResult<(StatusCode, Json<AstronautCreatedResponse>)> {
    if payload.validate().is_err() {
        return Err(AppError::bad_request("Missing required fields"));
    }
    let new_astronaut = payload
        .into_new_astronaut()
        .ok_or_else(|| AppError::bad_request("Missing required fields"))?;

    let astronaut = state
        .services
        .astronauts
        .create_astronaut(new_astronaut)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(AstronautCreatedResponse::from(astronaut)),
    ))
}

/// PUT /astronauts/{id} - Update astronaut
///
/// Rewrites every field of the astronaut with the specified ID. The
/// origin-planet rules are checked before the astronaut itself is looked
/// up. Returns an acknowledgement message.
#[utoipa::path(
    put,
    path = "/astronauts/{id}",
    params(("id" = i32, Path, description = "Astronaut ID")),
    request_body = UpdateAstronautRequest,
    responses(
        (status = 200, description = "Astronaut updated", body = MessageResponse),
        (status = 400, description = "Non-habitable origin planet", body = ErrorResponse),
        (status = 404, description = "Astronaut or origin planet not found", body = ErrorResponse)
    ),
    tag = ASTRONAUT_TAG
)]
pub async fn update_astronaut(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAstronautRequest>,
) -> AppResult<Json<MessageResponse>> {
    let update_data = payload.into_update_astronaut();
    state
        .services
        .astronauts
        .update_astronaut(id, update_data)
        .await?;
    Ok(Json(MessageResponse::new("Astronaut updated successfully")))
}

/// DELETE /astronauts/{id} - Delete astronaut
///
/// Deletes the astronaut with the specified ID.
/// Returns an acknowledgement message.
#[utoipa::path(
    delete,
    path = "/astronauts/{id}",
    params(("id" = i32, Path, description = "Astronaut ID")),
    responses(
        (status = 200, description = "Astronaut deleted", body = MessageResponse),
        (status = 404, description = "Astronaut not found", body = ErrorResponse)
    ),
    tag = ASTRONAUT_TAG
)]
pub async fn delete_astronaut(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.astronauts.delete_astronaut(id).await?;
    Ok(Json(MessageResponse::new("Astronaut deleted successfully")))
}
