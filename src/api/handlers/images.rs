//! Image CRUD request handlers.
//!
//! Provides HTTP handlers for image management operations.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::api::doc::IMAGE_TAG;
use crate::api::dto::{
    CreateImageRequest, ErrorResponse, ImageResponse, MessageResponse, UpdateImageRequest,
};
use crate::error::AppResult;
use crate::state::AppState;

/// Creates image-related routes.
///
/// Routes:
/// - GET /images          - List all images
/// - POST /images         - Create a new image
/// - GET /images/{id}     - Get image by ID
/// - PUT /images/{id}     - Update image by ID
/// - DELETE /images/{id}  - Delete image by ID
pub fn image_routes() -> Router<AppState> {
    Router::new()
        .route("/images", get(list_images).post(create_image))
        .route(
            "/images/{id}",
            get(get_image).put(update_image).delete(delete_image),
        )
}

/// GET /images - List all images
///
/// Returns a JSON array of all images.
#[utoipa::path(
    get,
    path = "/images",
    responses(
        (status = 200, description = "List of all images", body = Vec<ImageResponse>)
    ),
    tag = IMAGE_TAG
)]
pub async fn list_images(State(state): State<AppState>) -> AppResult<Json<Vec<ImageResponse>>> {
    let images = state.services.images.list_images().await?;
    let responses: Vec<ImageResponse> = images.into_iter().map(ImageResponse::from).collect();
    Ok(Json(responses))
}

/// GET /images/{id} - Get image by ID
///
/// Returns the image with the specified ID or 404 if not found.
#[utoipa::path(
    get,
    path = "/images/{id}",
    params(("id" = i32, Path, description = "Image ID")),
    responses(
        (status = 200, description = "Image found", body = ImageResponse),
        (status = 404, description = "Image not found", body = ErrorResponse)
    ),
    tag = IMAGE_TAG
)]
pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ImageResponse>> {
    let image = state.services.images.get_image(id).await?;
    Ok(Json(ImageResponse::from(image)))
}

/// POST /images - Create new image
///
/// Creates a new image from the JSON request body.
/// Returns 201 Created with the created image data.
#[utoipa::path(
    post,
    path = "/images",
    request_body = CreateImageRequest,
    responses(
        (status = 201, description = "Image created", body = ImageResponse)
    ),
    tag = IMAGE_TAG
)]
pub async fn create_image(
    State(state): State<AppState>,
    Json(payload): Json<CreateImageRequest>,
) -> AppResult<(StatusCode, Json<ImageResponse>)> {
    let new_image = payload.into_new_image();
    let image = state.services.images.create_image(new_image).await?;
    Ok((StatusCode::CREATED, Json(ImageResponse::from(image))))
}

/// PUT /images/{id} - Update image
///
/// Rewrites every field of the image with the specified ID.
/// Returns an acknowledgement message.
#[utoipa::path(
    put,
    path = "/images/{id}",
    params(("id" = i32, Path, description = "Image ID")),
    request_body = UpdateImageRequest,
    responses(
        (status = 200, description = "Image updated", body = MessageResponse),
        (status = 404, description = "Image not found", body = ErrorResponse)
    ),
    tag = IMAGE_TAG
)]
pub async fn update_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateImageRequest>,
) -> AppResult<Json<MessageResponse>> {
    let update_data = payload.into_update_image();
    state.services.images.update_image(id, update_data).await?;
    Ok(Json(MessageResponse::new("Image updated successfully")))
}

/// DELETE /images/{id} - Delete image
///
/// Deletes the image with the specified ID.
/// Returns an acknowledgement message.
#[utoipa::path(
    delete,
    path = "/images/{id}",
    params(("id" = i32, Path, description = "Image ID")),
    responses(
        (status = 200, description = "Image deleted", body = MessageResponse),
        (status = 404, description = "Image not found", body = ErrorResponse)
    ),
    tag = IMAGE_TAG
)]
pub async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.images.delete_image(id).await?;
    Ok(Json(MessageResponse::new("Image deleted successfully")))
}
