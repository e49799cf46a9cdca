//! Image-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Image, NewImage, UpdateImage};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new image.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateImageRequest {
    #[schema(example = "Earth Image")]
    pub name: String,
    #[schema(example = "/img/earth.png")]
    pub path: String,
}

impl CreateImageRequest {
    /// Converts the request DTO into a NewImage model for insertion.
    pub fn into_new_image(self) -> NewImage {
        NewImage {
            name: self.name,
            path: self.path,
        }
    }
}

/// Request body for updating an image. Every field is rewritten.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateImageRequest {
    pub name: String,
    pub path: String,
}

impl UpdateImageRequest {
    /// Converts the request DTO into an UpdateImage model.
    pub fn into_update_image(self) -> UpdateImage {
        UpdateImage {
            name: self.name,
            path: self.path,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for image data; also the flat echo returned on create.
#[derive(Debug, Serialize, ToSchema)]
pub struct ImageResponse {
    pub id: i32,
    pub name: String,
    pub path: String,
}

impl From<Image> for ImageResponse {
    fn from(image: Image) -> Self {
        Self {
            id: image.id,
            name: image.name,
            path: image.path,
        }
    }
}
