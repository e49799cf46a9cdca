//! Astronaut-related DTOs for API requests and responses.
//!
//! Astronaut create carries handler-level pre-validation: `firstname`,
//! `lastname` and `originPlanetId` must all be present and non-empty before
//! the service is invoked, else the request fails with
//! `"Missing required fields"`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{Astronaut, NewAstronaut, UpdateAstronaut};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new astronaut.
///
/// Fields are optional at the deserialization boundary so an incomplete body
/// surfaces as the fixed 400 message instead of a deserialization rejection.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAstronautRequest {
    #[validate(required, length(min = 1))]
    #[schema(example = "Neil")]
    pub firstname: Option<String>,
    #[validate(required, length(min = 1))]
    #[schema(example = "Armstrong")]
    pub lastname: Option<String>,
    #[validate(required)]
    #[schema(example = 1)]
    pub origin_planet_id: Option<i32>,
}

impl CreateAstronautRequest {
    /// Converts the request DTO into a NewAstronaut model, `None` when any
    /// required field is missing.
    pub fn into_new_astronaut(self) -> Option<NewAstronaut> {
        match (self.firstname, self.lastname, self.origin_planet_id) {
            (Some(firstname), Some(lastname), Some(origin_planet_id)) => Some(NewAstronaut {
                firstname,
                lastname,
                origin_planet_id,
            }),
            _ => None,
        }
    }
}

/// Request body for updating an astronaut. Every field is rewritten.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAstronautRequest {
    pub firstname: String,
    pub lastname: String,
    pub origin_planet_id: i32,
}

impl UpdateAstronautRequest {
    /// Converts the request DTO into an UpdateAstronaut model.
    pub fn into_update_astronaut(self) -> UpdateAstronaut {
        UpdateAstronaut {
            firstname: self.firstname,
            lastname: self.lastname,
            origin_planet_id: self.origin_planet_id,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Flat echo returned on astronaut create: the input fields plus the new
/// id, `originPlanetId` included. Reads use the nested `AstronautView`
/// shape instead.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AstronautCreatedResponse {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub origin_planet_id: i32,
}

impl From<Astronaut> for AstronautCreatedResponse {
    fn from(astronaut: Astronaut) -> Self {
        Self {
            id: astronaut.id,
            firstname: astronaut.firstname,
            lastname: astronaut.lastname,
            origin_planet_id: astronaut.origin_planet_id,
        }
    }
}
