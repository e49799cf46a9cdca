//! Planet-related DTOs for API requests and responses.
//!
//! Wire field names are camelCase (`isHabitable`, `imageId`); habitability
//! crosses the wire as a boolean and is stored as 0/1.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{NewPlanet, Planet, UpdatePlanet};

// ============================================================================
// Request DTOs
// ============================================================================

/// Query parameters for listing planets.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListPlanetsQuery {
    /// Case-insensitive substring filter on the planet name.
    #[param(example = "Earth")]
    pub name: Option<String>,
}

/// Request body for creating a new planet.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanetRequest {
    #[schema(example = "Earth")]
    pub name: String,
    #[schema(example = "Blue Planet")]
    pub description: String,
    #[schema(example = true)]
    pub is_habitable: bool,
    #[schema(example = 1)]
    pub image_id: i32,
}

impl CreatePlanetRequest {
    /// Converts the request DTO into a NewPlanet model, mapping the boolean
    /// to the stored 0/1 integer.
    pub fn into_new_planet(self) -> NewPlanet {
        NewPlanet {
            name: self.name,
            description: self.description,
            is_habitable: i32::from(self.is_habitable),
            image_id: self.image_id,
        }
    }
}

/// Request body for updating a planet. Every field is rewritten.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanetRequest {
    pub name: String,
    pub description: String,
    pub is_habitable: bool,
    pub image_id: i32,
}

impl UpdatePlanetRequest {
    /// Converts the request DTO into an UpdatePlanet model.
    pub fn into_update_planet(self) -> UpdatePlanet {
        UpdatePlanet {
            name: self.name,
            description: self.description,
            is_habitable: i32::from(self.is_habitable),
            image_id: self.image_id,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Flat echo returned on planet create: the input fields plus the new id,
/// `imageId` included. Reads use the nested `PlanetView` shape instead.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanetCreatedResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub is_habitable: bool,
    pub image_id: i32,
}

impl From<Planet> for PlanetCreatedResponse {
    fn from(planet: Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            description: planet.description,
            is_habitable: planet.is_habitable == 1,
            image_id: planet.image_id,
        }
    }
}
