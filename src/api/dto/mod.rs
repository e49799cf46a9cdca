//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `image`, `planet`, `astronaut` - entity request/response DTOs
//! - `error` - common error response DTO
//! - `message` - update/delete acknowledgement DTO
//! - `health` - health probe DTOs

mod astronaut;
mod error;
mod health;
mod image;
mod message;
mod planet;

pub use astronaut::{AstronautCreatedResponse, CreateAstronautRequest, UpdateAstronautRequest};
pub use error::ErrorResponse;
pub use health::{HealthResponse, ReadinessResponse};
pub use image::{CreateImageRequest, ImageResponse, UpdateImageRequest};
pub use message::MessageResponse;
pub use planet::{
    CreatePlanetRequest, ListPlanetsQuery, PlanetCreatedResponse, UpdatePlanetRequest,
};
