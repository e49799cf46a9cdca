//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers. Each service depends on its store trait, so
//! tests can substitute in-memory doubles.

mod astronaut_service;
mod image_service;
mod planet_service;

pub use astronaut_service::{AstronautService, AstronautView, OriginPlanetView};
pub use image_service::ImageService;
pub use planet_service::{PlanetService, PlanetView};

use std::sync::Arc;

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since underlying pools use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub images: ImageService,
    pub planets: PlanetService,
    pub astronauts: AstronautService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            images: ImageService::new(Arc::new(repos.images)),
            planets: PlanetService::new(Arc::new(repos.planets)),
            astronauts: AstronautService::new(Arc::new(repos.astronauts)),
        }
    }
}
