//! Repository layer for data access operations.
//!
//! Each entity gets a store trait describing its data access and a
//! diesel-backed repository implementing it. Services depend on the traits,
//! so tests can substitute in-memory doubles.

mod astronaut_repo;
mod image_repo;
mod planet_repo;

pub use astronaut_repo::{AstronautRepository, AstronautRow, AstronautStore};
pub use image_repo::{ImageRepository, ImageStore};
pub use planet_repo::{PlanetRepository, PlanetStore};

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub images: ImageRepository,
    pub planets: PlanetRepository,
    pub astronauts: AstronautRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    ///
    /// # Arguments
    /// * `pool` - The async database connection pool
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            images: ImageRepository::new(pool.clone()),
            planets: PlanetRepository::new(pool.clone()),
            astronauts: AstronautRepository::new(pool),
        }
    }
}
