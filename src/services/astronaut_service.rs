//! Astronaut service for business logic operations.
//!
//! Carries the one substantive business rule in the system: an astronaut's
//! origin planet must exist and be habitable, checked on both create and
//! update. Reads map the three-way joined row into the nested display shape.

use std::sync::Arc;

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::models::{Astronaut, ImageRef, NewAstronaut, UpdateAstronaut};
use crate::repositories::{AstronautRow, AstronautStore};

/// Astronaut display shape: own fields plus the origin planet nested under
/// `originPlanet`. The raw `originPlanetId` column is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AstronautView {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub origin_planet: OriginPlanetView,
}

/// Origin planet as displayed inside an astronaut, with the planet's image
/// nested one level further down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OriginPlanetView {
    pub name: String,
    pub is_habitable: bool,
    pub description: String,
    pub image: ImageRef,
}

impl From<AstronautRow> for AstronautView {
    fn from((astronaut, planet, image): AstronautRow) -> Self {
        Self {
            id: astronaut.id,
            firstname: astronaut.firstname,
            lastname: astronaut.lastname,
            origin_planet: OriginPlanetView {
                name: planet.name,
                is_habitable: planet.is_habitable == 1,
                description: planet.description,
                image,
            },
        }
    }
}

/// Astronaut service for handling astronaut-related business logic.
///
/// Holds the store behind an `Arc`, so cloning is cheap.
#[derive(Clone)]
pub struct AstronautService {
    store: Arc<dyn AstronautStore>,
}

impl AstronautService {
    /// Creates a new AstronautService with the given store.
    pub fn new(store: Arc<dyn AstronautStore>) -> Self {
        Self { store }
    }

    /// Creates a new astronaut.
    ///
    /// The origin planet must exist (`NotFound("Origin planet not found")`)
    /// and be habitable (`BadRequest`), otherwise the create fails.
    ///
    /// # Returns
    /// The created astronaut row with its generated id.
    pub async fn create_astronaut(&self, new_astronaut: NewAstronaut) -> AppResult<Astronaut> {
        self.check_origin_planet(new_astronaut.origin_planet_id)
            .await?;
        self.store.create(new_astronaut).await
    }

    /// Gets an astronaut by its ID with the origin planet nested, or
    /// `NotFound`.
    pub async fn get_astronaut(&self, id: i32) -> AppResult<AstronautView> {
        self.store
            .find_by_id(id)
            .await?
            .map(AstronautView::from)
            .ok_or_else(|| AppError::not_found("Astronaut not found"))
    }

    /// Lists astronauts with their origin planets nested.
    pub async fn list_astronauts(&self) -> AppResult<Vec<AstronautView>> {
        let rows = self.store.list_all().await?;
        Ok(rows.into_iter().map(AstronautView::from).collect())
    }

    /// Updates an astronaut.
    ///
    /// The origin-planet checks run before the target-existence check, so an
    /// update pointing at a missing or non-habitable planet reports the
    /// planet problem even when the astronaut itself does not exist.
    pub async fn update_astronaut(
        &self,
        id: i32,
        update_data: UpdateAstronaut,
    ) -> AppResult<()> {
        self.check_origin_planet(update_data.origin_planet_id)
            .await?;

        let affected = self.store.update(id, update_data).await?;
        if affected == 0 {
            return Err(AppError::not_found("Astronaut not found"));
        }
        Ok(())
    }

    /// Deletes an astronaut, or `NotFound` if no row was removed.
    pub async fn delete_astronaut(&self, id: i32) -> AppResult<()> {
        let affected = self.store.delete(id).await?;
        if affected == 0 {
            return Err(AppError::not_found("Astronaut not found"));
        }
        Ok(())
    }

    /// Existence check first, habitability second; callers rely on this
    /// order for the error they surface. The check and the subsequent write
    /// are separate statements; no transaction spans them.
    async fn check_origin_planet(&self, planet_id: i32) -> AppResult<()> {
        let planet = self
            .store
            .find_planet_ref(planet_id)
            .await?
            .ok_or_else(|| AppError::not_found("Origin planet not found"))?;

        if planet.is_habitable == 0 {
            return Err(AppError::bad_request(
                "Astronauts can only be associated with habitable planets",
            ));
        }
        Ok(())
    }
}
