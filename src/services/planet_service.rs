//! Planet service for business logic operations.
//!
//! Enforces the image reference check on writes and maps joined rows into
//! the nested display shape, converting stored 0/1 habitability into a
//! boolean at this boundary.

use std::sync::Arc;

use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::models::{ImageRef, NewPlanet, Planet, UpdatePlanet};
use crate::repositories::PlanetStore;

/// Planet display shape: the planet's own fields plus its image nested
/// under `image`. The raw `imageId` column is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlanetView {
    pub id: i32,
    pub name: String,
    pub is_habitable: bool,
    pub description: String,
    pub image: ImageRef,
}

impl From<(Planet, ImageRef)> for PlanetView {
    fn from((planet, image): (Planet, ImageRef)) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            is_habitable: planet.is_habitable == 1,
            description: planet.description,
            image,
        }
    }
}

/// Planet service for handling planet-related business logic.
///
/// Holds the store behind an `Arc`, so cloning is cheap.
#[derive(Clone)]
pub struct PlanetService {
    store: Arc<dyn PlanetStore>,
}

impl PlanetService {
    /// Creates a new PlanetService with the given store.
    pub fn new(store: Arc<dyn PlanetStore>) -> Self {
        Self { store }
    }

    /// Creates a new planet.
    ///
    /// The referenced image must exist, otherwise the create fails with
    /// `NotFound("Image not found")`.
    ///
    /// # Returns
    /// The created planet row with its generated id.
    pub async fn create_planet(&self, new_planet: NewPlanet) -> AppResult<Planet> {
        self.check_image_ref(new_planet.image_id).await?;
        self.store.create(new_planet).await
    }

    /// Gets a planet by its ID with its image nested, or `NotFound`.
    pub async fn get_planet(&self, id: i32) -> AppResult<PlanetView> {
        self.store
            .find_by_id(id)
            .await?
            .map(PlanetView::from)
            .ok_or_else(|| AppError::not_found("Planet not found"))
    }

    /// Lists planets with their images nested.
    ///
    /// `name_filter` restricts the result to planets whose name contains the
    /// given substring, case-insensitively.
    pub async fn list_planets(&self, name_filter: Option<&str>) -> AppResult<Vec<PlanetView>> {
        let rows = self.store.list(name_filter).await?;
        Ok(rows.into_iter().map(PlanetView::from).collect())
    }

    /// Updates a planet.
    ///
    /// The image reference check runs before the target-existence check, so
    /// an update pointing at a missing image reports the image problem even
    /// when the planet itself does not exist.
    pub async fn update_planet(&self, id: i32, update_data: UpdatePlanet) -> AppResult<()> {
        self.check_image_ref(update_data.image_id).await?;

        let affected = self.store.update(id, update_data).await?;
        if affected == 0 {
            return Err(AppError::not_found("Planet not found"));
        }
        Ok(())
    }

    /// Deletes a planet, or `NotFound` if no row was removed.
    pub async fn delete_planet(&self, id: i32) -> AppResult<()> {
        let affected = self.store.delete(id).await?;
        if affected == 0 {
            return Err(AppError::not_found("Planet not found"));
        }
        Ok(())
    }

    /// The check and the subsequent write are separate statements; no
    /// transaction spans them, so the image can disappear in between.
    async fn check_image_ref(&self, image_id: i32) -> AppResult<()> {
        self.store
            .find_image_ref(image_id)
            .await?
            .ok_or_else(|| AppError::not_found("Image not found"))?;
        Ok(())
    }
}
