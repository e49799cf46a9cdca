//! Planet repository for async database operations.
//!
//! Planets are always read together with their image, so every read joins
//! the images table and returns the row pair in one round trip.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{ImageRef, NewPlanet, Planet, UpdatePlanet};

/// Data-access contract for planets.
///
/// Absence is reported as `None` or a zero affected-row count, never as an
/// error. Only storage-level failures propagate.
#[async_trait]
pub trait PlanetStore: Send + Sync {
    /// Inserts a new planet and returns the stored row.
    async fn create(&self, new_planet: NewPlanet) -> AppResult<Planet>;

    /// Finds a planet joined with its image, `None` if absent.
    async fn find_by_id(&self, planet_id: i32) -> AppResult<Option<(Planet, ImageRef)>>;

    /// Lists planets joined with their images.
    ///
    /// `name_filter` restricts the result to planets whose name contains the
    /// given substring, case-insensitively.
    async fn list(&self, name_filter: Option<&str>) -> AppResult<Vec<(Planet, ImageRef)>>;

    /// Rewrites every column of a planet, returning the affected-row count.
    async fn update(&self, planet_id: i32, update_data: UpdatePlanet) -> AppResult<usize>;

    /// Deletes a planet, returning the affected-row count.
    async fn delete(&self, planet_id: i32) -> AppResult<usize>;

    /// Narrow image lookup used for the reference check on create and update.
    async fn find_image_ref(&self, image_id: i32) -> AppResult<Option<ImageRef>>;
}

/// Planet repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment). No need for `Arc<PlanetRepository>`.
#[derive(Clone)]
pub struct PlanetRepository {
    pool: AsyncDbPool,
}

impl PlanetRepository {
    /// Creates a new PlanetRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlanetStore for PlanetRepository {
    async fn create(&self, new_planet: NewPlanet) -> AppResult<Planet> {
        use crate::schema::planets::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(planets)
            .values(&new_planet)
            .returning(Planet::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, planet_id: i32) -> AppResult<Option<(Planet, ImageRef)>> {
        use crate::schema::{images, planets};
        let mut conn = self.pool.get().await?;

        planets::table
            .inner_join(images::table)
            .filter(planets::id.eq(planet_id))
            .select((Planet::as_select(), ImageRef::as_select()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list(&self, name_filter: Option<&str>) -> AppResult<Vec<(Planet, ImageRef)>> {
        use crate::schema::{images, planets};
        let mut conn = self.pool.get().await?;

        let mut query = planets::table
            .inner_join(images::table)
            .select((Planet::as_select(), ImageRef::as_select()))
            .into_boxed();

        if let Some(term) = name_filter {
            query = query.filter(planets::name.ilike(format!("%{}%", term)));
        }

        query.load(&mut conn).await.map_err(AppError::from)
    }

    async fn update(&self, planet_id: i32, update_data: UpdatePlanet) -> AppResult<usize> {
        use crate::schema::planets::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(planets.filter(id.eq(planet_id)))
            .set(&update_data)
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn delete(&self, planet_id: i32) -> AppResult<usize> {
        use crate::schema::planets::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(planets.filter(id.eq(planet_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_image_ref(&self, image_id: i32) -> AppResult<Option<ImageRef>> {
        use crate::schema::images::dsl::*;
        let mut conn = self.pool.get().await?;

        images
            .filter(id.eq(image_id))
            .select(ImageRef::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }
}
