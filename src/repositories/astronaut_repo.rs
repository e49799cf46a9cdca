//! Astronaut repository for async database operations.
//!
//! Astronaut reads join through the origin planet down to its image, so a
//! single query carries every field the display shape needs.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Astronaut, ImageRef, NewAstronaut, PlanetRef, PlanetSummary, UpdateAstronaut};

/// Joined astronaut row: the astronaut, its origin planet and that planet's
/// image.
pub type AstronautRow = (Astronaut, PlanetSummary, ImageRef);

/// Data-access contract for astronauts.
///
/// Absence is reported as `None` or a zero affected-row count, never as an
/// error. Only storage-level failures propagate.
#[async_trait]
pub trait AstronautStore: Send + Sync {
    /// Inserts a new astronaut and returns the stored row.
    async fn create(&self, new_astronaut: NewAstronaut) -> AppResult<Astronaut>;

    /// Finds an astronaut joined with its origin planet and the planet's
    /// image, `None` if absent.
    async fn find_by_id(&self, astronaut_id: i32) -> AppResult<Option<AstronautRow>>;

    /// Lists astronauts joined with their origin planets and images.
    async fn list_all(&self) -> AppResult<Vec<AstronautRow>>;

    /// Rewrites every column of an astronaut, returning the affected-row
    /// count.
    async fn update(&self, astronaut_id: i32, update_data: UpdateAstronaut) -> AppResult<usize>;

    /// Deletes an astronaut, returning the affected-row count.
    async fn delete(&self, astronaut_id: i32) -> AppResult<usize>;

    /// Narrow planet lookup used for the origin-planet check on create and
    /// update.
    async fn find_planet_ref(&self, planet_id: i32) -> AppResult<Option<PlanetRef>>;
}

/// Astronaut repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment). No need for `Arc<AstronautRepository>`.
#[derive(Clone)]
pub struct AstronautRepository {
    pool: AsyncDbPool,
}

impl AstronautRepository {
    /// Creates a new AstronautRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AstronautStore for AstronautRepository {
    async fn create(&self, new_astronaut: NewAstronaut) -> AppResult<Astronaut> {
        use crate::schema::astronauts::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(astronauts)
            .values(&new_astronaut)
            .returning(Astronaut::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, astronaut_id: i32) -> AppResult<Option<AstronautRow>> {
        use crate::schema::{astronauts, images, planets};
        let mut conn = self.pool.get().await?;

        astronauts::table
            .inner_join(planets::table.inner_join(images::table))
            .filter(astronauts::id.eq(astronaut_id))
            .select((
                Astronaut::as_select(),
                PlanetSummary::as_select(),
                ImageRef::as_select(),
            ))
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list_all(&self) -> AppResult<Vec<AstronautRow>> {
        use crate::schema::{astronauts, images, planets};
        let mut conn = self.pool.get().await?;

        astronauts::table
            .inner_join(planets::table.inner_join(images::table))
            .select((
                Astronaut::as_select(),
                PlanetSummary::as_select(),
                ImageRef::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn update(&self, astronaut_id: i32, update_data: UpdateAstronaut) -> AppResult<usize> {
        use crate::schema::astronauts::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(astronauts.filter(id.eq(astronaut_id)))
            .set(&update_data)
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn delete(&self, astronaut_id: i32) -> AppResult<usize> {
        use crate::schema::astronauts::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(astronauts.filter(id.eq(astronaut_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_planet_ref(&self, planet_id: i32) -> AppResult<Option<PlanetRef>> {
        use crate::schema::planets::dsl::*;
        let mut conn = self.pool.get().await?;

        planets
            .filter(id.eq(planet_id))
            .select(PlanetRef::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }
}
