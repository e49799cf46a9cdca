//! Image repository for async database operations.
//!
//! Provides CRUD operations for the images table using diesel_async.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{Image, NewImage, UpdateImage};

/// Data-access contract for images.
///
/// Absence is reported as `None` or a zero affected-row count, never as an
/// error. Only storage-level failures propagate.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Inserts a new image and returns the stored row.
    async fn create(&self, new_image: NewImage) -> AppResult<Image>;

    /// Finds an image by its ID, `None` if absent.
    async fn find_by_id(&self, image_id: i32) -> AppResult<Option<Image>>;

    /// Lists all images.
    async fn list_all(&self) -> AppResult<Vec<Image>>;

    /// Rewrites every column of an image, returning the affected-row count.
    async fn update(&self, image_id: i32, update_data: UpdateImage) -> AppResult<usize>;

    /// Deletes an image, returning the affected-row count.
    async fn delete(&self, image_id: i32) -> AppResult<usize>;
}

/// Image repository holding an async connection pool.
///
/// Since `AsyncDbPool` (bb8::Pool) internally uses `Arc`, cloning is cheap
/// (just reference count increment). No need for `Arc<ImageRepository>`.
#[derive(Clone)]
pub struct ImageRepository {
    pool: AsyncDbPool,
}

impl ImageRepository {
    /// Creates a new ImageRepository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ImageStore for ImageRepository {
    async fn create(&self, new_image: NewImage) -> AppResult<Image> {
        use crate::schema::images::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::insert_into(images)
            .values(&new_image)
            .returning(Image::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn find_by_id(&self, image_id: i32) -> AppResult<Option<Image>> {
        use crate::schema::images::dsl::*;
        let mut conn = self.pool.get().await?;

        images
            .filter(id.eq(image_id))
            .select(Image::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    async fn list_all(&self) -> AppResult<Vec<Image>> {
        use crate::schema::images::dsl::*;
        let mut conn = self.pool.get().await?;

        images
            .select(Image::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn update(&self, image_id: i32, update_data: UpdateImage) -> AppResult<usize> {
        use crate::schema::images::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::update(images.filter(id.eq(image_id)))
            .set(&update_data)
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }

    async fn delete(&self, image_id: i32) -> AppResult<usize> {
        use crate::schema::images::dsl::*;
        let mut conn = self.pool.get().await?;

        diesel::delete(images.filter(id.eq(image_id)))
            .execute(&mut conn)
            .await
            .map_err(AppError::from)
    }
}
