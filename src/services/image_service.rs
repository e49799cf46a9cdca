//! Image service for business logic operations.
//!
//! Images are the leaf entity: no foreign keys to validate, so the service
//! only translates absence into `NotFound` errors.

use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{Image, NewImage, UpdateImage};
use crate::repositories::ImageStore;

/// Image service for handling image-related business logic.
///
/// Holds the store behind an `Arc`, so cloning is cheap.
#[derive(Clone)]
pub struct ImageService {
    store: Arc<dyn ImageStore>,
}

impl ImageService {
    /// Creates a new ImageService with the given store.
    pub fn new(store: Arc<dyn ImageStore>) -> Self {
        Self { store }
    }

    /// Creates a new image.
    ///
    /// # Returns
    /// The created image with its generated id.
    pub async fn create_image(&self, new_image: NewImage) -> AppResult<Image> {
        self.store.create(new_image).await
    }

    /// Gets an image by its ID, or `NotFound`.
    pub async fn get_image(&self, id: i32) -> AppResult<Image> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Image not found"))
    }

    /// Lists all images.
    pub async fn list_images(&self) -> AppResult<Vec<Image>> {
        self.store.list_all().await
    }

    /// Updates an image.
    ///
    /// A zero affected-row count means the image does not exist and maps to
    /// `NotFound`.
    pub async fn update_image(&self, id: i32, update_data: UpdateImage) -> AppResult<()> {
        let affected = self.store.update(id, update_data).await?;
        if affected == 0 {
            return Err(AppError::not_found("Image not found"));
        }
        Ok(())
    }

    /// Deletes an image, or `NotFound` if no row was removed.
    pub async fn delete_image(&self, id: i32) -> AppResult<()> {
        let affected = self.store.delete(id).await?;
        if affected == 0 {
            return Err(AppError::not_found("Image not found"));
        }
        Ok(())
    }
}
