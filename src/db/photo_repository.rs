// src/db/photo_repository.rs
// DOCUMENTATION: Photo database operations
// PURPOSE: CRUD against the hosted `photos` table

use crate::errors::SiteError;
use crate::models::{NewPhoto, Photo, PhotoChanges, PhotoOrder};
use sqlx::PgPool;
use uuid::Uuid;

const PHOTO_COLUMNS: &str =
    "id, title, photo_date, image_url, storage_path, category, created_at";

pub struct PhotoRepository;

impl PhotoRepository {
    /// List every photo
    /// DOCUMENTATION: No pagination, callers hold the full set in memory
    pub async fn list_photos(pool: &PgPool, order: PhotoOrder) -> Result<Vec<Photo>, SiteError> {
        let order_by = match order {
            PhotoOrder::PhotoDateDesc => "photo_date DESC",
            PhotoOrder::CreatedAtDesc => "created_at DESC",
        };
        let sql = format!("SELECT {} FROM photos ORDER BY {}", PHOTO_COLUMNS, order_by);

        let photos = sqlx::query_as::<_, Photo>(&sql)
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to list photos: {}", e);
                SiteError::DatabaseError(e.to_string())
            })?;

        Ok(photos)
    }

    /// Insert a new photo row and return it with its store-assigned id
    pub async fn create_photo(pool: &PgPool, req: &NewPhoto) -> Result<Photo, SiteError> {
        let sql = format!(
            r#"
            INSERT INTO photos (title, photo_date, image_url, storage_path)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            PHOTO_COLUMNS
        );

        let photo = sqlx::query_as::<_, Photo>(&sql)
            .bind(&req.title)
            .bind(req.photo_date)
            .bind(&req.image_url)
            .bind(&req.storage_path)
            .fetch_one(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to create photo: {}", e);
                SiteError::DatabaseError(e.to_string())
            })?;

        Ok(photo)
    }

    /// Rewrite title, date and image location of one photo
    pub async fn update_photo(
        pool: &PgPool,
        id: Uuid,
        changes: &PhotoChanges,
    ) -> Result<Photo, SiteError> {
        let sql = format!(
            r#"
            UPDATE photos
            SET title = $2, photo_date = $3, image_url = $4, storage_path = $5
            WHERE id = $1
            RETURNING {}
            "#,
            PHOTO_COLUMNS
        );

        let photo = sqlx::query_as::<_, Photo>(&sql)
            .bind(id)
            .bind(&changes.title)
            .bind(changes.photo_date)
            .bind(&changes.image_url)
            .bind(&changes.storage_path)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to update photo {}: {}", id, e);
                SiteError::DatabaseError(e.to_string())
            })?
            .ok_or_else(|| SiteError::NotFound(format!("photo {}", id)))?;

        Ok(photo)
    }

    /// Delete one photo row
    /// DOCUMENTATION: Delete-if-exists; a missing row is not an error
    pub async fn delete_photo(pool: &PgPool, id: Uuid) -> Result<u64, SiteError> {
        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Failed to delete photo {}: {}", id, e);
                SiteError::DatabaseError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }
}
