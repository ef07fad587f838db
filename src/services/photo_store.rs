// src/services/photo_store.rs
// DOCUMENTATION: Repository interface over the two remote stores
// PURPOSE: Pages and the admin editor receive a PhotoStore instead of reaching
// the database pool and storage client directly

use crate::db::PhotoRepository;
use crate::errors::SiteError;
use crate::models::{NewPhoto, Photo, PhotoChanges, PhotoOrder};
use crate::services::StorageClient;
use async_trait::async_trait;
use bytes::Bytes;
use sqlx::PgPool;
use uuid::Uuid;

/// Capability set of the hosted backend: photo rows plus image blobs.
/// No operation spans both stores.
#[async_trait]
pub trait PhotoStore: Send + Sync {
    async fn list_photos(&self, order: PhotoOrder) -> Result<Vec<Photo>, SiteError>;

    async fn insert_photo(&self, photo: &NewPhoto) -> Result<Photo, SiteError>;

    async fn update_photo(&self, id: Uuid, changes: &PhotoChanges) -> Result<Photo, SiteError>;

    /// Delete-if-exists
    async fn delete_photo(&self, id: Uuid) -> Result<(), SiteError>;

    /// Returns the stored object path
    async fn upload_blob(
        &self,
        path: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<String, SiteError>;

    fn public_url(&self, path: &str) -> String;

    async fn delete_blobs(&self, paths: &[String]) -> Result<(), SiteError>;
}

/// Production store: Postgres table through sqlx, blobs through the storage API
pub struct RemotePhotoStore {
    pool: PgPool,
    storage: StorageClient,
}

impl RemotePhotoStore {
    pub fn new(pool: PgPool, storage: StorageClient) -> Self {
        Self { pool, storage }
    }
}

#[async_trait]
impl PhotoStore for RemotePhotoStore {
    async fn list_photos(&self, order: PhotoOrder) -> Result<Vec<Photo>, SiteError> {
        PhotoRepository::list_photos(&self.pool, order).await
    }

    async fn insert_photo(&self, photo: &NewPhoto) -> Result<Photo, SiteError> {
        PhotoRepository::create_photo(&self.pool, photo).await
    }

    async fn update_photo(&self, id: Uuid, changes: &PhotoChanges) -> Result<Photo, SiteError> {
        PhotoRepository::update_photo(&self.pool, id, changes).await
    }

    async fn delete_photo(&self, id: Uuid) -> Result<(), SiteError> {
        let removed = PhotoRepository::delete_photo(&self.pool, id).await?;
        if removed == 0 {
            log::debug!("Photo {} was already deleted", id);
        }
        Ok(())
    }

    async fn upload_blob(
        &self,
        path: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<String, SiteError> {
        self.storage.upload(path, bytes, content_type).await
    }

    fn public_url(&self, path: &str) -> String {
        self.storage.public_url(path)
    }

    async fn delete_blobs(&self, paths: &[String]) -> Result<(), SiteError> {
        self.storage.remove(paths).await
    }
}
