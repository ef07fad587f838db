// src/services/memory_store.rs
// DOCUMENTATION: In-memory PhotoStore for tests
// PURPOSE: Records every call and can be told to fail individual operations

use crate::errors::SiteError;
use crate::models::{NewPhoto, Photo, PhotoChanges, PhotoOrder};
use crate::services::PhotoStore;
use async_trait::async_trait;
use bytes::Bytes;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

pub const MEMORY_PUBLIC_BASE: &str = "https://project.supabase.co/storage/v1/object/public/gallery";

#[derive(Debug, Clone, PartialEq)]
pub enum StoreCall {
    List(PhotoOrder),
    Insert(NewPhoto),
    Update(Uuid, PhotoChanges),
    DeleteRow(Uuid),
    Upload(String),
    DeleteBlobs(Vec<String>),
}

#[derive(Debug, Default, Clone)]
pub struct Failures {
    pub list: Option<String>,
    pub upload: Option<String>,
    pub insert: Option<String>,
    pub update: Option<String>,
    pub delete_row: Option<String>,
    pub delete_blobs: Option<String>,
}

#[derive(Default)]
struct State {
    rows: Vec<Photo>,
    blobs: HashMap<String, Bytes>,
    calls: Vec<StoreCall>,
    failures: Failures,
}

#[derive(Default)]
pub struct MemoryPhotoStore {
    state: Mutex<State>,
}

impl MemoryPhotoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with rows; each row's blob is marked as present
    pub fn with_photos(photos: Vec<Photo>) -> Self {
        let store = Self::new();
        {
            let mut state = store.state.lock().unwrap();
            for photo in &photos {
                if let Some(path) = photo.blob_path("gallery") {
                    state.blobs.insert(path, Bytes::from_static(b"seed"));
                }
            }
            state.rows = photos;
        }
        store
    }

    pub fn fail(&self, failures: Failures) {
        self.state.lock().unwrap().failures = failures;
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    pub fn rows(&self) -> Vec<Photo> {
        self.state.lock().unwrap().rows.clone()
    }

    pub fn has_blob(&self, path: &str) -> bool {
        self.state.lock().unwrap().blobs.contains_key(path)
    }

    pub fn blob_count(&self) -> usize {
        self.state.lock().unwrap().blobs.len()
    }
}

#[async_trait]
impl PhotoStore for MemoryPhotoStore {
    async fn list_photos(&self, order: PhotoOrder) -> Result<Vec<Photo>, SiteError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(StoreCall::List(order));
        if let Some(message) = state.failures.list.clone() {
            return Err(SiteError::DatabaseError(message));
        }
        let mut rows = state.rows.clone();
        match order {
            PhotoOrder::PhotoDateDesc => rows.sort_by(|a, b| b.photo_date.cmp(&a.photo_date)),
            PhotoOrder::CreatedAtDesc => rows.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }
        Ok(rows)
    }

    async fn insert_photo(&self, photo: &NewPhoto) -> Result<Photo, SiteError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(StoreCall::Insert(photo.clone()));
        if let Some(message) = state.failures.insert.clone() {
            return Err(SiteError::DatabaseError(message));
        }

        let row = Photo {
            id: Uuid::new_v4(),
            title: photo.title.clone(),
            photo_date: photo.photo_date,
            image_url: photo.image_url.clone(),
            storage_path: photo.storage_path.clone(),
            category: None,
            created_at: Utc::now(),
        };
        state.rows.push(row.clone());
        Ok(row)
    }

    async fn update_photo(&self, id: Uuid, changes: &PhotoChanges) -> Result<Photo, SiteError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(StoreCall::Update(id, changes.clone()));
        if let Some(message) = state.failures.update.clone() {
            return Err(SiteError::DatabaseError(message));
        }

        let row = state
            .rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| SiteError::NotFound(format!("photo {}", id)))?;
        row.title = changes.title.clone();
        row.photo_date = changes.photo_date;
        row.image_url = changes.image_url.clone();
        row.storage_path = changes.storage_path.clone();
        Ok(row.clone())
    }

    async fn delete_photo(&self, id: Uuid) -> Result<(), SiteError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(StoreCall::DeleteRow(id));
        if let Some(message) = state.failures.delete_row.clone() {
            return Err(SiteError::DatabaseError(message));
        }
        state.rows.retain(|p| p.id != id);
        Ok(())
    }

    async fn upload_blob(
        &self,
        path: &str,
        bytes: Bytes,
        _content_type: &str,
    ) -> Result<String, SiteError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(StoreCall::Upload(path.to_string()));
        if let Some(message) = state.failures.upload.clone() {
            return Err(SiteError::StorageError(message));
        }
        if state.blobs.contains_key(path) {
            return Err(SiteError::StorageError("The resource already exists".to_string()));
        }
        state.blobs.insert(path.to_string(), bytes);
        Ok(path.to_string())
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}", MEMORY_PUBLIC_BASE, path)
    }

    async fn delete_blobs(&self, paths: &[String]) -> Result<(), SiteError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(StoreCall::DeleteBlobs(paths.to_vec()));
        if let Some(message) = state.failures.delete_blobs.clone() {
            return Err(SiteError::StorageError(message));
        }
        for path in paths {
            state.blobs.remove(path);
        }
        Ok(())
    }
}
