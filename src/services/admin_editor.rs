// src/services/admin_editor.rs
// DOCUMENTATION: Admin CRUD on gallery photos
// PURPOSE: Sequence blob and row writes, clean up orphans, keep the admin list in sync

use crate::errors::SiteError;
use crate::models::{NewPhoto, Photo, PhotoChanges, PhotoOrder};
use crate::services::upload::{upload_path, UploadFile};
use crate::services::PhotoStore;
use chrono::{NaiveDate, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Input of the add and quick-upload forms
#[derive(Debug, Clone, Default)]
pub struct AddPhotoRequest {
    pub title: String,
    pub photo_date: Option<NaiveDate>,
    pub file: Option<UploadFile>,
}

/// Input of the edit form. `file` replaces the image when present.
#[derive(Debug, Clone)]
pub struct EditPhotoRequest {
    pub title: String,
    pub photo_date: NaiveDate,
    pub file: Option<UploadFile>,
}

/// Admin photo editor
/// DOCUMENTATION: Holds the admin table's photo list. The list is rebuilt by
/// `reload()` and patched after each successful mutation. The lock is never
/// held across a remote call; concurrent edits are last-write-wins.
pub struct AdminEditor {
    store: Arc<dyn PhotoStore>,
    bucket: String,
    photos: RwLock<Vec<Photo>>,
}

impl AdminEditor {
    pub fn new(store: Arc<dyn PhotoStore>, bucket: String) -> Self {
        Self {
            store,
            bucket,
            photos: RwLock::new(Vec::new()),
        }
    }

    /// Refetch every photo, newest first
    pub async fn reload(&self) -> Result<Vec<Photo>, SiteError> {
        let photos = self.store.list_photos(PhotoOrder::CreatedAtDesc).await?;
        *self.photos.write().await = photos.clone();
        Ok(photos)
    }

    pub async fn photos(&self) -> Vec<Photo> {
        self.photos.read().await.clone()
    }

    /// Upload the file, then insert the row and prepend it to the list
    /// DOCUMENTATION: Returns Ok(None) without touching the store when the
    /// title, date or file is missing
    pub async fn add(&self, req: AddPhotoRequest) -> Result<Option<Photo>, SiteError> {
        let created = self.create_record(req).await?;
        if let Some(photo) = &created {
            self.photos.write().await.insert(0, photo.clone());
        }
        Ok(created)
    }

    /// Same as `add`, but rebuilds the whole list from the store afterwards
    /// DOCUMENTATION: The photo is stored once the insert succeeds; a failed
    /// refetch only falls back to prepending it
    pub async fn upload_and_reload(&self, req: AddPhotoRequest) -> Result<Option<Photo>, SiteError> {
        let created = self.create_record(req).await?;
        if let Some(photo) = &created {
            if let Err(e) = self.reload().await {
                log::warn!("Reload after adding photo {} failed: {}", photo.id, e);
                self.photos.write().await.insert(0, photo.clone());
            }
        }
        Ok(created)
    }

    /// Rewrite title and date, optionally replacing the image
    pub async fn edit(&self, id: Uuid, req: EditPhotoRequest) -> Result<Photo, SiteError> {
        let title = req.title.trim().to_string();
        if title.is_empty() {
            return Err(SiteError::ValidationError("Title is required".to_string()));
        }

        let existing = self.find(id).await?;

        let mut changes = PhotoChanges {
            title,
            photo_date: req.photo_date,
            image_url: existing.image_url.clone(),
            storage_path: existing.storage_path.clone(),
        };

        let mut uploaded = None;
        if let Some(file) = req.file {
            let (path, url) = self.store_file(file).await?;
            changes.image_url = url;
            changes.storage_path = Some(path.clone());
            uploaded = Some(path);
        }

        let updated = match self.store.update_photo(id, &changes).await {
            Ok(photo) => photo,
            Err(e) => {
                if let Some(path) = &uploaded {
                    self.discard_blob(path, "update failed").await;
                }
                return Err(e);
            }
        };

        if uploaded.is_some() {
            match existing.blob_path(&self.bucket) {
                Some(old_path) => self.discard_blob(&old_path, "image replaced").await,
                None => log::warn!(
                    "Photo {} had no resolvable blob path; old image left in storage",
                    id
                ),
            }
        }

        let mut photos = self.photos.write().await;
        if let Some(slot) = photos.iter_mut().find(|p| p.id == id) {
            *slot = updated.clone();
        }

        log::info!("Updated photo {} ('{}')", id, updated.title);
        Ok(updated)
    }

    /// Delete the row, then its blob
    /// DOCUMENTATION: A failed blob delete leaves a dangling object and is
    /// only logged
    pub async fn delete(&self, id: Uuid) -> Result<(), SiteError> {
        let existing = self.find(id).await?;

        self.store.delete_photo(id).await?;

        match existing.blob_path(&self.bucket) {
            Some(path) => self.discard_blob(&path, "photo deleted").await,
            None => log::warn!("Photo {} had no resolvable blob path; nothing removed", id),
        }

        self.photos.write().await.retain(|p| p.id != id);

        log::info!("Deleted photo {} ('{}')", id, existing.title);
        Ok(())
    }

    async fn create_record(&self, req: AddPhotoRequest) -> Result<Option<Photo>, SiteError> {
        let title = req.title.trim().to_string();
        let (photo_date, file) = match (title.is_empty(), req.photo_date, req.file) {
            (false, Some(date), Some(file)) => (date, file),
            _ => {
                log::debug!("Add photo declined: title, date and file are all required");
                return Ok(None);
            }
        };

        let (path, image_url) = self.store_file(file).await?;

        let new_photo = NewPhoto {
            title,
            photo_date,
            image_url,
            storage_path: Some(path.clone()),
        };

        match self.store.insert_photo(&new_photo).await {
            Ok(photo) => {
                log::info!("Added photo {} ('{}')", photo.id, photo.title);
                Ok(Some(photo))
            }
            Err(e) => {
                self.discard_blob(&path, "insert failed").await;
                Err(e)
            }
        }
    }

    /// Upload a file under a fresh path; returns (stored path, public URL)
    async fn store_file(&self, file: UploadFile) -> Result<(String, String), SiteError> {
        let path = upload_path(&file.file_name, Utc::now().timestamp_millis());
        let stored = self
            .store
            .upload_blob(&path, file.bytes, &file.content_type)
            .await?;
        let url = self.store.public_url(&stored);
        Ok((stored, url))
    }

    /// Best-effort blob removal; failures are logged, never returned
    async fn discard_blob(&self, path: &str, reason: &str) {
        if let Err(e) = self.store.delete_blobs(&[path.to_string()]).await {
            log::warn!("Could not remove blob {} ({}): {}", path, reason, e);
        }
    }

    /// Photo from the list, refetching once when it is not there
    async fn find(&self, id: Uuid) -> Result<Photo, SiteError> {
        if let Some(photo) = self.photos.read().await.iter().find(|p| p.id == id) {
            return Ok(photo.clone());
        }

        self.reload()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or_else(|| SiteError::NotFound(format!("photo {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::photo::sample_photo;
    use crate::services::memory_store::{Failures, MemoryPhotoStore, StoreCall, MEMORY_PUBLIC_BASE};
    use bytes::Bytes;
    use tokio_test::{assert_err, assert_ok};

    fn file(name: &str) -> UploadFile {
        UploadFile {
            file_name: name.to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: Bytes::from_static(b"jpeg"),
        }
    }

    fn date(raw: &str) -> NaiveDate {
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
    }

    async fn editor_with(photos: Vec<Photo>) -> (Arc<MemoryPhotoStore>, AdminEditor) {
        let store = Arc::new(MemoryPhotoStore::with_photos(photos));
        let editor = AdminEditor::new(store.clone(), "gallery".to_string());
        editor.reload().await.unwrap();
        store.clear_calls();
        (store, editor)
    }

    fn uploads(calls: &[StoreCall]) -> Vec<String> {
        calls
            .iter()
            .filter_map(|c| match c {
                StoreCall::Upload(path) => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_add_uploads_then_inserts_and_prepends() {
        let existing = sample_photo("Holi", "2025-03-14", None);
        let (store, editor) = editor_with(vec![existing.clone()]).await;

        let added = editor
            .add(AddPhotoRequest {
                title: "Diwali".to_string(),
                photo_date: Some(date("2025-11-01")),
                file: Some(file("diya lamps.jpg")),
            })
            .await
            .unwrap()
            .unwrap();

        let calls = store.calls();
        assert_eq!(calls.len(), 2);
        let uploaded = uploads(&calls);
        assert_eq!(uploaded.len(), 1);
        assert!(uploaded[0].starts_with("images/"));
        assert!(uploaded[0].ends_with("-diya-lamps.jpg"));

        match &calls[1] {
            StoreCall::Insert(row) => {
                assert_eq!(row.title, "Diwali");
                assert_eq!(row.photo_date, date("2025-11-01"));
                assert_eq!(row.image_url, format!("{}/{}", MEMORY_PUBLIC_BASE, uploaded[0]));
                assert_eq!(row.storage_path.as_deref(), Some(uploaded[0].as_str()));
            }
            other => panic!("expected insert, got {:?}", other),
        }

        let photos = editor.photos().await;
        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].id, added.id);
        assert_eq!(photos[1].id, existing.id);
    }

    #[tokio::test]
    async fn test_add_declines_without_file() {
        let (store, editor) = editor_with(Vec::new()).await;

        let result = editor
            .add(AddPhotoRequest {
                title: "Diwali".to_string(),
                photo_date: Some(date("2025-11-01")),
                file: None,
            })
            .await;

        assert!(matches!(result, Ok(None)));
        assert!(store.calls().is_empty());
        assert!(editor.photos().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_declines_with_blank_title_or_missing_date() {
        let (store, editor) = editor_with(Vec::new()).await;

        let blank = editor
            .add(AddPhotoRequest {
                title: "   ".to_string(),
                photo_date: Some(date("2025-11-01")),
                file: Some(file("a.jpg")),
            })
            .await;
        let undated = editor
            .add(AddPhotoRequest {
                title: "Diwali".to_string(),
                photo_date: None,
                file: Some(file("a.jpg")),
            })
            .await;

        assert!(matches!(blank, Ok(None)));
        assert!(matches!(undated, Ok(None)));
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_add_upload_failure_writes_no_row() {
        let (store, editor) = editor_with(Vec::new()).await;
        store.fail(Failures {
            upload: Some("Payload too large".to_string()),
            ..Failures::default()
        });

        let err = editor
            .add(AddPhotoRequest {
                title: "Diwali".to_string(),
                photo_date: Some(date("2025-11-01")),
                file: Some(file("a.jpg")),
            })
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Payload too large"));
        assert!(!store
            .calls()
            .iter()
            .any(|c| matches!(c, StoreCall::Insert(_))));
        assert!(store.rows().is_empty());
    }

    #[tokio::test]
    async fn test_add_insert_failure_removes_uploaded_blob() {
        let (store, editor) = editor_with(Vec::new()).await;
        store.fail(Failures {
            insert: Some("null value in column \"title\"".to_string()),
            ..Failures::default()
        });

        let err = editor
            .add(AddPhotoRequest {
                title: "Diwali".to_string(),
                photo_date: Some(date("2025-11-01")),
                file: Some(file("a.jpg")),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, SiteError::DatabaseError(_)));
        let calls = store.calls();
        let uploaded = uploads(&calls);
        assert_eq!(calls.last(), Some(&StoreCall::DeleteBlobs(uploaded.clone())));
        assert_eq!(store.blob_count(), 0);
        assert!(editor.photos().await.is_empty());
    }

    #[tokio::test]
    async fn test_upload_and_reload_refetches_list() {
        let (store, editor) = editor_with(Vec::new()).await;

        let added = editor
            .upload_and_reload(AddPhotoRequest {
                title: "Aarti".to_string(),
                photo_date: Some(date("2025-06-01")),
                file: Some(file("aarti.jpg")),
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(
            store.calls().last(),
            Some(&StoreCall::List(PhotoOrder::CreatedAtDesc))
        );
        assert_eq!(editor.photos().await, vec![added]);
    }

    #[tokio::test]
    async fn test_upload_and_reload_keeps_stored_photo_when_refetch_fails() {
        let existing = sample_photo("Holi", "2025-03-14", None);
        let (store, editor) = editor_with(vec![existing.clone()]).await;
        store.fail(Failures {
            list: Some("connection reset".to_string()),
            ..Failures::default()
        });

        let result = editor
            .upload_and_reload(AddPhotoRequest {
                title: "Aarti".to_string(),
                photo_date: Some(date("2025-06-01")),
                file: Some(file("aarti.jpg")),
            })
            .await;

        let added = assert_ok!(result).unwrap();
        assert_eq!(store.rows().len(), 2);
        assert_eq!(editor.photos().await, vec![added, existing]);
        assert_eq!(store.blob_count(), 2);
    }

    #[tokio::test]
    async fn test_edit_title_only_makes_one_update() {
        let photo = sample_photo("Holi", "2025-03-14", None);
        let (store, editor) = editor_with(vec![photo.clone()]).await;

        let updated = editor
            .edit(
                photo.id,
                EditPhotoRequest {
                    title: "Holi Utsav".to_string(),
                    photo_date: photo.photo_date,
                    file: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(
            store.calls(),
            vec![StoreCall::Update(
                photo.id,
                PhotoChanges {
                    title: "Holi Utsav".to_string(),
                    photo_date: photo.photo_date,
                    image_url: photo.image_url.clone(),
                    storage_path: photo.storage_path.clone(),
                }
            )]
        );
        assert_eq!(updated.image_url, photo.image_url);
        assert_eq!(editor.photos().await[0].title, "Holi Utsav");
    }

    #[tokio::test]
    async fn test_edit_with_file_replaces_blob_after_update() {
        let photo = sample_photo("Holi", "2025-03-14", None);
        let old_path = photo.storage_path.clone().unwrap();
        let (store, editor) = editor_with(vec![photo.clone()]).await;

        let updated = editor
            .edit(
                photo.id,
                EditPhotoRequest {
                    title: "Holi".to_string(),
                    photo_date: date("2025-03-15"),
                    file: Some(file("holi colours.jpg")),
                },
            )
            .await
            .unwrap();

        let calls = store.calls();
        assert_eq!(calls.len(), 3);
        assert!(matches!(calls[0], StoreCall::Upload(_)));
        assert!(matches!(calls[1], StoreCall::Update(_, _)));
        assert_eq!(calls[2], StoreCall::DeleteBlobs(vec![old_path.clone()]));

        let new_path = updated.storage_path.clone().unwrap();
        assert!(new_path.ends_with("-holi-colours.jpg"));
        assert!(store.has_blob(&new_path));
        assert!(!store.has_blob(&old_path));
        assert_eq!(editor.photos().await[0].photo_date, date("2025-03-15"));
    }

    #[tokio::test]
    async fn test_edit_update_failure_discards_new_blob() {
        let photo = sample_photo("Holi", "2025-03-14", None);
        let old_path = photo.storage_path.clone().unwrap();
        let (store, editor) = editor_with(vec![photo.clone()]).await;
        store.fail(Failures {
            update: Some("connection reset".to_string()),
            ..Failures::default()
        });

        let result = editor
            .edit(
                photo.id,
                EditPhotoRequest {
                    title: "Holi".to_string(),
                    photo_date: photo.photo_date,
                    file: Some(file("new.jpg")),
                },
            )
            .await;

        assert!(result.is_err());
        let calls = store.calls();
        let uploaded = uploads(&calls);
        assert_eq!(calls.last(), Some(&StoreCall::DeleteBlobs(uploaded)));
        assert!(store.has_blob(&old_path));
        assert_eq!(store.blob_count(), 1);
        assert_eq!(editor.photos().await, vec![photo]);
    }

    #[tokio::test]
    async fn test_edit_upload_failure_leaves_row() {
        let photo = sample_photo("Holi", "2025-03-14", None);
        let (store, editor) = editor_with(vec![photo.clone()]).await;
        store.fail(Failures {
            upload: Some("Invalid mime type".to_string()),
            ..Failures::default()
        });

        let err = editor
            .edit(
                photo.id,
                EditPhotoRequest {
                    title: "Renamed".to_string(),
                    photo_date: photo.photo_date,
                    file: Some(file("x.gif")),
                },
            )
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Invalid mime type"));
        assert_eq!(store.calls().len(), 1);
        assert_eq!(store.rows()[0].title, "Holi");
    }

    #[tokio::test]
    async fn test_edit_requires_title() {
        let photo = sample_photo("Holi", "2025-03-14", None);
        let (store, editor) = editor_with(vec![photo.clone()]).await;

        let result = editor
            .edit(
                photo.id,
                EditPhotoRequest {
                    title: " ".to_string(),
                    photo_date: photo.photo_date,
                    file: None,
                },
            )
            .await;

        assert!(matches!(result, Err(SiteError::ValidationError(_))));
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_row_then_blob() {
        let first = sample_photo("One", "2025-01-01", Some("festivals"));
        let second = sample_photo("Two", "2025-02-01", None);
        let (store, editor) = editor_with(vec![first.clone(), second.clone()]).await;

        assert_ok!(editor.delete(first.id).await);

        assert_eq!(
            store.calls(),
            vec![
                StoreCall::DeleteRow(first.id),
                StoreCall::DeleteBlobs(vec![first.blob_path("gallery").unwrap()]),
            ]
        );
        let remaining = editor.photos().await;
        assert!(remaining.iter().all(|p| p.id != first.id));
        assert_eq!(remaining.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_legacy_row_uses_url_path() {
        let mut legacy = sample_photo("Old", "2024-01-01", None);
        legacy.storage_path = None;
        legacy.image_url = format!("{}/images/99-old.jpg", MEMORY_PUBLIC_BASE);
        let (store, editor) = editor_with(vec![legacy.clone()]).await;

        editor.delete(legacy.id).await.unwrap();

        assert_eq!(
            store.calls()[1],
            StoreCall::DeleteBlobs(vec!["images/99-old.jpg".to_string()])
        );
    }

    #[tokio::test]
    async fn test_delete_blob_failure_is_not_surfaced() {
        let photo = sample_photo("One", "2025-01-01", None);
        let (store, editor) = editor_with(vec![photo.clone()]).await;
        store.fail(Failures {
            delete_blobs: Some("timeout".to_string()),
            ..Failures::default()
        });

        assert_ok!(editor.delete(photo.id).await);
        assert!(store.rows().is_empty());
        assert!(editor.photos().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_row_failure_keeps_blob() {
        let photo = sample_photo("One", "2025-01-01", None);
        let (store, editor) = editor_with(vec![photo.clone()]).await;
        store.fail(Failures {
            delete_row: Some("permission denied".to_string()),
            ..Failures::default()
        });

        assert_err!(editor.delete(photo.id).await);
        assert_eq!(store.calls(), vec![StoreCall::DeleteRow(photo.id)]);
        assert_eq!(editor.photos().await.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_photo_is_not_found() {
        let (store, editor) = editor_with(Vec::new()).await;

        let result = editor.delete(Uuid::new_v4()).await;

        assert!(matches!(result, Err(SiteError::NotFound(_))));
        assert_eq!(store.calls(), vec![StoreCall::List(PhotoOrder::CreatedAtDesc)]);
    }
}
