// src/services/storage_client.rs
// DOCUMENTATION: Hosted object storage client
// PURPOSE: Upload, delete and resolve public URLs for gallery image blobs

use crate::errors::SiteError;
use bytes::Bytes;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::json;

/// Storage API client
/// DOCUMENTATION: Speaks the Supabase Storage REST shape for one bucket
pub struct StorageClient {
    /// HTTP client for making requests
    client: Client,
    /// Project base URL, without trailing slash
    base_url: String,
    /// Service key sent as bearer token and `apikey`
    service_key: String,
    /// Bucket holding gallery images
    bucket: String,
}

/// Error body returned by the storage API
#[derive(Debug, Deserialize)]
struct StorageErrorBody {
    message: Option<String>,
    error: Option<String>,
}

/// Body returned by a successful upload
#[derive(Debug, Deserialize)]
struct UploadResponse {
    /// "{bucket}/{path}"
    #[serde(rename = "Key")]
    key: Option<String>,
}

impl StorageClient {
    pub fn new(base_url: String, service_key: String, bucket: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            service_key,
            bucket,
        }
    }

    /// Publicly resolvable URL of an object in the bucket
    pub fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }

    /// Upload bytes to `path`
    /// DOCUMENTATION: Does not overwrite existing objects. Returns the stored
    /// object path (relative to the bucket).
    pub async fn upload(
        &self,
        path: &str,
        bytes: Bytes,
        content_type: &str,
    ) -> Result<String, SiteError> {
        let url = format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, path);

        log::debug!("Uploading {} bytes to {}/{}", bytes.len(), self.bucket, path);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .header("content-type", content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await
            .map_err(|e| {
                log::error!("Storage upload request failed: {}", e);
                SiteError::StorageError(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = error_message(status, &body);
            log::error!("Storage upload of {} failed {}: {}", path, status, message);
            return Err(SiteError::StorageError(message));
        }

        let body = response.text().await.unwrap_or_default();
        Ok(self.stored_path(path, &body))
    }

    /// Delete objects from the bucket
    /// DOCUMENTATION: Missing objects are ignored by the API
    pub async fn remove(&self, paths: &[String]) -> Result<(), SiteError> {
        if paths.is_empty() {
            return Ok(());
        }

        let url = format!("{}/storage/v1/object/{}", self.base_url, self.bucket);

        let response = self
            .client
            .delete(&url)
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .json(&json!({ "prefixes": paths }))
            .send()
            .await
            .map_err(|e| {
                log::error!("Storage delete request failed: {}", e);
                SiteError::StorageError(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = error_message(status, &body);
            log::error!("Storage delete of {:?} failed {}: {}", paths, status, message);
            return Err(SiteError::StorageError(message));
        }

        log::info!("Removed {} object(s) from bucket {}", paths.len(), self.bucket);
        Ok(())
    }

    /// Path inside the bucket reported by an upload response, or the
    /// requested path when the body has no usable key
    fn stored_path(&self, requested: &str, body: &str) -> String {
        let prefix = format!("{}/", self.bucket);
        serde_json::from_str::<UploadResponse>(body)
            .ok()
            .and_then(|r| r.key)
            .map(|key| key.strip_prefix(&prefix).map(str::to_string).unwrap_or(key))
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| requested.to_string())
    }
}

/// Human readable message from a storage error response
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<StorageErrorBody>(body) {
        if let Some(message) = parsed.message.or(parsed.error) {
            return message;
        }
    }

    if body.trim().is_empty() {
        format!("Storage API returned {}", status)
    } else {
        body.trim().to_string()
    }
}
