// src/models/photo.rs
// DOCUMENTATION: Gallery photo records and their request/response shapes
// PURPOSE: Maps the `photos` table and the gallery query parameters

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// One gallery photo as stored in the `photos` table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Photo {
    /// Assigned by the database on insert
    pub id: Uuid,

    pub title: String,

    /// Calendar date shown under the image and matched by the date filter
    pub photo_date: NaiveDate,

    /// Public URL of the stored image
    pub image_url: String,

    /// Object path inside the storage bucket. `None` on rows written before
    /// the column existed.
    pub storage_path: Option<String>,

    /// Gallery category. No write path assigns it yet.
    pub category: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Photo {
    /// Object path of the backing blob
    /// DOCUMENTATION: Prefers the persisted `storage_path`; legacy rows fall
    /// back to the part of `image_url` after `/{bucket}/`
    pub fn blob_path(&self, bucket: &str) -> Option<String> {
        if let Some(path) = self.storage_path.as_deref().filter(|p| !p.is_empty()) {
            return Some(path.to_string());
        }

        let marker = format!("/{}/", bucket);
        self.image_url
            .split_once(&marker)
            .map(|(_, rest)| rest.to_string())
            .filter(|rest| !rest.is_empty())
    }

    /// Suggested file name for the lightbox download link
    pub fn download_file_name(&self) -> String {
        let title = self.title.trim();
        if title.is_empty() {
            "photo.jpg".to_string()
        } else {
            format!("{}.jpg", title)
        }
    }

    /// Convert database photo into API response DTO
    pub fn to_response(&self) -> PhotoResponse {
        PhotoResponse {
            id: self.id,
            title: self.title.clone(),
            photo_date: self.photo_date,
            image_url: self.image_url.clone(),
            category: self.category.clone(),
        }
    }
}

/// Row written by the admin "add" flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPhoto {
    pub title: String,
    pub photo_date: NaiveDate,
    pub image_url: String,
    pub storage_path: Option<String>,
}

/// Fields rewritten by the admin "edit" flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoChanges {
    pub title: String,
    pub photo_date: NaiveDate,
    pub image_url: String,
    pub storage_path: Option<String>,
}

/// Photo DTO for API responses
#[derive(Debug, Clone, Serialize)]
pub struct PhotoResponse {
    pub id: Uuid,
    pub title: String,
    pub photo_date: NaiveDate,
    pub image_url: String,
    pub category: Option<String>,
}

/// Sort orders the pages ask the store for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoOrder {
    /// Public gallery: newest photo date first
    PhotoDateDesc,
    /// Admin table: most recently added first
    CreatedAtDesc,
}

/// Gallery categories offered by the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    All,
    Festivals,
    Special,
}

impl Category {
    pub const VARIANTS: [Category; 3] = [Category::All, Category::Festivals, Category::Special];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Festivals => "festivals",
            Category::Special => "special",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::All => "Everyday Darshan",
            Category::Festivals => "Festivals",
            Category::Special => "Special Events",
        }
    }

    /// Whether a photo belongs to this category
    pub fn matches(&self, photo: &Photo) -> bool {
        match self {
            Category::All => true,
            other => photo.category.as_deref() == Some(other.as_str()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "all" => Ok(Category::All),
            "festivals" => Ok(Category::Festivals),
            "special" => Ok(Category::Special),
            other => Err(format!("unknown category '{}'", other)),
        }
    }
}

/// Raw gallery filter as it arrives in the query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryQuery {
    /// One of all, festivals, special
    pub category: Option<String>,
    /// YYYY-MM-DD; empty means unset
    pub date: Option<String>,
}

#[cfg(test)]
pub(crate) fn sample_photo(title: &str, date: &str, category: Option<&str>) -> Photo {
    let photo_date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    let path = format!("images/{}.jpg", title.to_lowercase().replace(' ', "-"));
    Photo {
        id: Uuid::new_v4(),
        title: title.to_string(),
        photo_date,
        image_url: format!(
            "https://project.supabase.co/storage/v1/object/public/gallery/{}",
            path
        ),
        storage_path: Some(path),
        category: category.map(|c| c.to_string()),
        created_at: Utc::now(),
    }
}
