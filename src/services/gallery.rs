// src/services/gallery.rs
// DOCUMENTATION: Gallery filtering and the lightbox navigator
// PURPOSE: Narrow the full photo list for display and step through the result

use crate::errors::SiteError;
use crate::models::{Category, GalleryQuery, Photo};
use chrono::NaiveDate;
use uuid::Uuid;

/// Photos matching `category` and, when set, exactly `date`
/// DOCUMENTATION: Keeps input order. Recomputed from scratch on every call.
pub fn filter_photos(photos: &[Photo], category: Category, date: Option<NaiveDate>) -> Vec<Photo> {
    photos
        .iter()
        .filter(|photo| category.matches(photo))
        .filter(|photo| date.map_or(true, |d| photo.photo_date == d))
        .cloned()
        .collect()
}

/// Selected category and date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryFilter {
    pub category: Category,
    pub date: Option<NaiveDate>,
}

impl GalleryFilter {
    /// Parse the query string form
    /// DOCUMENTATION: Missing or empty values mean "all" / no date
    pub fn from_query(query: &GalleryQuery) -> Result<Self, SiteError> {
        let category = match query.category.as_deref().map(str::trim) {
            None | Some("") => Category::All,
            Some(raw) => raw.parse().map_err(SiteError::InvalidInput)?,
        };

        let date = match query.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                SiteError::InvalidInput(format!("date must be YYYY-MM-DD, got '{}'", raw))
            })?),
        };

        Ok(Self { category, date })
    }

    pub fn apply(&self, photos: &[Photo]) -> Vec<Photo> {
        filter_photos(photos, self.category, self.date)
    }

    /// True when anything other than the defaults is selected
    pub fn is_active(&self) -> bool {
        self.category != Category::All || self.date.is_some()
    }

    /// Query string that reproduces this filter, without leading '?'
    pub fn query_string(&self) -> String {
        let mut parts = Vec::new();
        if self.category != Category::All {
            parts.push(format!("category={}", self.category));
        }
        if let Some(date) = self.date {
            parts.push(format!("date={}", date.format("%Y-%m-%d")));
        }
        parts.join("&")
    }

    /// Same filter with another category
    pub fn with_category(&self, category: Category) -> Self {
        Self { category, ..*self }
    }
}

/// Full-screen viewer over a filtered photo list
#[derive(Debug, Clone)]
pub struct Lightbox {
    photos: Vec<Photo>,
    index: usize,
    current: Option<Photo>,
}

impl Lightbox {
    pub fn new(photos: Vec<Photo>) -> Self {
        Self {
            photos,
            index: 0,
            current: None,
        }
    }

    /// Show the photo with `id`
    /// DOCUMENTATION: When `id` is not in the list the lightbox stays closed
    /// and the index goes back to 0. Returns whether a photo is now shown.
    pub fn open(&mut self, id: Uuid) -> bool {
        match self.photos.iter().position(|p| p.id == id) {
            Some(index) => {
                self.index = index;
                self.current = Some(self.photos[index].clone());
                true
            }
            None => {
                self.index = 0;
                self.current = None;
                false
            }
        }
    }

    pub fn next(&mut self) {
        if let Some(index) = self.step(1) {
            self.show(index);
        }
    }

    pub fn prev(&mut self) {
        if let Some(index) = self.step(-1) {
            self.show(index);
        }
    }

    /// Hide the viewer; the index is kept
    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Photo> {
        self.current.as_ref()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Id `next()` would land on
    pub fn peek_next_id(&self) -> Option<Uuid> {
        self.step(1).map(|i| self.photos[i].id)
    }

    /// Id `prev()` would land on
    pub fn peek_prev_id(&self) -> Option<Uuid> {
        self.step(-1).map(|i| self.photos[i].id)
    }

    fn step(&self, delta: isize) -> Option<usize> {
        let len = self.photos.len();
        if len == 0 {
            return None;
        }
        let current = self.index.min(len - 1) as isize;
        Some((current + delta).rem_euclid(len as isize) as usize)
    }

    fn show(&mut self, index: usize) {
        self.index = index;
        self.current = Some(self.photos[index].clone());
    }
}
