// src/handlers/gallery.rs
// DOCUMENTATION: Public gallery handlers
// PURPOSE: Fetch the full photo set, filter it, and render the grid, the
// lightbox, or their JSON equivalents

use crate::errors::SiteError;
use crate::handlers::pages::html;
use crate::models::{GalleryQuery, Photo, PhotoOrder};
use crate::services::{GalleryFilter, Lightbox, PhotoStore};
use crate::views;
use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

/// Full photo set, newest photo date first
async fn fetch_photos(store: &dyn PhotoStore) -> Result<Vec<Photo>, SiteError> {
    store.list_photos(PhotoOrder::PhotoDateDesc).await
}

/// Open the lightbox on `id` within the filtered list
fn open_lightbox(filtered: Vec<Photo>, id: Uuid) -> Result<Lightbox, SiteError> {
    let mut lightbox = Lightbox::new(filtered);
    if !lightbox.open(id) {
        return Err(SiteError::NotFound(format!("photo {} in this gallery view", id)));
    }
    Ok(lightbox)
}

/// GET /gallery
pub async fn gallery_page(
    store: web::Data<Arc<dyn PhotoStore>>,
    query: web::Query<GalleryQuery>,
) -> Result<impl Responder, SiteError> {
    let filter = GalleryFilter::from_query(&query)?;
    let photos = fetch_photos(store.get_ref().as_ref()).await?;
    let visible = filter.apply(&photos);

    log::debug!(
        "Gallery {:?}: {} of {} photos visible",
        filter,
        visible.len(),
        photos.len()
    );

    Ok(html(StatusCode::OK, views::gallery::gallery(&filter, &visible)))
}

/// GET /gallery/photos/{id}
pub async fn lightbox_page(
    store: web::Data<Arc<dyn PhotoStore>>,
    path: web::Path<Uuid>,
    query: web::Query<GalleryQuery>,
) -> Result<impl Responder, SiteError> {
    let filter = GalleryFilter::from_query(&query)?;
    let photos = fetch_photos(store.get_ref().as_ref()).await?;
    let lightbox = open_lightbox(filter.apply(&photos), path.into_inner())?;

    let body = views::gallery::lightbox(&filter, &lightbox).ok_or(SiteError::InternalError)?;
    Ok(html(StatusCode::OK, body))
}

/// GET /api/photos
pub async fn list_photos(
    store: web::Data<Arc<dyn PhotoStore>>,
    query: web::Query<GalleryQuery>,
) -> Result<impl Responder, SiteError> {
    let filter = GalleryFilter::from_query(&query)?;
    let photos = fetch_photos(store.get_ref().as_ref()).await?;
    let visible = filter.apply(&photos);

    Ok(HttpResponse::Ok().json(json!({
        "data": visible.iter().map(|p| p.to_response()).collect::<Vec<_>>(),
        "total": visible.len(),
    })))
}

/// GET /api/photos/{id}/lightbox
pub async fn lightbox_state(
    store: web::Data<Arc<dyn PhotoStore>>,
    path: web::Path<Uuid>,
    query: web::Query<GalleryQuery>,
) -> Result<impl Responder, SiteError> {
    let filter = GalleryFilter::from_query(&query)?;
    let photos = fetch_photos(store.get_ref().as_ref()).await?;
    let lightbox = open_lightbox(filter.apply(&photos), path.into_inner())?;

    Ok(HttpResponse::Ok().json(json!({
        "photo": lightbox.current().map(|p| p.to_response()),
        "index": lightbox.index(),
        "total": lightbox.len(),
        "prev_id": lightbox.peek_prev_id(),
        "next_id": lightbox.peek_next_id(),
    })))
}

/// Configuration for gallery routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/gallery", web::get().to(gallery_page))
        .route("/gallery/photos/{id}", web::get().to(lightbox_page))
        .service(
            web::scope("/api/photos")
                .route("", web::get().to(list_photos))
                .route("/{id}/lightbox", web::get().to(lightbox_state)),
        );
}
