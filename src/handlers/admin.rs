// src/handlers/admin.rs
// DOCUMENTATION: Admin handlers for gallery photo CRUD
// PURPOSE: Expose the admin editor through HTML forms

use crate::config::Config;
use crate::errors::SiteError;
use crate::handlers::pages::html;
use crate::services::upload::{parse_photo_form, PhotoForm};
use crate::services::{AddPhotoRequest, AdminEditor, EditPhotoRequest};
use crate::views;
use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse, ResponseError};
use bytes::{Bytes, BytesMut};
use chrono::NaiveDate;
use futures_util::StreamExt;
use serde::Deserialize;
use uuid::Uuid;

/// The `?key=` query parameter every admin route carries
#[derive(Debug, Deserialize)]
pub struct AdminQuery {
    pub key: Option<String>,
}

/// Helper function to check the admin key
/// DOCUMENTATION: Compares `?key=` with the configured ADMIN_KEY.
/// This only hides the page; it is not an access-control boundary.
fn verify_admin_key(query: &AdminQuery, config: &Config) -> Result<String, SiteError> {
    let key = query.key.as_deref().ok_or_else(|| {
        log::warn!("Admin request without key");
        SiteError::Unauthorized
    })?;

    if key != config.admin_key {
        log::warn!("Admin request with invalid key");
        return Err(SiteError::Forbidden);
    }

    Ok(key.to_string())
}

/// Buffer the request body, refusing anything over `limit` bytes
async fn read_body(mut payload: web::Payload, limit: usize) -> Result<Bytes, SiteError> {
    let mut body = BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| SiteError::InvalidInput(format!("Upload interrupted: {}", e)))?;
        if body.len() + chunk.len() > limit {
            return Err(SiteError::PayloadTooLarge(limit));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}

async fn read_form(
    req: &HttpRequest,
    payload: web::Payload,
    config: &Config,
) -> Result<PhotoForm, SiteError> {
    let content_type = req
        .headers()
        .get("content-type")
        .and_then(|h| h.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = read_body(payload, config.max_upload_bytes).await?;
    parse_photo_form(&content_type, body).await
}

/// Empty means "not given"
fn parse_form_date(raw: Option<&str>) -> Result<Option<NaiveDate>, SiteError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| SiteError::InvalidInput(format!("Invalid date '{}'", value))),
    }
}

fn add_request(form: PhotoForm) -> Result<AddPhotoRequest, SiteError> {
    Ok(AddPhotoRequest {
        photo_date: parse_form_date(form.photo_date.as_deref())?,
        title: form.title.unwrap_or_default(),
        file: form.file,
    })
}

fn edit_request(form: PhotoForm) -> Result<EditPhotoRequest, SiteError> {
    let photo_date = parse_form_date(form.photo_date.as_deref())?
        .ok_or_else(|| SiteError::ValidationError("Date is required".to_string()))?;
    Ok(EditPhotoRequest {
        title: form.title.unwrap_or_default(),
        photo_date,
        file: form.file,
    })
}

/// Admin page from the editor's current list, with the failure (if any)
/// shown in a banner
async fn render(editor: &AdminEditor, key: &str, outcome: Result<(), SiteError>) -> HttpResponse {
    let photos = editor.photos().await;
    match outcome {
        Ok(()) => html(StatusCode::OK, views::admin::admin(key, &photos, None)),
        Err(e) => {
            log::error!("Admin action failed: {}", e);
            html(
                e.status_code(),
                views::admin::admin(key, &photos, Some(&e.to_string())),
            )
        }
    }
}

/// GET /admin
/// Rebuilds the editor's list from the store
pub async fn admin_page(
    editor: web::Data<AdminEditor>,
    config: web::Data<Config>,
    query: web::Query<AdminQuery>,
) -> Result<HttpResponse, SiteError> {
    let key = verify_admin_key(&query, &config)?;
    let outcome = editor.reload().await.map(|_| ());
    Ok(render(&editor, &key, outcome).await)
}

/// POST /admin/photos
pub async fn add_photo(
    editor: web::Data<AdminEditor>,
    config: web::Data<Config>,
    query: web::Query<AdminQuery>,
    req: HttpRequest,
    payload: web::Payload,
) -> Result<HttpResponse, SiteError> {
    let key = verify_admin_key(&query, &config)?;

    let outcome = async {
        let request = add_request(read_form(&req, payload, &config).await?)?;
        editor.add(request).await.map(|_| ())
    }
    .await;

    Ok(render(&editor, &key, outcome).await)
}

/// POST /admin/upload
/// Quick upload: refetches the whole list afterwards
pub async fn quick_upload(
    editor: web::Data<AdminEditor>,
    config: web::Data<Config>,
    query: web::Query<AdminQuery>,
    req: HttpRequest,
    payload: web::Payload,
) -> Result<HttpResponse, SiteError> {
    let key = verify_admin_key(&query, &config)?;

    let outcome = async {
        let request = add_request(read_form(&req, payload, &config).await?)?;
        editor.upload_and_reload(request).await.map(|_| ())
    }
    .await;

    Ok(render(&editor, &key, outcome).await)
}

/// POST /admin/photos/{id}
pub async fn edit_photo(
    editor: web::Data<AdminEditor>,
    config: web::Data<Config>,
    query: web::Query<AdminQuery>,
    path: web::Path<Uuid>,
    req: HttpRequest,
    payload: web::Payload,
) -> Result<HttpResponse, SiteError> {
    let key = verify_admin_key(&query, &config)?;
    let id = path.into_inner();

    let outcome = async {
        let request = edit_request(read_form(&req, payload, &config).await?)?;
        editor.edit(id, request).await.map(|_| ())
    }
    .await;

    Ok(render(&editor, &key, outcome).await)
}

/// POST /admin/photos/{id}/delete
pub async fn delete_photo(
    editor: web::Data<AdminEditor>,
    config: web::Data<Config>,
    query: web::Query<AdminQuery>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, SiteError> {
    let key = verify_admin_key(&query, &config)?;
    let outcome = editor.delete(path.into_inner()).await;
    Ok(render(&editor, &key, outcome).await)
}

/// Configuration for admin routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin", web::get().to(admin_page)).service(
        web::scope("/admin")
            .route("/upload", web::post().to(quick_upload))
            .route("/photos", web::post().to(add_photo))
            .route("/photos/{id}", web::post().to(edit_photo))
            .route("/photos/{id}/delete", web::post().to(delete_photo)),
    );
}
