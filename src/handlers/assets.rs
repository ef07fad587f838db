// src/handlers/assets.rs
// DOCUMENTATION: Static file handlers
// PURPOSE: Serve the embedded stylesheet and the site's local images

use crate::config::Config;
use crate::errors::SiteError;
use crate::views::SITE_CSS;
use actix_web::{web, HttpResponse, Responder};
use std::path::{Component, Path, PathBuf};

fn mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

/// Resolve `tail` under `root`, refusing anything that could climb out of it
fn resolve(root: &str, tail: &str) -> Option<PathBuf> {
    let relative = Path::new(tail);
    if tail.is_empty() || !relative.components().all(|c| matches!(c, Component::Normal(_))) {
        return None;
    }
    Some(Path::new(root).join(relative))
}

/// GET /static/site.css
pub async fn site_css() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(SITE_CSS)
}

/// GET /assets/{tail}
pub async fn serve_asset(
    config: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, SiteError> {
    let tail = path.into_inner();
    let file = resolve(&config.assets_dir, &tail).ok_or_else(|| {
        log::warn!("Rejected asset path: {}", tail);
        SiteError::NotFound(format!("asset {}", tail))
    })?;

    let content = tokio::fs::read(&file).await.map_err(|e| {
        log::debug!("Asset {} unavailable: {}", file.display(), e);
        SiteError::NotFound(format!("asset {}", tail))
    })?;

    Ok(HttpResponse::Ok()
        .content_type(mime_type(&file))
        .insert_header(("Cache-Control", "public, max-age=86400"))
        .body(content))
}

/// Configuration for static routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/static/site.css", web::get().to(site_css))
        .route("/assets/{tail:.*}", web::get().to(serve_asset));
}
