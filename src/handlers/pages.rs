// src/handlers/pages.rs
// DOCUMENTATION: Informational page handlers
// PURPOSE: Home, about, aarti and the contact form

use crate::models::ContactForm;
use crate::views::pages::{self, ContactNotice};
use actix_web::{http::StatusCode, web, HttpResponse, Responder};

pub(crate) fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

pub async fn home() -> impl Responder {
    html(StatusCode::OK, pages::home())
}

pub async fn about() -> impl Responder {
    html(StatusCode::OK, pages::about())
}

pub async fn aarti() -> impl Responder {
    html(StatusCode::OK, pages::aarti())
}

/// GET /contact
pub async fn contact_page() -> impl Responder {
    html(
        StatusCode::OK,
        pages::contact(&ContactForm::default(), &ContactNotice::None),
    )
}

/// POST /contact
/// Messages are logged, not stored
pub async fn submit_contact(form: web::Form<ContactForm>) -> impl Responder {
    let form = form.into_inner();
    let errors = form.field_errors();

    if !errors.is_empty() {
        log::debug!("Contact form rejected: {:?}", errors.keys().collect::<Vec<_>>());
        return html(
            StatusCode::BAD_REQUEST,
            pages::contact(&form, &ContactNotice::Invalid(errors)),
        );
    }

    log::info!(
        "Contact message from {} <{}> ({}): {}",
        form.name,
        form.email,
        form.phone,
        form.message
    );

    html(
        StatusCode::OK,
        pages::contact(&ContactForm::default(), &ContactNotice::Sent),
    )
}

/// Configuration for page routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/about", web::get().to(about))
        .route("/aarti", web::get().to(aarti))
        .route("/contact", web::get().to(contact_page))
        .route("/contact", web::post().to(submit_contact));
}
