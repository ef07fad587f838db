// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure a page, the admin editor or the JSON API can hit.
/// Remote store messages are carried verbatim so they can be shown to the user.
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Forbidden access")]
    Forbidden,

    #[error("Upload exceeds {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Internal server error")]
    InternalError,
}

impl SiteError {
    /// Stable machine-readable code used in JSON error bodies
    pub fn code(&self) -> &'static str {
        match self {
            SiteError::NotFound(_) => "NOT_FOUND",
            SiteError::DatabaseError(_) => "DATABASE_ERROR",
            SiteError::StorageError(_) => "STORAGE_ERROR",
            SiteError::InvalidInput(_) => "INVALID_INPUT",
            SiteError::ValidationError(_) => "VALIDATION_ERROR",
            SiteError::Unauthorized => "UNAUTHORIZED",
            SiteError::Forbidden => "FORBIDDEN",
            SiteError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            SiteError::InternalError => "INTERNAL_ERROR",
        }
    }
}

/// Convert SiteError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for SiteError {
    fn error_response(&self) -> HttpResponse {
        let body = json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            SiteError::NotFound(_) => StatusCode::NOT_FOUND,
            SiteError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SiteError::StorageError(_) => StatusCode::BAD_GATEWAY,
            SiteError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            SiteError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SiteError::Unauthorized => StatusCode::UNAUTHORIZED,
            SiteError::Forbidden => StatusCode::FORBIDDEN,
            SiteError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            SiteError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
