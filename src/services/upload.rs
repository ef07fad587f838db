// src/services/upload.rs
// DOCUMENTATION: Admin form uploads
// PURPOSE: Parse multipart photo forms and derive storage paths

use crate::errors::SiteError;
use bytes::Bytes;
use futures_util::stream;

/// File chosen in an admin form
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

/// Raw fields of the add / edit / quick-upload forms
#[derive(Debug, Clone, Default)]
pub struct PhotoForm {
    pub title: Option<String>,
    pub photo_date: Option<String>,
    pub file: Option<UploadFile>,
}

const FILE_FIELD: &str = "file";
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Parse a buffered multipart body
/// DOCUMENTATION: Unknown fields are skipped; a file part without bytes
/// counts as "no file selected"
pub async fn parse_photo_form(content_type: &str, body: Bytes) -> Result<PhotoForm, SiteError> {
    let boundary = multer::parse_boundary(content_type)
        .map_err(|e| SiteError::InvalidInput(format!("Expected multipart form: {}", e)))?;
    let body_stream = stream::once(async move { Ok::<Bytes, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(body_stream, boundary);

    let mut form = PhotoForm::default();
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => form.title = Some(field.text().await.map_err(multipart_error)?),
            "photo_date" => form.photo_date = Some(field.text().await.map_err(multipart_error)?),
            FILE_FIELD => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field
                    .content_type()
                    .map(|mime| mime.to_string())
                    .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string());
                let bytes = field.bytes().await.map_err(multipart_error)?;
                if bytes.is_empty() || file_name.is_empty() {
                    continue;
                }
                form.file = Some(UploadFile {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            other => log::debug!("Ignoring multipart field '{}'", other),
        }
    }

    Ok(form)
}

fn multipart_error(e: multer::Error) -> SiteError {
    log::warn!("Malformed multipart body: {}", e);
    SiteError::InvalidInput(format!("Malformed form data: {}", e))
}

/// Replace every run of whitespace with a single '-'
pub fn sanitize_file_name(file_name: &str) -> String {
    let mut sanitized = String::with_capacity(file_name.len());
    let mut in_whitespace = false;
    for c in file_name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                sanitized.push('-');
            }
            in_whitespace = true;
        } else {
            sanitized.push(c);
            in_whitespace = false;
        }
    }
    sanitized
}

/// Object path for a new upload: `images/{unix_millis}-{sanitized name}`
pub fn upload_path(file_name: &str, unix_millis: i64) -> String {
    format!("images/{}-{}", unix_millis, sanitize_file_name(file_name))
}
