use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use chrono::Utc;
use std::sync::Arc;

use super::photos::PhotoResponse;
use crate::api::response::{ApiError, JSend};
use crate::media::MediaStoreError;
use crate::storage::models::UploadPhotoInput;
use crate::validation::Validate;
use crate::AppState;

/// Public URL prefix under which stored photo files are served.
pub const MEDIA_ROUTE_PREFIX: &str = "/media";

/// Accepted image types and the extension their keys get. The first entry for
/// an extension is the Content-Type it is served with.
const IMAGE_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/jpg", "jpg"),
    ("image/pjpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
    ("image/avif", "avif"),
    ("image/heic", "heic"),
    ("image/heif", "heif"),
    ("image/bmp", "bmp"),
    ("image/tiff", "tiff"),
];

/// Accept an image file plus uploader name, store the bytes, and record the
/// photo pointing at its `/media/` URL.
pub async fn upload_photo_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<JSend<PhotoResponse>>, ApiError> {
    let mut file_data: Option<Bytes> = None;
    let mut file_name: Option<String> = None;
    let mut file_content_type: Option<String> = None;
    let mut uploaded_by: Option<String> = None;
    let mut original_name: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Invalid multipart data", e, &state))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                file_name = field.file_name().map(|s| s.to_string());
                file_content_type = field.content_type().map(|s| s.to_string());

                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error("Failed to read file", e, &state))?;

                if data.len() as u64 > state.config.max_upload_size {
                    return Err(too_large(&state));
                }
                file_data = Some(data);
            }
            "uploaded_by" => {
                uploaded_by = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| multipart_error("Invalid uploaded_by", e, &state))?,
                );
            }
            "original_name" => {
                original_name = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| multipart_error("Invalid original_name", e, &state))?,
                );
            }
            _ => {}
        }
    }

    let file_data = file_data.ok_or_else(|| ApiError::bad_request("file field is required"))?;
    if file_data.is_empty() {
        return Err(ApiError::bad_request("file must not be empty"));
    }
    let uploaded_by =
        uploaded_by.ok_or_else(|| ApiError::bad_request("uploaded_by field is required"))?;

    let mime_type = file_content_type
        .map(|ct| essence(&ct))
        .filter(|ct| ct != "application/octet-stream")
        .or_else(|| {
            file_name
                .as_deref()
                .and_then(|n| mime_guess::from_path(n).first())
                .map(|m| m.to_string())
        })
        .unwrap_or_else(|| "application/octet-stream".to_string());

    if !mime_type.starts_with("image/") {
        return Err(ApiError::bad_request(format!(
            "only image uploads are accepted, got {mime_type}"
        )));
    }

    // The key extension, and so the served Content-Type, follows the checked
    // MIME type and never the client filename.
    let key = media_key(&mime_type).ok_or_else(|| {
        ApiError::bad_request(format!("unsupported image type {mime_type}"))
    })?;
    let input = UploadPhotoInput {
        filename: key.clone(),
        original_name: original_name
            .or(file_name)
            .unwrap_or_else(|| key.clone()),
        file_path: format!("{MEDIA_ROUTE_PREFIX}/{key}"),
        uploaded_by,
    };
    input.validate()?;

    // Phase 1: bytes to the media store
    state
        .media
        .put(&key, file_data)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to store photo: {e}")))?;

    // Phase 2: the photo row
    let photo = match state.db.insert_photo(&input, Utc::now()) {
        Ok(photo) => photo,
        Err(e) => {
            if let Err(cleanup) = state.media.delete(&key).await {
                tracing::warn!(key = %key, error = %cleanup, "Failed to remove orphaned photo file");
            }
            return Err(e.into());
        }
    };

    tracing::debug!(photo_id = photo.id, key = %key, "Uploaded photo file");
    Ok(JSend::success(PhotoResponse::from(&photo)))
}

/// Serve a stored photo file.
/// Route: GET /media/:key
pub async fn serve_media(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Response, ApiError> {
    let data = state.media.get(&key).await.map_err(|e| match e {
        MediaStoreError::NotFound(_) | MediaStoreError::InvalidKey(_) => {
            ApiError::not_found("Media not found")
        }
        MediaStoreError::Io(_) => ApiError::internal(format!("Failed to read media: {e}")),
    })?;

    let mime_type = std::path::Path::new(&key)
        .extension()
        .and_then(|e| e.to_str())
        .and_then(image_mime)
        .unwrap_or("application/octet-stream");
    let mut response = (StatusCode::OK, data).into_response();
    let headers = response.headers_mut();

    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(mime_type));
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );

    // Keys are never rewritten
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=31536000, immutable"),
    );

    Ok(response)
}

fn too_large(state: &AppState) -> ApiError {
    ApiError::payload_too_large(format!(
        "File exceeds maximum upload size of {} bytes",
        state.config.max_upload_size
    ))
}

/// Body-limit hits surface as multipart errors while streaming. Keep their 413.
fn multipart_error(context: &str, e: MultipartError, state: &AppState) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        too_large(state)
    } else {
        ApiError::bad_request(format!("{context}: {e}"))
    }
}

/// `image/PNG; charset=x` -> `image/png`
fn essence(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

fn image_extension(mime_type: &str) -> Option<&'static str> {
    IMAGE_TYPES
        .iter()
        .find(|(mime, _)| *mime == mime_type)
        .map(|(_, ext)| *ext)
}

fn image_mime(extension: &str) -> Option<&'static str> {
    IMAGE_TYPES
        .iter()
        .find(|(_, ext)| *ext == extension)
        .map(|(mime, _)| *mime)
}

/// Generated flat key `<uuid>.<ext>`. `None` for image types we don't serve.
fn media_key(mime_type: &str) -> Option<String> {
    image_extension(mime_type).map(|ext| format!("{}.{ext}", uuid::Uuid::new_v4()))
}
