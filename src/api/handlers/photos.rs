use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use super::ListParams;
use crate::api::response::{ApiError, AppJson, AppQuery, JSend, JSendPaginated, Pagination};
use crate::storage::models::{Photo, UploadPhotoInput};
use crate::validation::Validate;
use crate::AppState;

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct PhotoResponse {
    pub file_path: String,
    pub filename: String,
    pub id: u64,
    pub original_name: String,
    pub uploaded_at: String,
    pub uploaded_by: String,
}

impl From<&Photo> for PhotoResponse {
    fn from(photo: &Photo) -> Self {
        PhotoResponse {
            file_path: photo.file_path.clone(),
            filename: photo.filename.clone(),
            id: photo.id,
            original_name: photo.original_name.clone(),
            uploaded_at: photo.uploaded_at.to_rfc3339(),
            uploaded_by: photo.uploaded_by.clone(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Record a photo whose file already lives at `file_path`.
pub async fn upload_photo(
    State(state): State<Arc<AppState>>,
    AppJson(input): AppJson<UploadPhotoInput>,
) -> Result<Json<JSend<PhotoResponse>>, ApiError> {
    input.validate()?;

    let photo = state.db.insert_photo(&input, Utc::now())?;

    tracing::debug!(photo_id = photo.id, uploaded_by = %photo.uploaded_by, "Recorded photo");
    Ok(JSend::success(PhotoResponse::from(&photo)))
}

pub async fn get_photos(
    State(state): State<Arc<AppState>>,
    AppQuery(params): AppQuery<ListParams>,
) -> Result<Json<JSendPaginated<PhotoResponse>>, ApiError> {
    let page = params.into_page()?;
    let listing = state.db.list_photos(page)?;

    Ok(JSendPaginated::success(
        listing.items.iter().map(PhotoResponse::from).collect(),
        Pagination::new(page, listing.total),
    ))
}
