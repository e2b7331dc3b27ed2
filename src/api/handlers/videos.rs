use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use super::ListParams;
use crate::api::response::{ApiError, AppJson, AppQuery, JSend, JSendPaginated, Pagination};
use crate::embed::embed_url;
use crate::storage::models::{AddVideoInput, Video};
use crate::validation::Validate;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct VideoResponse {
    /// Player URL for YouTube and Vimeo links, null otherwise
    pub embed_url: Option<String>,
    pub id: u64,
    pub thumbnail_url: Option<String>,
    pub title: String,
    pub uploaded_at: String,
    pub uploaded_by: String,
    pub video_url: String,
}

impl From<&Video> for VideoResponse {
    fn from(video: &Video) -> Self {
        VideoResponse {
            embed_url: embed_url(&video.video_url),
            id: video.id,
            thumbnail_url: video.thumbnail_url.clone(),
            title: video.title.clone(),
            uploaded_at: video.uploaded_at.to_rfc3339(),
            uploaded_by: video.uploaded_by.clone(),
            video_url: video.video_url.clone(),
        }
    }
}

pub async fn add_video(
    State(state): State<Arc<AppState>>,
    AppJson(input): AppJson<AddVideoInput>,
) -> Result<Json<JSend<VideoResponse>>, ApiError> {
    input.validate()?;

    let video = state.db.insert_video(&input, Utc::now())?;

    tracing::debug!(video_id = video.id, video_url = %video.video_url, "Added video");
    Ok(JSend::success(VideoResponse::from(&video)))
}

pub async fn get_videos(
    State(state): State<Arc<AppState>>,
    AppQuery(params): AppQuery<ListParams>,
) -> Result<Json<JSendPaginated<VideoResponse>>, ApiError> {
    let page = params.into_page()?;
    let listing = state.db.list_videos(page)?;

    Ok(JSendPaginated::success(
        listing.items.iter().map(VideoResponse::from).collect(),
        Pagination::new(page, listing.total),
    ))
}
