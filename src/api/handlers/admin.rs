use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use crate::api::response::{ApiError, JSend};
use crate::storage::models::PurgeStats;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}

pub async fn health() -> Json<JSend<HealthResponse>> {
    JSend::success(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Clear every table. Only routed when test mode is on.
pub async fn admin_purge(
    State(state): State<Arc<AppState>>,
) -> Result<Json<JSend<PurgeStats>>, ApiError> {
    let stats = state.db.purge_all()?;

    tracing::warn!(
        photos = stats.photos,
        videos = stats.videos,
        guestbook_messages = stats.guestbook_messages,
        "Purged all data"
    );

    Ok(JSend::success(stats))
}
