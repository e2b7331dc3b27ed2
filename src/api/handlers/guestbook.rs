use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

use super::ListParams;
use crate::api::response::{ApiError, AppJson, AppQuery, JSend, JSendPaginated, Pagination};
use crate::storage::models::{CreateGuestbookMessageInput, GuestbookMessage};
use crate::validation::Validate;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct GuestbookMessageResponse {
    pub author_name: String,
    pub created_at: String,
    pub id: u64,
    pub message: String,
}

impl From<&GuestbookMessage> for GuestbookMessageResponse {
    fn from(entry: &GuestbookMessage) -> Self {
        GuestbookMessageResponse {
            author_name: entry.author_name.clone(),
            created_at: entry.created_at.to_rfc3339(),
            id: entry.id,
            message: entry.message.clone(),
        }
    }
}

pub async fn create_guestbook_message(
    State(state): State<Arc<AppState>>,
    AppJson(input): AppJson<CreateGuestbookMessageInput>,
) -> Result<Json<JSend<GuestbookMessageResponse>>, ApiError> {
    input.validate()?;

    let entry = state.db.insert_guestbook_message(&input, Utc::now())?;

    tracing::debug!(message_id = entry.id, author = %entry.author_name, "Signed guestbook");
    Ok(JSend::success(GuestbookMessageResponse::from(&entry)))
}

pub async fn get_guestbook_messages(
    State(state): State<Arc<AppState>>,
    AppQuery(params): AppQuery<ListParams>,
) -> Result<Json<JSendPaginated<GuestbookMessageResponse>>, ApiError> {
    let page = params.into_page()?;
    let listing = state.db.list_guestbook_messages(page)?;

    Ok(JSendPaginated::success(
        listing
            .items
            .iter()
            .map(GuestbookMessageResponse::from)
            .collect(),
        Pagination::new(page, listing.total),
    ))
}
