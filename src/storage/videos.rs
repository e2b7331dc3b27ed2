use chrono::{DateTime, Utc};

use super::db::{Database, DatabaseError};
use super::models::{AddVideoInput, Listing, Page, Video};
use super::tables::VIDEO_COLLECTION;

impl Database {
    // ========================================================================
    // Video operations
    // ========================================================================

    pub fn insert_video(
        &self,
        input: &AddVideoInput,
        uploaded_at: DateTime<Utc>,
    ) -> Result<Video, DatabaseError> {
        self.insert_row(VIDEO_COLLECTION, uploaded_at, |id| Video {
            id,
            title: input.title.clone(),
            video_url: input.video_url.clone(),
            thumbnail_url: input.thumbnail_url.clone(),
            uploaded_by: input.uploaded_by.clone(),
            uploaded_at,
        })
    }

    pub fn get_video(&self, id: u64) -> Result<Option<Video>, DatabaseError> {
        self.get_row(VIDEO_COLLECTION, id)
    }

    pub fn list_videos(&self, page: Page) -> Result<Listing<Video>, DatabaseError> {
        self.list_rows(VIDEO_COLLECTION, page)
    }
}
