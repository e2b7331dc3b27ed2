use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shared photo stored in redb
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: u64,
    pub filename: String,
    pub original_name: String,
    pub file_path: String,
    pub uploaded_by: String,
    pub uploaded_at: DateTime<Utc>,
}

/// A shared video link stored in redb
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: u64,
    pub title: String,
    pub video_url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub uploaded_by: String,
    pub uploaded_at: DateTime<Utc>,
}

/// A guestbook entry stored in redb
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestbookMessage {
    pub id: u64,
    pub author_name: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadPhotoInput {
    pub filename: String,
    pub original_name: String,
    pub file_path: String,
    pub uploaded_by: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddVideoInput {
    pub title: String,
    pub video_url: String,
    /// Missing and explicit `null` both mean "no thumbnail".
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub uploaded_by: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateGuestbookMessageInput {
    pub author_name: String,
    pub message: String,
}

/// Window over a newest-first listing. `limit: None` means unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub limit: Option<u32>,
    pub offset: u32,
}

impl Page {
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Self {
        Self {
            limit,
            offset: offset.unwrap_or(0),
        }
    }

    pub fn all() -> Self {
        Self::default()
    }
}

/// One page of rows plus the table's total row count
#[derive(Debug, Clone)]
pub struct Listing<T> {
    pub items: Vec<T>,
    pub total: u64,
}

/// Statistics from a purge operation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurgeStats {
    pub photos: u64,
    pub videos: u64,
    pub guestbook_messages: u64,
}
