mod admin;
mod guestbook;
mod media;
mod photos;
mod videos;

use serde::Deserialize;

use crate::api::response::ApiError;
use crate::storage::models::Page;
use crate::validation::validate_limit;

pub use admin::{admin_purge, health};
pub use guestbook::{create_guestbook_message, get_guestbook_messages};
pub use media::{serve_media, upload_photo_file};
pub use photos::{get_photos, upload_photo};
pub use videos::{add_video, get_videos};

/// Optional `?limit=&offset=` window shared by every listing route.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub offset: Option<u32>,
}

impl ListParams {
    fn into_page(self) -> Result<Page, ApiError> {
        validate_limit(self.limit)?;
        Ok(Page::new(self.limit, self.offset))
    }
}
