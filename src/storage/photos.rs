use chrono::{DateTime, Utc};

use super::db::{Database, DatabaseError};
use super::models::{Listing, Page, Photo, UploadPhotoInput};
use super::tables::PHOTO_COLLECTION;

impl Database {
    // ========================================================================
    // Photo operations
    // ========================================================================

    /// Store a photo record and return it with its assigned id
    pub fn insert_photo(
        &self,
        input: &UploadPhotoInput,
        uploaded_at: DateTime<Utc>,
    ) -> Result<Photo, DatabaseError> {
        self.insert_row(PHOTO_COLLECTION, uploaded_at, |id| Photo {
            id,
            filename: input.filename.clone(),
            original_name: input.original_name.clone(),
            file_path: input.file_path.clone(),
            uploaded_by: input.uploaded_by.clone(),
            uploaded_at,
        })
    }

    pub fn get_photo(&self, id: u64) -> Result<Option<Photo>, DatabaseError> {
        self.get_row(PHOTO_COLLECTION, id)
    }

    /// List photos, most recently uploaded first
    pub fn list_photos(&self, page: Page) -> Result<Listing<Photo>, DatabaseError> {
        self.list_rows(PHOTO_COLLECTION, page)
    }
}
