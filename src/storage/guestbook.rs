use chrono::{DateTime, Utc};

use super::db::{Database, DatabaseError};
use super::models::{CreateGuestbookMessageInput, GuestbookMessage, Listing, Page};
use super::tables::GUESTBOOK_COLLECTION;

impl Database {
    // ========================================================================
    // Guestbook operations
    // ========================================================================

    pub fn insert_guestbook_message(
        &self,
        input: &CreateGuestbookMessageInput,
        created_at: DateTime<Utc>,
    ) -> Result<GuestbookMessage, DatabaseError> {
        self.insert_row(GUESTBOOK_COLLECTION, created_at, |id| GuestbookMessage {
            id,
            author_name: input.author_name.clone(),
            message: input.message.clone(),
            created_at,
        })
    }

    pub fn get_guestbook_message(
        &self,
        id: u64,
    ) -> Result<Option<GuestbookMessage>, DatabaseError> {
        self.get_row(GUESTBOOK_COLLECTION, id)
    }

    /// List guestbook messages, newest first
    pub fn list_guestbook_messages(
        &self,
        page: Page,
    ) -> Result<Listing<GuestbookMessage>, DatabaseError> {
        self.list_rows(GUESTBOOK_COLLECTION, page)
    }
}
