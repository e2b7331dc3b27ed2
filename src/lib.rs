//! celebration-wall - photo, video and guestbook backend for a birthday celebration
//!
//! Guests share three kinds of content, each kept in its own table:
//! - Photos, either recorded by URL or uploaded as image files
//! - Video links, with a derived YouTube/Vimeo embed URL
//! - Guestbook messages
//!
//! Rows live in a redb embedded database and are listed newest first with
//! optional limit/offset windows.

pub mod api;
pub mod config;
pub mod embed;
pub mod media;
pub mod storage;
#[cfg(test)]
pub mod testutil;
pub mod validation;

use std::sync::Arc;

use config::Config;
use storage::Database;

/// Shared application state
pub struct AppState {
    pub config: Config,
    pub db: Database,
    pub media: Arc<dyn media::MediaStore>,
}
