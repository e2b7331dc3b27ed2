mod local;

pub use local::LocalMediaStore;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid media key: {0}")]
    InvalidKey(String),
    #[error("Media not found: {0}")]
    NotFound(String),
}

/// Blob storage for uploaded photos.
/// Keys are flat generated names; the photos table records which keys exist.
#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn put(&self, key: &str, data: Bytes) -> Result<(), MediaStoreError>;
    async fn get(&self, key: &str) -> Result<Bytes, MediaStoreError>;
    async fn delete(&self, key: &str) -> Result<(), MediaStoreError>;
    async fn exists(&self, key: &str) -> Result<bool, MediaStoreError>;
}

/// Reject anything that could escape the store's root directory.
pub fn check_key(key: &str) -> Result<(), MediaStoreError> {
    if key.is_empty() || key.starts_with('.') || key.contains(['/', '\\']) {
        return Err(MediaStoreError::InvalidKey(key.to_string()));
    }
    Ok(())
}
