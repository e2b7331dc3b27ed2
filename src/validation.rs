//! Input validation for the three guest-facing write operations and for
//! listing windows.

use thiserror::Error;

use crate::storage::models::{AddVideoInput, CreateGuestbookMessageInput, UploadPhotoInput};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
    #[error("{field} exceeds maximum length of {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("{field} must be a valid URL")]
    InvalidUrl { field: &'static str },
    #[error("{field} must be greater than 0")]
    NotPositive { field: &'static str },
}

pub const MAX_FILENAME_LEN: usize = 255;
pub const MAX_UPLOADER_LEN: usize = 100;
pub const MAX_TITLE_LEN: usize = 200;
pub const MAX_AUTHOR_LEN: usize = 100;
pub const MAX_MESSAGE_LEN: usize = 1000;

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for UploadPhotoInput {
    fn validate(&self) -> Result<(), ValidationError> {
        bounded("filename", &self.filename, MAX_FILENAME_LEN)?;
        bounded("original_name", &self.original_name, MAX_FILENAME_LEN)?;
        non_empty("file_path", &self.file_path)?;
        bounded("uploaded_by", &self.uploaded_by, MAX_UPLOADER_LEN)
    }
}

impl Validate for AddVideoInput {
    fn validate(&self) -> Result<(), ValidationError> {
        bounded("title", &self.title, MAX_TITLE_LEN)?;
        absolute_url("video_url", &self.video_url)?;
        if let Some(thumbnail_url) = &self.thumbnail_url {
            absolute_url("thumbnail_url", thumbnail_url)?;
        }
        bounded("uploaded_by", &self.uploaded_by, MAX_UPLOADER_LEN)
    }
}

impl Validate for CreateGuestbookMessageInput {
    fn validate(&self) -> Result<(), ValidationError> {
        bounded("author_name", &self.author_name, MAX_AUTHOR_LEN)?;
        bounded("message", &self.message, MAX_MESSAGE_LEN)
    }
}

/// A present limit must be positive; offsets are unsigned already.
pub fn validate_limit(limit: Option<u32>) -> Result<(), ValidationError> {
    match limit {
        Some(0) => Err(ValidationError::NotPositive { field: "limit" }),
        _ => Ok(()),
    }
}

fn non_empty(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(())
}

fn bounded(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    non_empty(field, value)?;
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

fn absolute_url(field: &'static str, value: &str) -> Result<(), ValidationError> {
    url::Url::parse(value)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidUrl { field })
}
