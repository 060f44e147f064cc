//! Media storage errors

use blog_core::DomainError;

/// Error type for media storage operations
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Upload is empty")]
    Empty,

    #[error("Upload of {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Upload task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<MediaError> for DomainError {
    fn from(err: MediaError) -> Self {
        DomainError::MediaUpload(err.to_string())
    }
}
