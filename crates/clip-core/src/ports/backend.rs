use async_trait::async_trait;
use thiserror::Error;

use crate::clip::Clip;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The backend answered with a non-success status.
    #[error("{status} {reason}")]
    Status { status: u16, reason: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl BackendError {
    /// Status text as the user should see it.
    pub fn status_text(&self) -> String {
        match self {
            BackendError::Status { reason, .. } if !reason.is_empty() => reason.clone(),
            other => other.to_string(),
        }
    }
}

/// The four calls the shared feed backend exposes.
#[async_trait]
pub trait ClipBackendPort: Send + Sync {
    /// `GET /clips`: the authoritative list, in server order.
    async fn list_clips(&self) -> Result<Vec<Clip>, BackendError>;

    /// `POST /add_clip`: publish one clip. The response body is ignored.
    async fn add_clip(&self, clip: &Clip) -> Result<(), BackendError>;

    /// `DELETE /flush`: remove every clip.
    async fn flush(&self) -> Result<(), BackendError>;

    /// `GET /validate_user`: `true` when this client may flush.
    async fn validate_user(&self) -> Result<bool, BackendError>;
}
