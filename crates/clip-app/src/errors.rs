use clip_core::ports::{BackendError, ClipboardError};
use thiserror::Error;

/// Failures surfaced by the sync, copy and flush use cases.
///
/// None of them are fatal; every one leaves the feed and the authoring
/// buffer at their last known-good values.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Please enter some code first!")]
    EmptyClip,

    #[error("not privileged to flush clips")]
    Unprivileged,

    #[error("no clip at position {0}")]
    ClipNotFound(usize),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
