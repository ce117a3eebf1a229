//! Clipify application layer
//!
//! Use cases that keep the local feed in step with the backend, render it,
//! and react to authoring-panel events. [`AppSession`] owns them all.

pub mod deps;
pub mod errors;
pub mod session;
pub mod usecases;

pub use deps::AppDeps;
pub use errors::SyncError;
pub use session::AppSession;
pub use usecases::{
    spawn_poller, CopyClip, EditorCommands, GetUsername, LayoutController, RefreshPolicy,
    RenderPipeline, SyncEngine, DEFAULT_POLL_INTERVAL,
};
