//! Use cases
//!
//! ```text
//! timer / user action
//!         ↓
//! SyncEngine::refresh ──→ FeedStore ──→ RenderPipeline ──→ FeedViewPort
//!         ↑
//! SyncEngine::submit / flush_all
//! ```

pub mod copy_clip;
pub mod editor_commands;
pub mod get_username;
pub mod layout;
pub mod render_feed;
pub mod sync;

pub use copy_clip::CopyClip;
pub use editor_commands::EditorCommands;
pub use get_username::GetUsername;
pub use layout::LayoutController;
pub use render_feed::RenderPipeline;
pub use sync::{spawn_poller, RefreshPolicy, SyncEngine, DEFAULT_POLL_INTERVAL};
