//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the adapters that
//! reach the backend, the local storage, the clipboard and the view. The
//! core stays independent of all of them.

pub mod app_dirs;
pub mod backend;
mod clipboard;
mod clock;
pub mod editor;
pub mod errors;
pub mod feed_view;
pub mod identity_store;
pub mod notifier;

pub use app_dirs::AppDirsPort;
pub use backend::{BackendError, ClipBackendPort};
pub use clipboard::ClipboardWriterPort;
pub use clock::*;
pub use editor::EditorSurfacePort;
pub use errors::{AppDirsError, ClipboardError};
pub use feed_view::FeedViewPort;
pub use identity_store::{IdentityStoreError, IdentityStorePort};
pub use notifier::{NotifierPort, Toast, ToastKind};
