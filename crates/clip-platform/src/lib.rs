//! # clip-platform
//!
//! Platform-specific implementations for Clipify.
//!
//! Adapters here touch the operating system directly: the per-user data
//! directory, the system clipboard and the host description attached to
//! outgoing clips.

pub mod app_dirs;
pub mod clipboard;
pub mod host;
pub mod notifier;

pub use app_dirs::DirsAppDirsAdapter;
pub use clipboard::ArboardClipboard;
pub use host::host_client_info;
pub use notifier::LogNotifier;
