//! # clip-core
//!
//! Core domain models and business rules for Clipify.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! the shared clip model, the client-side feed snapshot, link preview
//! detection, markup escaping and the authoring panel state machine.

pub mod app_dirs;
pub mod clip;
pub mod config;
pub mod device;
pub mod feed;
pub mod identity;
pub mod ids;
pub mod layout;
pub mod markup;
pub mod ports;
pub mod preview;

// Re-export commonly used types at the crate root
pub use clip::{Clip, Language};
pub use config::AppConfig;
pub use device::{ClientInfo, DeviceFamily};
pub use feed::FeedStore;
pub use ids::ClipId;
pub use layout::{PanelEvent, PanelLayout, PanelState};
pub use markup::{MessageBlock, ReadOnlyView};
