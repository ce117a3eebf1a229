//! Dependency bundle handed to [`crate::AppSession::new`].

use std::sync::Arc;

use clip_core::ports::{
    ClipBackendPort, ClipboardWriterPort, ClockPort, EditorSurfacePort, FeedViewPort,
    IdentityStorePort, NotifierPort,
};
use clip_core::ClientInfo;

/// Every adapter the application layer needs, already constructed.
pub struct AppDeps {
    pub backend: Arc<dyn ClipBackendPort>,
    pub identity_store: Arc<dyn IdentityStorePort>,
    pub editor: Arc<dyn EditorSurfacePort>,
    pub view: Arc<dyn FeedViewPort>,
    pub notifier: Arc<dyn NotifierPort>,
    pub clipboard: Arc<dyn ClipboardWriterPort>,
    pub clock: Arc<dyn ClockPort>,
    pub client: ClientInfo,
}
