//! Session context owned by the composition root.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clip_core::ports::{EditorSurfacePort, NotifierPort, Toast};
use clip_core::{Clip, FeedStore, Language, PanelLayout};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::deps::AppDeps;
use crate::errors::SyncError;
use crate::usecases::{
    spawn_poller, CopyClip, EditorCommands, GetUsername, LayoutController, RefreshPolicy,
    SyncEngine,
};

/// Single-instance state of one running client.
///
/// Holds the shared feed, the authoring buffer and the use cases built on
/// them, so no component reaches for ambient globals.
pub struct AppSession {
    identity: Arc<GetUsername>,
    feed: Arc<FeedStore>,
    editor: Arc<dyn EditorSurfacePort>,
    notifier: Arc<dyn NotifierPort>,
    sync: Arc<SyncEngine>,
    copy: CopyClip,
    editor_commands: EditorCommands,
    layout: LayoutController,
    privileged: AtomicBool,
}

impl AppSession {
    pub fn new(deps: AppDeps, policy: RefreshPolicy) -> Self {
        let feed = Arc::new(FeedStore::new());
        let identity = Arc::new(GetUsername::new(deps.identity_store));
        let sync = Arc::new(SyncEngine::new(
            deps.backend,
            feed.clone(),
            deps.editor.clone(),
            deps.view,
            deps.notifier.clone(),
            deps.clock,
            identity.clone(),
            deps.client,
            policy,
        ));

        Self {
            copy: CopyClip::new(feed.clone(), deps.clipboard, deps.notifier.clone()),
            editor_commands: EditorCommands::new(deps.editor.clone(), deps.notifier.clone()),
            layout: LayoutController::new(deps.editor.clone()),
            identity,
            feed,
            editor: deps.editor,
            notifier: deps.notifier,
            sync,
            privileged: AtomicBool::new(false),
        }
    }

    /// Startup sequence: resolve the identity, check privilege, pull the feed.
    ///
    /// A failed initial pull is logged; the poller will retry.
    pub async fn start(&self) {
        let username = self.identity.execute();
        let privileged = self.sync.validate_user().await;
        self.privileged.store(privileged, Ordering::SeqCst);
        info!(%username, privileged, "session started");

        if let Err(err) = self.sync.refresh().await {
            warn!(error = %err, "initial refresh failed");
            self.sync.render().await;
        }
    }

    pub fn spawn_poller(&self, period: Duration, shutdown: CancellationToken) -> JoinHandle<()> {
        spawn_poller(self.sync.clone(), period, shutdown)
    }

    /// User-requested refresh. Unlike timer refreshes, a failure is toasted.
    pub async fn refresh(&self) -> Result<usize, SyncError> {
        self.sync.refresh().await.inspect_err(|err| {
            self.notifier
                .notify(Toast::error(format!("Failed to refresh clips: {err}")));
        })
    }

    /// Publish whatever is in the authoring buffer.
    pub async fn send(&self) -> Result<Clip, SyncError> {
        let text = self.editor.text();
        let language = self.editor.language();
        self.sync.submit(&text, &language).await
    }

    /// Flush every clip. Refused locally unless the backend granted privilege.
    pub async fn flush_all(&self) -> Result<(), SyncError> {
        if !self.is_privileged() {
            self.notifier
                .notify(Toast::error(SyncError::Unprivileged.to_string()));
            return Err(SyncError::Unprivileged);
        }
        self.sync.flush_all().await
    }

    pub fn copy(&self, index: usize) -> Result<(), SyncError> {
        self.copy.execute(index)
    }

    pub fn clear_editor(&self) {
        self.editor_commands.clear();
        self.layout.on_buffer_changed();
    }

    pub fn change_language(&self, tag: &str) -> Language {
        self.editor_commands.change_language(tag)
    }

    /// Replace the authoring text, as typing would.
    pub fn edit(&self, text: &str) -> PanelLayout {
        self.editor.set_text(text);
        self.layout.on_buffer_changed()
    }

    pub fn username(&self) -> String {
        self.identity.execute()
    }

    pub fn is_privileged(&self) -> bool {
        self.privileged.load(Ordering::SeqCst)
    }

    pub fn feed(&self) -> &Arc<FeedStore> {
        &self.feed
    }

    pub fn editor(&self) -> &Arc<dyn EditorSurfacePort> {
        &self.editor
    }

    pub fn layout(&self) -> &LayoutController {
        &self.layout
    }

    pub fn sync(&self) -> &Arc<SyncEngine> {
        &self.sync
    }
}
