use std::sync::Arc;

use clip_core::ports::{
    ClipBackendPort, ClockPort, EditorSurfacePort, FeedViewPort, NotifierPort, Toast,
};
use clip_core::{Clip, ClientInfo, ClipId, FeedStore, Language};
use tracing::{debug, error, info, instrument, warn};

use crate::errors::SyncError;
use crate::usecases::{GetUsername, RenderPipeline};

/// How overlapping refreshes are reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPolicy {
    /// Whichever response arrives last is applied, even if its request
    /// was issued earlier than one already applied.
    #[default]
    LastResponseWins,
    /// Responses to requests older than the newest applied one are dropped.
    DiscardStale,
}

impl RefreshPolicy {
    pub fn from_flag(discard_stale_responses: bool) -> Self {
        if discard_stale_responses {
            RefreshPolicy::DiscardStale
        } else {
            RefreshPolicy::LastResponseWins
        }
    }
}

/// Keeps the feed store in step with the backend and publishes new clips.
pub struct SyncEngine {
    backend: Arc<dyn ClipBackendPort>,
    feed: Arc<FeedStore>,
    editor: Arc<dyn EditorSurfacePort>,
    view: Arc<dyn FeedViewPort>,
    notifier: Arc<dyn NotifierPort>,
    clock: Arc<dyn ClockPort>,
    identity: Arc<GetUsername>,
    renderer: RenderPipeline,
    client: ClientInfo,
    policy: RefreshPolicy,
}

impl SyncEngine {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        backend: Arc<dyn ClipBackendPort>,
        feed: Arc<FeedStore>,
        editor: Arc<dyn EditorSurfacePort>,
        view: Arc<dyn FeedViewPort>,
        notifier: Arc<dyn NotifierPort>,
        clock: Arc<dyn ClockPort>,
        identity: Arc<GetUsername>,
        client: ClientInfo,
        policy: RefreshPolicy,
    ) -> Self {
        Self {
            backend,
            feed,
            editor,
            view,
            notifier,
            clock,
            identity,
            renderer: RenderPipeline::new(),
            client,
            policy,
        }
    }

    pub fn feed(&self) -> &Arc<FeedStore> {
        &self.feed
    }

    pub fn policy(&self) -> RefreshPolicy {
        self.policy
    }

    /// Pull the authoritative list and replace the feed with it.
    ///
    /// On failure the feed keeps its previous contents. Returns the number
    /// of clips received.
    #[instrument(skip(self), fields(policy = ?self.policy))]
    pub async fn refresh(&self) -> Result<usize, SyncError> {
        let ticket = self.feed.issue_ticket();

        let clips = match self.backend.list_clips().await {
            Ok(clips) => clips,
            Err(err) => {
                warn!(error = %err, "failed to fetch clips, keeping current feed");
                return Err(err.into());
            }
        };

        let count = clips.len();
        let applied = match self.policy {
            RefreshPolicy::LastResponseWins => {
                self.feed.replace(clips);
                true
            }
            RefreshPolicy::DiscardStale => self.feed.replace_if_newer(ticket, clips),
        };

        if applied {
            debug!(count, ticket = ticket.value(), "feed replaced");
            self.render().await;
        }
        Ok(count)
    }

    /// Publish `text` as a new clip.
    ///
    /// Blank text is rejected locally without a network call. On success
    /// the authoring buffer is cleared and the feed is re-pulled; on
    /// failure the buffer is left untouched.
    #[instrument(skip(self, text, language), fields(language = %language, len = text.len()))]
    pub async fn submit(&self, text: &str, language: &Language) -> Result<Clip, SyncError> {
        if text.trim().is_empty() {
            self.notifier.notify(Toast::info(SyncError::EmptyClip.to_string()));
            return Err(SyncError::EmptyClip);
        }

        let clip = Clip::new(
            ClipId::from_timestamp_ms(self.clock.now_ms()),
            text,
            language.clone(),
            self.identity.execute(),
        )
        .with_client(&self.client);

        if let Err(err) = self.backend.add_clip(&clip).await {
            error!(error = %err, "failed to submit clip");
            self.notifier
                .notify(Toast::error(format!("Failed to submit clip: {err}")));
            return Err(err.into());
        }

        info!(id = %clip.id, "clip shared");
        self.notifier.notify(Toast::success("Code shared successfully!"));
        self.editor.set_text("");

        if let Err(err) = self.refresh().await {
            debug!(error = %err, "post-submit refresh failed, next poll will reconcile");
        }
        Ok(clip)
    }

    /// Delete every clip on the backend.
    ///
    /// On success the feed is emptied, the empty state is shown and the
    /// authoring buffer is cleared. On failure nothing local changes.
    #[instrument(skip(self))]
    pub async fn flush_all(&self) -> Result<(), SyncError> {
        if let Err(err) = self.backend.flush().await {
            error!(error = %err, "failed to flush clips");
            self.notifier.notify(Toast::error(err.status_text()));
            return Err(err.into());
        }

        self.feed.clear();
        if let Err(err) = self.view.render_empty().await {
            warn!(error = %err, "failed to render empty state");
        }
        self.editor.set_text("");
        info!("all clips flushed");
        self.notifier.notify(Toast::success("Clipify cleared!"));
        Ok(())
    }

    /// Whether the backend considers this client privileged.
    ///
    /// Any error counts as unprivileged.
    pub async fn validate_user(&self) -> bool {
        match self.backend.validate_user().await {
            Ok(privileged) => privileged,
            Err(err) => {
                debug!(error = %err, "privilege check failed, treating as unprivileged");
                false
            }
        }
    }

    /// Re-render the whole feed from the current snapshot.
    pub async fn render(&self) {
        let clips = self.feed.snapshot();
        let result = if clips.is_empty() {
            self.view.render_empty().await
        } else {
            let me = self.identity.execute();
            let blocks = self.renderer.render(&clips, &me);
            self.view.render_feed(&blocks).await
        };
        if let Err(err) = result {
            warn!(error = %err, "failed to render feed");
        }
    }
}
