use std::sync::Arc;

use clip_core::ports::{ClipboardWriterPort, NotifierPort, Toast};
use clip_core::FeedStore;
use tracing::{error, instrument};

use crate::errors::SyncError;

/// Copy the raw text of the clip at a feed position to the system clipboard.
///
/// The text is looked up in the feed store by index, so rendered markup
/// never has to carry it.
pub struct CopyClip {
    feed: Arc<FeedStore>,
    clipboard: Arc<dyn ClipboardWriterPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl CopyClip {
    pub fn new(
        feed: Arc<FeedStore>,
        clipboard: Arc<dyn ClipboardWriterPort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            feed,
            clipboard,
            notifier,
        }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, index: usize) -> Result<(), SyncError> {
        let clip = self.feed.get(index).ok_or(SyncError::ClipNotFound(index))?;

        if let Err(err) = self.clipboard.write_text(&clip.text) {
            error!(error = %err, "failed to write clipboard");
            self.notifier.notify(Toast::error(err.to_string()));
            return Err(err.into());
        }

        self.notifier.notify(Toast::success("Code copied to clipboard!"));
        Ok(())
    }
}
