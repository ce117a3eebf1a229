use clip_core::ports::{ClipboardError, ClipboardWriterPort};
use tracing::debug;

/// System clipboard backed by `arboard`.
///
/// A context is opened per write; the handle is not shared between threads.
#[derive(Debug, Default)]
pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardWriterPort for ArboardClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))?;
        debug!(len = text.len(), "text written to clipboard");
        Ok(())
    }
}
