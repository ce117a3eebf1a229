use super::errors::ClipboardError;

/// System clipboard, write side only.
pub trait ClipboardWriterPort: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}
