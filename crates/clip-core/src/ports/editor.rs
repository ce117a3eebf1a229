use crate::clip::Language;

/// The authoring buffer.
///
/// An opaque editing capability: the application only reads and replaces
/// its whole text and language.
pub trait EditorSurfacePort: Send + Sync {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    fn language(&self) -> Language;
    fn set_language(&self, language: &Language);
    /// Release the current editing mode before it is replaced.
    fn dispose(&self);
}
