use std::sync::Arc;

use clip_core::ports::{EditorSurfacePort, NotifierPort, Toast};
use clip_core::Language;
use tracing::debug;

/// Direct actions on the authoring buffer.
pub struct EditorCommands {
    editor: Arc<dyn EditorSurfacePort>,
    notifier: Arc<dyn NotifierPort>,
}

impl EditorCommands {
    pub fn new(editor: Arc<dyn EditorSurfacePort>, notifier: Arc<dyn NotifierPort>) -> Self {
        Self { editor, notifier }
    }

    pub fn clear(&self) {
        self.editor.set_text("");
        self.notifier.notify(Toast::info("Editor cleared!"));
    }

    /// Switch the authoring language, keeping the typed text.
    ///
    /// The previous mode is disposed before the new one is installed.
    /// Unknown tags fall back to plaintext.
    pub fn change_language(&self, tag: &str) -> Language {
        let language = Language::supported(tag);
        let text = self.editor.text();
        self.editor.dispose();
        self.editor.set_language(&language);
        self.editor.set_text(&text);
        debug!(requested = tag, language = %language, "authoring language changed");
        language
    }
}
