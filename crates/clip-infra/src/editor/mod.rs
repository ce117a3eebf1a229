//! Headless authoring buffer.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use clip_core::ports::EditorSurfacePort;
use clip_core::Language;

#[derive(Debug, Default)]
struct Buffer {
    text: String,
    language: Language,
}

/// Authoring surface kept in memory.
///
/// Disposing drops the current text, the same way tearing down a real
/// editing mode would; callers that switch modes restore it themselves.
#[derive(Debug, Default)]
pub struct InMemoryEditorSurface {
    buffer: Mutex<Buffer>,
    disposals: AtomicUsize,
}

impl InMemoryEditorSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the editing mode was disposed.
    pub fn disposals(&self) -> usize {
        self.disposals.load(Ordering::SeqCst)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Buffer> {
        self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl EditorSurfacePort for InMemoryEditorSurface {
    fn text(&self) -> String {
        self.lock().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.lock().text = text.to_string();
    }

    fn language(&self) -> Language {
        self.lock().language.clone()
    }

    fn set_language(&self, language: &Language) {
        self.lock().language = language.clone();
    }

    fn dispose(&self) {
        self.lock().text.clear();
        self.disposals.fetch_add(1, Ordering::SeqCst);
    }
}
