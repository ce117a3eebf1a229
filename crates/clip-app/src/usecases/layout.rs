use std::sync::{Arc, Mutex};

use clip_core::layout::transition;
use clip_core::ports::EditorSurfacePort;
use clip_core::{PanelEvent, PanelLayout, PanelState};
use tracing::trace;

/// Sizes the authoring and feed panels in response to scroll, click and
/// input events. Purely presentational.
pub struct LayoutController {
    editor: Arc<dyn EditorSurfacePort>,
    state: Mutex<PanelState>,
}

impl LayoutController {
    pub fn new(editor: Arc<dyn EditorSurfacePort>) -> Self {
        Self {
            editor,
            state: Mutex::new(PanelState::default()),
        }
    }

    pub fn state(&self) -> PanelState {
        *self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn layout(&self) -> PanelLayout {
        self.state().layout()
    }

    pub fn on_feed_scrolled(&self, scroll_top: u32) -> PanelLayout {
        let buffer_empty = self.buffer_empty();
        self.apply(PanelEvent::FeedScrolled {
            scroll_top,
            buffer_empty,
        })
    }

    pub fn on_panel_clicked(&self) -> PanelLayout {
        self.apply(PanelEvent::PanelClicked)
    }

    pub fn on_buffer_changed(&self) -> PanelLayout {
        let buffer_empty = self.buffer_empty();
        self.apply(PanelEvent::BufferChanged { buffer_empty })
    }

    fn buffer_empty(&self) -> bool {
        self.editor.text().is_empty()
    }

    fn apply(&self, event: PanelEvent) -> PanelLayout {
        let mut state = self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let next = transition(*state, event);
        if next != *state {
            trace!(from = ?*state, to = ?next, ?event, "panel state changed");
        }
        *state = next;
        next.layout()
    }
}
