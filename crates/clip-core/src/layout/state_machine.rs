//! Authoring panel state machine.
//!
//! Defines a pure state transition function for the editor/feed sizing.

/// Authoring panel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum PanelState {
    #[default]
    Expanded,
    Minimized,
}

/// Events that drive the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PanelEvent {
    /// The feed panel was scrolled.
    FeedScrolled { scroll_top: u32, buffer_empty: bool },
    /// The authoring panel was clicked.
    PanelClicked,
    /// The authoring buffer changed.
    BufferChanged { buffer_empty: bool },
}

/// Panel heights in viewport-height units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelLayout {
    pub editor_vh: u8,
    pub feed_vh: u8,
}

const EXPANDED_LAYOUT: PanelLayout = PanelLayout {
    editor_vh: 17,
    feed_vh: 70,
};

const MINIMIZED_LAYOUT: PanelLayout = PanelLayout {
    editor_vh: 5,
    feed_vh: 80,
};

impl PanelState {
    pub fn layout(&self) -> PanelLayout {
        match self {
            PanelState::Expanded => EXPANDED_LAYOUT,
            PanelState::Minimized => MINIMIZED_LAYOUT,
        }
    }
}

/// Compute the next panel state.
///
/// The panel only minimizes when the feed leaves the top while nothing is
/// being authored; any click or typed content brings it back.
pub fn transition(state: PanelState, event: PanelEvent) -> PanelState {
    match (state, event) {
        (
            PanelState::Expanded,
            PanelEvent::FeedScrolled {
                scroll_top,
                buffer_empty: true,
            },
        ) if scroll_top > 0 => PanelState::Minimized,
        (PanelState::Minimized, PanelEvent::PanelClicked) => PanelState::Expanded,
        (PanelState::Minimized, PanelEvent::BufferChanged { buffer_empty: false }) => {
            PanelState::Expanded
        }
        (state, _) => state,
    }
}
