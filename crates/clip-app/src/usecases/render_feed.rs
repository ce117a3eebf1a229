use clip_core::ids::ClipId;
use clip_core::markup::{MessageBlock, ReadOnlyView};
use clip_core::preview::preview_for;
use clip_core::{Clip, DeviceFamily};

const DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Turns feed entries into message blocks.
///
/// Blocks keep raw text; escaping happens when they are serialized.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderPipeline;

impl RenderPipeline {
    pub fn new() -> Self {
        Self
    }

    /// Render every clip in feed order for the viewer named `me`.
    pub fn render(&self, clips: &[Clip], me: &str) -> Vec<MessageBlock> {
        clips
            .iter()
            .enumerate()
            .map(|(index, clip)| self.render_clip(index, clip, me))
            .collect()
    }

    pub fn render_clip(&self, index: usize, clip: &Clip, me: &str) -> MessageBlock {
        MessageBlock {
            index,
            sender: clip.name.clone(),
            date_label: date_label(&clip.id),
            language: clip.language.clone(),
            icon_class: DeviceFamily::classify(&clip.device_type)
                .icon_class()
                .to_string(),
            browser: clip.browser.clone(),
            is_mine: clip.is_mine(me),
            body: ReadOnlyView {
                text: clip.text.clone(),
                language: clip.language.clone(),
            },
            preview_url: preview_for(&clip.text, &clip.language),
        }
    }
}

/// Human date for a timestamp id; free-text ids are shown as-is.
pub fn date_label(id: &ClipId) -> String {
    match id.timestamp() {
        Some(at) => at.format(DATE_FORMAT).to_string(),
        None => id.inner().clone(),
    }
}
