//! View model for rendered clips and its HTML serialization.
//!
//! Every user-controlled value goes through [`escape_html`] on its way into
//! markup. Copy buttons carry the feed index, never the raw text.

mod escape;

pub use escape::escape_html;

use std::fmt::Write;

use crate::clip::Language;

pub const EMPTY_STATE_TITLE: &str = "Welcome to Clipify!";
pub const EMPTY_STATE_BODY: &str =
    "Share your text with people around the world. Start by typing your text in the editor below.";

/// Read-only rendering of a clip body in its declared language.
///
/// Holds raw text; the highlighting surface treats it as data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOnlyView {
    pub text: String,
    pub language: Language,
}

/// One rendered message in the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBlock {
    /// Position in the feed snapshot; resolves copy actions.
    pub index: usize,
    pub sender: String,
    pub date_label: String,
    pub language: Language,
    pub icon_class: String,
    pub browser: String,
    pub is_mine: bool,
    pub body: ReadOnlyView,
    pub preview_url: Option<String>,
}

impl MessageBlock {
    pub fn to_html(&self) -> String {
        let (alignment, color) = if self.is_mine {
            ("justify-end", "bg-blue-50")
        } else {
            ("justify-start", "bg-gray-100")
        };

        let mut html = String::new();
        let _ = write!(
            html,
            r#"<div class="message w-full flex {alignment} my-1 mb-3" data-index="{index}">
  <div class="{color} rounded-2xl p-2 border border-gray-200">
    <div class="flex gap-2 justify-between items-center mb-2">
      <i class="{icon}" title="{browser}"></i>
      <span class="text-md font-bold">{sender}</span>
      <span class="text-gray-400 text-xs">{date}</span>
      <span class="language-badge px-3 py-1 rounded-full text-xxs">{language}</span>
      <button class="copy-btn p-2 rounded-lg text-xs" data-index="{index}"><i class="fas fa-copy"></i></button>
    </div>
    <pre class="code-view" data-language="{language}"><code class="language-{language}">{body}</code></pre>
"#,
            index = self.index,
            icon = escape_html(&self.icon_class),
            browser = escape_html(&self.browser),
            sender = escape_html(&self.sender),
            date = escape_html(&self.date_label),
            language = escape_html(self.language.as_str()),
            body = escape_html(&self.body.text),
        );
        if let Some(url) = &self.preview_url {
            let _ = writeln!(
                html,
                r#"    <iframe src="{}" class="w-full mt-2 border rounded-lg" style="height: 20vh;"></iframe>"#,
                escape_html(url)
            );
        }
        html.push_str("  </div>\n</div>\n");
        html
    }
}

/// Placeholder shown when the feed is empty or has just been flushed.
pub fn empty_state_html() -> String {
    format!(
        r#"<div class="empty-state rounded-2xl p-8 text-center">
  <h3 class="text-2xl font-bold text-gray-900 mb-2">{EMPTY_STATE_TITLE}</h3>
  <p class="text-gray-600 max-w-lg mx-auto">{EMPTY_STATE_BODY}</p>
</div>
"#
    )
}

/// Full feed document.
pub fn render_document(blocks: &[MessageBlock]) -> String {
    let mut body = String::new();
    if blocks.is_empty() {
        body.push_str(&empty_state_html());
    } else {
        for block in blocks {
            body.push_str(&block.to_html());
        }
    }
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Clipify</title>
</head>
<body>
<div id="messages">
{body}</div>
</body>
</html>
"#
    )
}
