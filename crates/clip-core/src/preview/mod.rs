//! Inline video preview detection for plaintext clips.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::clip::Language;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s]+").expect("url regex is valid"));

static VIDEO_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:youtube\.com/(?:watch\?v=|embed/|shorts/)|youtu\.be/)([a-zA-Z0-9_-]{11})",
    )
    .expect("video id regex is valid")
});

const VIDEO_HOST_MARKERS: &[&str] = &["youtube", "youtu.be"];

const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// First HTTP(S) URL in `text`, if any.
pub fn first_url(text: &str) -> Option<&str> {
    URL_RE.find(text).map(|m| m.as_str())
}

/// Whether the URL points at the video host.
pub fn is_video_link(url: &str) -> bool {
    VIDEO_HOST_MARKERS.iter().any(|marker| url.contains(marker))
}

/// Turn a watch/embed/shorts/short-link URL into its embeddable form.
///
/// Unrecognized shapes yield `None`.
pub fn embed_url(url: &str) -> Option<String> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|id| format!("{EMBED_BASE}{}", id.as_str()))
}

/// Preview frame URL for a clip body, if it qualifies.
///
/// Only plaintext clips are considered, and only their first URL.
pub fn preview_for(text: &str, language: &Language) -> Option<String> {
    if !language.is_plaintext() {
        return None;
    }
    let url = first_url(text)?;
    if !is_video_link(url) {
        return None;
    }
    embed_url(url)
}
