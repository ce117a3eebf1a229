//! The shared clip model.

mod language;

pub use language::{Language, SUPPORTED_LANGUAGES};

use serde::{Deserialize, Serialize};

use crate::device::ClientInfo;
use crate::ids::ClipId;

/// One published text/code snippet.
///
/// This is also the wire shape used by the backend (`GET /clips`,
/// `POST /add_clip`). Device fields are advisory display metadata and may be
/// missing on clips produced by older clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clip {
    pub id: ClipId,
    pub text: String,
    #[serde(default)]
    pub language: Language,
    pub name: String,
    #[serde(default)]
    pub device_type: String,
    #[serde(default)]
    pub browser: String,
}

impl Clip {
    pub fn new(id: ClipId, text: impl Into<String>, language: Language, name: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            language,
            name: name.into(),
            device_type: String::new(),
            browser: String::new(),
        }
    }

    pub fn with_client(mut self, client: &ClientInfo) -> Self {
        self.device_type = client.device_type.clone();
        self.browser = client.browser.clone();
        self
    }

    /// Whether this clip was submitted under the given display name.
    pub fn is_mine(&self, username: &str) -> bool {
        self.name == username
    }
}
