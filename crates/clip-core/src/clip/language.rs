use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Syntax-highlighting tags offered by the authoring surface.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "plaintext",
    "bat",
    "c",
    "cpp",
    "csharp",
    "css",
    "dockerfile",
    "go",
    "graphql",
    "html",
    "ini",
    "java",
    "javascript",
    "json",
    "kotlin",
    "lua",
    "markdown",
    "mysql",
    "perl",
    "php",
    "powershell",
    "python",
    "r",
    "ruby",
    "rust",
    "scala",
    "shell",
    "sql",
    "swift",
    "typescript",
    "xml",
    "yaml",
];

/// Language tag attached to a clip.
///
/// The tag is kept verbatim as received so that clips from other clients
/// round-trip unchanged; [`Language::supported`] narrows it to the set the
/// local authoring surface understands.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(String);

impl Language {
    pub const PLAINTEXT: &'static str = "plaintext";

    pub fn plaintext() -> Self {
        Self(Self::PLAINTEXT.to_string())
    }

    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if tag.trim().is_empty() {
            Self::plaintext()
        } else {
            Self(tag)
        }
    }

    /// Normalize a user-chosen tag. Unknown tags fall back to plaintext.
    pub fn supported(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_lowercase();
        if SUPPORTED_LANGUAGES.contains(&tag.as_str()) {
            Self(tag)
        } else {
            Self::plaintext()
        }
    }

    pub fn is_plaintext(&self) -> bool {
        self.0 == Self::PLAINTEXT
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::plaintext()
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
