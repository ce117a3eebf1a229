//! Feed view that writes the rendered document to disk.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use clip_core::markup::{render_document, MessageBlock};
use clip_core::ports::FeedViewPort;
use tracing::debug;

/// Replaces an HTML file on every render.
///
/// Writes go through a temporary sibling and a rename, so a reader never
/// sees a half-written document.
pub struct FileFeedView {
    path: PathBuf,
}

impl FileFeedView {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn write(&self, document: String) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("create {}", parent.display()))?;
        }

        let tmp = self.path.with_extension("html.tmp");
        tokio::fs::write(&tmp, document)
            .await
            .with_context(|| format!("write {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("rename {}", tmp.display()))?;
        debug!(path = %self.path.display(), "feed document written");
        Ok(())
    }
}

#[async_trait]
impl FeedViewPort for FileFeedView {
    async fn render_feed(&self, blocks: &[MessageBlock]) -> Result<()> {
        self.write(render_document(blocks)).await
    }

    async fn render_empty(&self) -> Result<()> {
        self.write(render_document(&[])).await
    }
}
