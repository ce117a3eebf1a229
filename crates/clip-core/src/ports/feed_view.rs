use anyhow::Result;
use async_trait::async_trait;

use crate::markup::MessageBlock;

/// Where rendered feed blocks end up.
#[async_trait]
pub trait FeedViewPort: Send + Sync {
    /// Replace the visible feed with `blocks`.
    async fn render_feed(&self, blocks: &[MessageBlock]) -> Result<()>;

    /// Show the empty-state placeholder.
    async fn render_empty(&self) -> Result<()>;
}
