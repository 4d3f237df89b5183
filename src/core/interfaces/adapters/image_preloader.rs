use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ImagePreloader: Send + Sync {
    /// Fetch and decode the image off-tree before anything is shown, the
    /// way a browser preloads through a detached Image.
    async fn preload(&self, image_url: &str) -> Result<()>;
}
