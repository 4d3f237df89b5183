use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::Photo;

#[async_trait]
pub trait PhotoSearchService: Send + Sync {
    /// One search round-trip against the image collaborator. Errors on
    /// non-2xx responses and on result sets with no photos.
    async fn search_photos(&self, query: &str, page: u32, per_page: u32) -> Result<Vec<Photo>>;
}
