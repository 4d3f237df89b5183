use anyhow::Result;
use async_trait::async_trait;

use crate::core::interfaces::adapters::PhotoSearchService;
use crate::core::models::{BackgroundError, Photo, PhotoSearchResponse};
use crate::global_constants;

/// Pexels search client. Holds the bearer key and issues one landscape
/// search per call.
pub struct PexelsPhotoSearchService {
    api_key: String,
    search_url: String,
    client: reqwest::Client,
}

impl PexelsPhotoSearchService {
    pub fn new(api_key: String) -> Self {
        Self::with_search_url(api_key, global_constants::PEXELS_SEARCH_URL.to_string())
    }

    pub fn with_search_url(api_key: String, search_url: String) -> Self {
        Self {
            api_key,
            search_url,
            client: reqwest::Client::new(),
        }
    }

    fn construct_search_url(&self, query: &str, page: u32, per_page: u32) -> String {
        format!(
            "{}?query={}&orientation={}&size={}&per_page={}&page={}",
            self.search_url,
            urlencoding::encode(query),
            global_constants::SEARCH_ORIENTATION,
            global_constants::SEARCH_SIZE,
            per_page,
            page
        )
    }
}

#[async_trait]
impl PhotoSearchService for PexelsPhotoSearchService {
    async fn search_photos(&self, query: &str, page: u32, per_page: u32) -> Result<Vec<Photo>> {
        let request_url = self.construct_search_url(query, page, per_page);
        log::debug!("[PEXELS] GET {}", request_url);

        let response = self
            .client
            .get(&request_url)
            .header("Authorization", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackgroundError::RemoteError(format!("status {}", status)).into());
        }

        let response_text = response.text().await?;
        log::debug!("[PEXELS] Response: {} bytes", response_text.len());

        let parsed: PhotoSearchResponse = serde_json::from_str(&response_text)?;

        if parsed.photos.is_empty() {
            return Err(
                BackgroundError::RemoteError(format!("no photos for query '{}'", query)).into(),
            );
        }

        log::info!(
            "[PEXELS] Search for '{}' returned {} photos",
            query,
            parsed.photos.len()
        );
        Ok(parsed.photos)
    }
}
