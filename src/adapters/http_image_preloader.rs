use anyhow::Result;
use async_trait::async_trait;

use crate::core::interfaces::adapters::ImagePreloader;
use crate::core::models::BackgroundError;

/// Fetches the image bytes and checks they decode, mirroring a browser's
/// detached-Image preload: a URL that does not resolve to a real image must
/// fail before anything is shown.
pub struct HttpImagePreloader {
    client: reqwest::Client,
}

impl HttpImagePreloader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpImagePreloader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImagePreloader for HttpImagePreloader {
    async fn preload(&self, image_url: &str) -> Result<()> {
        log::debug!("[PRELOAD] Fetching {}", image_url);

        let response = self.client.get(image_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackgroundError::ImageLoadError(format!("status {}", status)).into());
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(BackgroundError::ImageLoadError("empty response body".to_string()).into());
        }

        image::load_from_memory(&bytes)
            .map_err(|error| BackgroundError::ImageLoadError(error.to_string()))?;

        log::debug!("[PRELOAD] Decoded {} bytes from {}", bytes.len(), image_url);
        Ok(())
    }
}
