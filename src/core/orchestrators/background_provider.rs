use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use rand::RngExt;
use tokio::time::Instant;

use crate::core::interfaces::adapters::{BackgroundRenderer, ImagePreloader, PhotoSearchService};
use crate::core::interfaces::ports::{ConfigSource, DeviceProfileProvider};
use crate::core::models::{
    BackgroundConfig, BackgroundError, BackgroundState, DeviceProfile, ImageRenderPlan, Photo,
};
use crate::global_constants;

/// Wait-loop timings, injectable so the timeout path is testable without
/// sitting through the full two-second window.
#[derive(Debug, Clone)]
pub struct ProviderTiming {
    pub config_poll_interval: Duration,
    pub config_wait_timeout: Duration,
}

impl Default for ProviderTiming {
    fn default() -> Self {
        Self {
            config_poll_interval: Duration::from_millis(
                global_constants::CONFIG_POLL_INTERVAL_MS,
            ),
            config_wait_timeout: Duration::from_millis(global_constants::CONFIG_WAIT_TIMEOUT_MS),
        }
    }
}

/// Decides which background to show (default asset, random remote photo, or
/// gradient) and drives the renderer to display it. One instance per hero
/// section, owned by whatever controls the page lifecycle.
pub struct BackgroundProvider {
    search_service: Arc<dyn PhotoSearchService>,
    preloader: Arc<dyn ImagePreloader>,
    renderer: Arc<dyn BackgroundRenderer>,
    config_source: Arc<dyn ConfigSource>,
    device_profile: DeviceProfile,
    timing: ProviderTiming,
    api_key: Option<String>,
    configured_default_image: Option<String>,
    search_queries: Vec<String>,
    current_image_url: Option<String>,
    used_photo_ids: HashSet<u64>,
    request_generation: u64,
    state: BackgroundState,
}

impl BackgroundProvider {
    pub fn build(
        search_service: Arc<dyn PhotoSearchService>,
        preloader: Arc<dyn ImagePreloader>,
        renderer: Arc<dyn BackgroundRenderer>,
        config_source: Arc<dyn ConfigSource>,
        device_profile_provider: Arc<dyn DeviceProfileProvider>,
        timing: ProviderTiming,
    ) -> Self {
        let device_profile = device_profile_provider.detect_profile();
        log::debug!(
            "[PROVIDER] Device profile: ios={} mobile={}",
            device_profile.is_ios(),
            device_profile.is_mobile()
        );

        Self {
            search_service,
            preloader,
            renderer,
            config_source,
            device_profile,
            timing,
            api_key: None,
            configured_default_image: None,
            search_queries: global_constants::DEFAULT_SEARCH_QUERIES
                .iter()
                .map(|query| query.to_string())
                .collect(),
            current_image_url: None,
            used_photo_ids: HashSet::new(),
            request_generation: 0,
            state: BackgroundState::Uninitialized,
        }
    }

    pub fn state(&self) -> BackgroundState {
        self.state
    }

    pub fn current_image_url(&self) -> Option<&str> {
        self.current_image_url.as_deref()
    }

    /// Runs once per session: neutralize the pre-existing gradient, wait for
    /// configuration to be published, then pick the first background. Never
    /// fails outward; every error resolves into a visual fallback.
    pub async fn initialize(&mut self) -> Result<()> {
        self.renderer.neutralize_gradient();
        self.state = BackgroundState::WaitingForConfig;

        let deadline = Instant::now() + self.timing.config_wait_timeout;

        loop {
            if let Some(config) = self.config_source.poll_config() {
                if config.is_actionable() {
                    self.absorb_config(config);
                    self.show_initial_background().await;
                    return Ok(());
                }
            }

            if Instant::now() >= deadline {
                log::warn!("[PROVIDER] {}", BackgroundError::ConfigTimeout);
                self.use_fallback_background();
                return Ok(());
            }

            tokio::time::sleep(self.timing.config_poll_interval).await;
        }
    }

    /// Re-runs remote selection. Failure here falls back to the default
    /// image, never the gradient.
    pub async fn refresh_background(&mut self) {
        if self.api_key.is_none() {
            log::debug!("[PROVIDER] Refresh requested with no API key, ignoring");
            return;
        }

        if let Err(error) = self.load_random_background().await {
            log::error!("[PROVIDER] Failed to refresh background: {:#}", error);
            self.use_default_image().await;
        }
    }

    fn absorb_config(&mut self, config: BackgroundConfig) {
        self.search_queries = config.effective_queries();
        self.api_key = config.api_key.clone();
        self.configured_default_image = config
            .default_image_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(String::from);
    }

    async fn show_initial_background(&mut self) {
        // A configured default image takes absolute priority over the API.
        if self.configured_default_image.is_some() {
            log::info!("[PROVIDER] Default image configured, skipping photo search");
            self.use_default_image().await;
            return;
        }

        log::info!("[PROVIDER] API key found, loading random background");
        if let Err(error) = self.load_random_background().await {
            log::error!("[PROVIDER] Failed to load random background: {:#}", error);
            self.use_default_image().await;
        }
    }

    async fn use_default_image(&mut self) {
        let image_url = self
            .configured_default_image
            .clone()
            .unwrap_or_else(|| global_constants::DEFAULT_HERO_IMAGE_PATH.to_string());

        log::info!("[PROVIDER] Applying default image: {}", image_url);
        self.apply_background_image(image_url, true).await;
    }

    async fn load_random_background(&mut self) -> Result<()> {
        let (query, page, per_page) = self.pick_search_parameters();
        log::info!(
            "[PROVIDER] Searching photos: query='{}' page={} per_page={}",
            query,
            page,
            per_page
        );

        let photos = self
            .search_service
            .search_photos(&query, page, per_page)
            .await?;

        let chosen = select_photo(&photos, &mut self.used_photo_ids).ok_or_else(|| {
            BackgroundError::RemoteError(format!("no photos returned for query '{}'", query))
        })?;

        let image_url = chosen
            .resolve_url()
            .ok_or_else(|| {
                BackgroundError::RemoteError(format!("photo {} has no usable source URL", chosen.id))
            })?
            .to_string();
        let chosen_id = chosen.id;

        self.used_photo_ids.insert(chosen_id);
        log::debug!(
            "[PROVIDER] Selected photo {} ({} shown so far)",
            chosen_id,
            self.used_photo_ids.len()
        );

        self.apply_background_image(image_url, false).await;
        Ok(())
    }

    async fn apply_background_image(&mut self, image_url: String, is_default_image: bool) {
        self.request_generation += 1;
        let generation = self.request_generation;

        let plan = ImageRenderPlan::build(&image_url, is_default_image, &self.device_profile);

        match self.preloader.preload(&image_url).await {
            Ok(()) => {
                // A preload that resolves after a newer request started must
                // not clobber the newer result.
                if generation != self.request_generation {
                    log::warn!(
                        "[PROVIDER] Discarding stale preload of {} (generation {} superseded)",
                        image_url,
                        generation
                    );
                    return;
                }

                self.renderer.apply_image(&plan);
                self.current_image_url = Some(image_url);
                self.state = if is_default_image {
                    BackgroundState::DefaultImage
                } else {
                    BackgroundState::RemoteImage
                };
                log::info!("[PROVIDER] Background applied, state={}", self.state);
            }
            Err(error) => {
                log::error!(
                    "[PROVIDER] {}",
                    BackgroundError::ImageLoadError(format!("{} ({:#})", image_url, error))
                );
                self.use_fallback_background();
            }
        }
    }

    fn use_fallback_background(&mut self) {
        log::info!("[PROVIDER] Using gradient fallback");
        self.renderer.apply_gradient_fallback();
        self.current_image_url = None;
        self.state = BackgroundState::GradientFallback;
    }

    fn pick_search_parameters(&self) -> (String, u32, u32) {
        let mut rng = rand::rng();

        let query = self.search_queries[rng.random_range(0..self.search_queries.len())].clone();
        let page = rng.random_range(1..=global_constants::MAX_RANDOM_PAGE);
        let per_page = rng.random_range(1..=global_constants::MAX_RANDOM_PER_PAGE);

        (query, page, per_page)
    }
}

/// Uniform pick that avoids repeating a photo until every candidate has been
/// shown once; exhausting the candidates resets the repeat-avoidance memory.
fn select_photo<'a>(photos: &'a [Photo], used_photo_ids: &mut HashSet<u64>) -> Option<&'a Photo> {
    if photos.is_empty() {
        return None;
    }

    let mut rng = rand::rng();

    let fresh_photos: Vec<&'a Photo> = photos
        .iter()
        .filter(|photo| !used_photo_ids.contains(&photo.id))
        .collect();

    if fresh_photos.is_empty() {
        used_photo_ids.clear();
        return photos.get(rng.random_range(0..photos.len()));
    }

    Some(fresh_photos[rng.random_range(0..fresh_photos.len())])
}
