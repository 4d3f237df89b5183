mod adapters;
mod core;
mod global_constants;
mod ports;


use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::adapters::{ElementBackgroundRenderer, HttpImagePreloader, PexelsPhotoSearchService};
use crate::core::models::{BackgroundConfig, Element};
use crate::core::orchestrators::{BackgroundProvider, ProviderTiming};
use crate::ports::{EnvDeviceProfileProvider, PublishedConfigSource};

/// Hero section as the hosting page would have authored it: a gradient
/// background with a nested content panel.
fn build_hero_section() -> Arc<Mutex<Element>> {
    let mut hero_section =
        Element::new("section").with_class(global_constants::HERO_SECTION_CLASS);
    hero_section.add_class(global_constants::CLASS_GRADIENT_BG);
    hero_section.set_style("background", global_constants::FALLBACK_GRADIENT);

    let content_panel = Element::new("div").with_class(global_constants::CONTENT_PANEL_CLASS);
    hero_section.append_child(content_panel);

    Arc::new(Mutex::new(hero_section))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("[MAIN] Starting {}", global_constants::APPLICATION_NAME);

    let config = match BackgroundConfig::load() {
        Ok(config) => config,
        Err(error) => {
            log::warn!("[MAIN] Failed to load configuration: {:#}", error);
            BackgroundConfig::default()
        }
    };

    let api_key = config.api_key.clone().unwrap_or_default();

    let hero_section = build_hero_section();
    let config_source = PublishedConfigSource::new();

    // The hosting page publishes configuration shortly after load rather
    // than before it; the provider's wait loop absorbs that gap.
    let publisher = config_source.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(
            global_constants::STARTUP_PUBLISH_DELAY_MS,
        ))
        .await;
        publisher.publish(config);
    });

    let mut provider = BackgroundProvider::build(
        Arc::new(PexelsPhotoSearchService::new(api_key)),
        Arc::new(HttpImagePreloader::new()),
        Arc::new(ElementBackgroundRenderer::new(Arc::clone(&hero_section))),
        Arc::new(config_source),
        Arc::new(EnvDeviceProfileProvider::new()),
        ProviderTiming::default(),
    );

    provider.initialize().await?;

    log::info!(
        "[MAIN] Provider settled in state={} image={:?}",
        provider.state(),
        provider.current_image_url()
    );

    println!("{}", hero_section.lock().unwrap().to_html());

    Ok(())
}
