use std::sync::{Arc, RwLock};

use crate::core::interfaces::ports::ConfigSource;
use crate::core::models::BackgroundConfig;

/// Configuration slot the hosting application fills in at some point around
/// startup. Replaces the original design's module-level globals with an
/// explicitly shared, explicitly owned handle.
#[derive(Clone, Default)]
pub struct PublishedConfigSource {
    slot: Arc<RwLock<Option<BackgroundConfig>>>,
}

impl PublishedConfigSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, config: BackgroundConfig) {
        log::info!("[CONFIG_SOURCE] Configuration published");
        *self.slot.write().unwrap() = Some(config);
    }
}

impl ConfigSource for PublishedConfigSource {
    fn poll_config(&self) -> Option<BackgroundConfig> {
        self.slot.read().unwrap().clone()
    }
}
