use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::global_constants;

/// Externally supplied configuration, read once and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackgroundConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub search_queries: Option<Vec<String>>,
    #[serde(default)]
    pub default_image_url: Option<String>,
}

impl BackgroundConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::get_config_file_path()?;

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let parsed: BackgroundConfig = serde_json::from_str(&contents)?;
            log::info!("[CONFIG] Loaded configuration from {:?}", config_path);
            parsed
        } else {
            log::info!("[CONFIG] No config file found, using defaults");
            Self::default()
        };

        config.apply_env_overrides();

        log::debug!("[CONFIG] API key present: {}", config.api_key.is_some());
        log::debug!(
            "[CONFIG] Default image: {:?}",
            config.default_image_url.as_deref()
        );

        Ok(config)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(global_constants::ENV_API_KEY) {
            if !key.trim().is_empty() {
                self.api_key = Some(key);
            }
        }

        if let Ok(url) = std::env::var(global_constants::ENV_DEFAULT_IMAGE) {
            if !url.trim().is_empty() {
                self.default_image_url = Some(url);
            }
        }

        if let Ok(raw_queries) = std::env::var(global_constants::ENV_QUERIES) {
            let queries: Vec<String> = raw_queries
                .split(',')
                .map(|query| query.trim().to_string())
                .filter(|query| !query.is_empty())
                .collect();

            if !queries.is_empty() {
                self.search_queries = Some(queries);
            }
        }
    }

    /// Has either a usable default image or an API key been supplied?
    pub fn is_actionable(&self) -> bool {
        self.has_default_image() || self.api_key.is_some()
    }

    pub fn has_default_image(&self) -> bool {
        matches!(self.default_image_url.as_deref(), Some(url) if !url.is_empty())
    }

    /// Configured query list, or the built-in sixty-term landscape list.
    pub fn effective_queries(&self) -> Vec<String> {
        match &self.search_queries {
            Some(queries) if !queries.is_empty() => queries.clone(),
            _ => global_constants::DEFAULT_SEARCH_QUERIES
                .iter()
                .map(|query| query.to_string())
                .collect(),
        }
    }

    fn get_config_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::CONFIG_DIR_NAME);

        Ok(config_dir.join(global_constants::CONFIG_FILE_NAME))
    }
}
