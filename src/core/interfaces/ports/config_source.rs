use crate::core::models::BackgroundConfig;

/// Where configuration eventually appears. The hosting application publishes
/// it at some point around startup; the provider polls until it does or the
/// wait deadline passes.
pub trait ConfigSource: Send + Sync {
    fn poll_config(&self) -> Option<BackgroundConfig>;
}
