use crate::core::interfaces::ports::DeviceProfileProvider;
use crate::core::models::DeviceProfile;
use crate::global_constants;

/// Reads the simulated device characteristics from the environment, falling
/// back to a desktop profile. Stands in for what a hosting page would read
/// off `navigator` and the viewport.
pub struct EnvDeviceProfileProvider;

impl EnvDeviceProfileProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvDeviceProfileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceProfileProvider for EnvDeviceProfileProvider {
    fn detect_profile(&self) -> DeviceProfile {
        let mut profile = DeviceProfile::default();

        if let Ok(user_agent) = std::env::var(global_constants::ENV_USER_AGENT) {
            profile.user_agent = user_agent;
        }
        if let Ok(platform) = std::env::var(global_constants::ENV_PLATFORM) {
            profile.platform = platform;
        }
        if let Ok(raw_touch_points) = std::env::var(global_constants::ENV_MAX_TOUCH_POINTS) {
            if let Ok(touch_points) = raw_touch_points.trim().parse() {
                profile.max_touch_points = touch_points;
            }
        }
        if let Ok(raw_width) = std::env::var(global_constants::ENV_VIEWPORT_WIDTH) {
            if let Ok(viewport_width) = raw_width.trim().parse() {
                profile.viewport_width = viewport_width;
            }
        }

        log::debug!(
            "[DEVICE] Detected profile: ua='{}' platform='{}' touch={} width={}",
            profile.user_agent,
            profile.platform,
            profile.max_touch_points,
            profile.viewport_width
        );

        profile
    }
}
