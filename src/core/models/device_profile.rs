use crate::global_constants;

/// What the hosting environment reports about the device rendering the page.
#[derive(Debug, Clone)]
pub struct DeviceProfile {
    pub user_agent: String,
    pub platform: String,
    pub max_touch_points: u32,
    pub viewport_width: u32,
}

impl Default for DeviceProfile {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (X11; Linux x86_64)".to_string(),
            platform: "Linux x86_64".to_string(),
            max_touch_points: 0,
            viewport_width: 1920,
        }
    }
}

impl DeviceProfile {
    /// All browsers on iOS use WebKit; iPadOS reports itself as MacIntel
    /// with a multi-touch screen.
    pub fn is_ios(&self) -> bool {
        let ua_matches = global_constants::IOS_USER_AGENT_KEYWORDS
            .iter()
            .any(|keyword| self.user_agent.contains(keyword));

        ua_matches
            || (self.platform == global_constants::IOS_PLATFORM_REPORT
                && self.max_touch_points > 1)
    }

    pub fn is_mobile(&self) -> bool {
        let lowered_agent = self.user_agent.to_lowercase();
        let ua_matches = global_constants::MOBILE_USER_AGENT_KEYWORDS
            .iter()
            .any(|keyword| lowered_agent.contains(keyword));

        ua_matches || self.viewport_width <= global_constants::MOBILE_VIEWPORT_MAX_WIDTH
    }
}
