#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "hero-backdrop";

pub const PEXELS_SEARCH_URL: &str = "https://api.pexels.com/v1/search";
pub const SEARCH_ORIENTATION: &str = "landscape";
pub const SEARCH_SIZE: &str = "small";

pub const MAX_RANDOM_PAGE: u32 = 10;
pub const MAX_RANDOM_PER_PAGE: u32 = 15;

pub const CONFIG_POLL_INTERVAL_MS: u64 = 50;
pub const CONFIG_WAIT_TIMEOUT_MS: u64 = 2000;
pub const STARTUP_PUBLISH_DELAY_MS: u64 = 100;

pub const MOBILE_VIEWPORT_MAX_WIDTH: u32 = 768;
pub const IOS_PLATFORM_REPORT: &str = "MacIntel";

pub const DEFAULT_HERO_IMAGE_PATH: &str = "/images/hero-default-bg.jpg";

pub const HERO_SECTION_CLASS: &str = "hero-section";
pub const CONTENT_PANEL_CLASS: &str = "hero-content";
pub const BG_CONTAINER_CLASS: &str = "hero-bg-container";
pub const BG_OVERLAY_CLASS: &str = "hero-bg-overlay";

pub const CLASS_GRADIENT_BG: &str = "gradient-bg";
pub const CLASS_IMAGE_BG: &str = "image-bg";
pub const CLASS_DEFAULT_BG: &str = "default-bg";
pub const CLASS_IOS_DEVICE: &str = "ios-device";
pub const CLASS_MOBILE_DEVICE: &str = "mobile-device";

pub const OVERLAY_DIM_DEFAULT_IMAGE: f32 = 0.3;
pub const OVERLAY_DIM_REMOTE_IMAGE: f32 = 0.2;

pub const FALLBACK_GRADIENT: &str = "linear-gradient(135deg, var(--color-primary-dark) 0%, var(--color-primary) 20%, var(--color-primary-light) 40%, var(--color-primary) 60%, var(--color-primary-dark) 75%, var(--color-primary-dark) 90%, var(--color-primary) 100%)";

pub const CONTENT_PANEL_BLUR: &str = "blur(8px)";
pub const CONTENT_PANEL_BACKGROUND: &str = "rgba(255, 255, 255, 0.02)";
pub const CONTENT_PANEL_RADIUS: &str = "30px";
pub const CONTENT_PANEL_PADDING: &str = "2rem";
pub const CONTENT_PANEL_MARGIN: &str = "1rem 0";

pub const FADE_TRANSITION: &str = "opacity 0.8s ease-in-out";
pub const NEUTRALIZE_TRANSITION: &str = "background 0.3s ease-in-out";

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const CONFIG_DIR_NAME: &str = "hero-backdrop";

pub const ENV_API_KEY: &str = "PEXELS_API_KEY";
pub const ENV_DEFAULT_IMAGE: &str = "HERO_DEFAULT_IMAGE";
pub const ENV_QUERIES: &str = "HERO_QUERIES";
pub const ENV_USER_AGENT: &str = "HERO_USER_AGENT";
pub const ENV_PLATFORM: &str = "HERO_PLATFORM";
pub const ENV_MAX_TOUCH_POINTS: &str = "HERO_MAX_TOUCH_POINTS";
pub const ENV_VIEWPORT_WIDTH: &str = "HERO_VIEWPORT_WIDTH";

pub const MOBILE_USER_AGENT_KEYWORDS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

pub const IOS_USER_AGENT_KEYWORDS: [&str; 3] = ["iPad", "iPhone", "iPod"];

pub const DEFAULT_SEARCH_QUERIES: [&str; 60] = [
    "ocean",
    "nature",
    "landscape",
    "mountains",
    "forest",
    "sunset",
    "beach",
    "sky",
    "lake",
    "river",
    "valley",
    "desert",
    "canyon",
    "waterfall",
    "meadow",
    "field",
    "coast",
    "cliff",
    "island",
    "bay",
    "harbor",
    "lighthouse",
    "bridge",
    "path",
    "trail",
    "garden",
    "park",
    "tree",
    "flower",
    "cloud",
    "storm",
    "rainbow",
    "aurora",
    "milky way",
    "stars",
    "moon",
    "sunrise",
    "twilight",
    "mist",
    "fog",
    "space",
    "galaxy",
    "nebula",
    "planet",
    "earth",
    "mars",
    "jupiter",
    "saturn",
    "universe",
    "cosmos",
    "astronomy",
    "solar system",
    "black hole",
    "supernova",
    "constellation",
    "meteor",
    "comet",
    "asteroid",
    "space station",
    "satellite",
];
