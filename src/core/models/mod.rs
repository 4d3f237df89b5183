mod background_config;
mod background_error;
mod background_state;
mod device_profile;
mod element;
mod photo;
mod render_plan;

pub use background_config::BackgroundConfig;
pub use background_error::BackgroundError;
pub use background_state::BackgroundState;
pub use device_profile::DeviceProfile;
pub use element::Element;
pub use photo::{Photo, PhotoSearchResponse, PhotoSources};
pub use render_plan::ImageRenderPlan;
