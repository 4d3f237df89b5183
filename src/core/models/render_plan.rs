use crate::core::models::DeviceProfile;
use crate::global_constants;

/// Pure description of how an image should be shown, computed by the provider
/// before any element mutation happens. Keeps the decision unit-testable
/// without a rendered page.
#[derive(Debug, Clone)]
pub struct ImageRenderPlan {
    pub image_url: String,
    pub is_default_image: bool,
    pub is_ios: bool,
    pub is_mobile: bool,
    pub overlay_dim: f32,
}

impl ImageRenderPlan {
    pub fn build(image_url: &str, is_default_image: bool, profile: &DeviceProfile) -> Self {
        let overlay_dim = if is_default_image {
            global_constants::OVERLAY_DIM_DEFAULT_IMAGE
        } else {
            global_constants::OVERLAY_DIM_REMOTE_IMAGE
        };

        Self {
            image_url: image_url.to_string(),
            is_default_image,
            is_ios: profile.is_ios(),
            is_mobile: profile.is_mobile(),
            overlay_dim,
        }
    }

    /// Mobile and iOS materialize an actual img element instead of a CSS
    /// background, which renders far more reliably on those devices.
    pub fn uses_image_element(&self) -> bool {
        self.is_ios || self.is_mobile
    }

    /// Marker classes the hero section ends up with once this plan applies.
    pub fn state_classes(&self) -> Vec<&'static str> {
        let mut classes = vec![global_constants::CLASS_IMAGE_BG];

        if self.is_default_image {
            classes.push(global_constants::CLASS_DEFAULT_BG);
        }
        if self.is_ios {
            classes.push(global_constants::CLASS_IOS_DEVICE);
        }
        if self.is_mobile {
            classes.push(global_constants::CLASS_MOBILE_DEVICE);
        }

        classes
    }
}
