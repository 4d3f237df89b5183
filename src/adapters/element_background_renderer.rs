use std::sync::{Arc, Mutex};

use crate::core::interfaces::adapters::BackgroundRenderer;
use crate::core::models::{Element, ImageRenderPlan};
use crate::global_constants;

/// Applies provider decisions to the hero section element tree owned by the
/// embedding application. All knowledge of layers, classes, and styles lives
/// here; the provider never touches the tree directly.
pub struct ElementBackgroundRenderer {
    hero_section: Arc<Mutex<Element>>,
}

impl ElementBackgroundRenderer {
    pub fn new(hero_section: Arc<Mutex<Element>>) -> Self {
        Self { hero_section }
    }

    fn build_background_container(plan: &ImageRenderPlan) -> Element {
        let mut container = Element::new("div").with_class(global_constants::BG_CONTAINER_CLASS);

        container.set_style("position", "absolute");
        container.set_style("top", "0");
        container.set_style("left", "0");
        container.set_style("right", "0");
        container.set_style("bottom", "0");
        container.set_style("width", "100%");
        container.set_style("height", "100%");
        container.set_style("z-index", "0");
        container.set_style("opacity", "0");
        container.set_style("transition", global_constants::FADE_TRANSITION);
        container.set_style("overflow", "hidden");
        container.set_style("contain", "strict");
        container.set_style("will-change", "opacity");
        container.set_style("backface-visibility", "hidden");

        if plan.uses_image_element() {
            container.append_child(Self::build_image_element(plan));
        } else {
            container.set_style("background-image", &format!("url({})", plan.image_url));
            container.set_style("background-size", "cover");
            container.set_style("background-position", "center");
            container.set_style("background-repeat", "no-repeat");
            // 'scroll' here, never 'fixed': fixed attachment forces repaints.
            container.set_style("background-attachment", "scroll");
        }

        container
    }

    fn build_image_element(plan: &ImageRenderPlan) -> Element {
        let mut image = Element::new("img");
        image.set_attribute("src", &plan.image_url);
        image.set_attribute("alt", "Hero background");
        image.set_attribute("loading", "eager");
        image.set_attribute("decoding", "async");

        image.set_style("position", "absolute");
        image.set_style("top", "0");
        image.set_style("left", "0");
        image.set_style("width", "100%");
        image.set_style("height", "100%");
        image.set_style("object-fit", "cover");
        image.set_style("object-position", "center");
        image.set_style("display", "block");
        image.set_style("backface-visibility", "hidden");
        image.set_style("will-change", "opacity");

        if plan.is_ios {
            // Forces GPU compositing, which iOS WebKit needs to keep the
            // full-bleed photo smooth.
            image.set_style("transform", "translateZ(0)");
        }

        image
    }

    fn build_overlay(plan: &ImageRenderPlan) -> Element {
        let mut overlay = Element::new("div").with_class(global_constants::BG_OVERLAY_CLASS);

        let gradient = format!(
            "linear-gradient(135deg, rgba(0, 0, 0, 0.4) 0%, rgba(0, 0, 0, {dim}) 25%, rgba(0, 0, 0, 0.3) 50%, rgba(0, 0, 0, {dim}) 75%, rgba(0, 0, 0, 0.4) 100%)",
            dim = plan.overlay_dim
        );

        overlay.set_style("position", "absolute");
        overlay.set_style("top", "0");
        overlay.set_style("left", "0");
        overlay.set_style("right", "0");
        overlay.set_style("bottom", "0");
        overlay.set_style("background", &gradient);
        overlay.set_style("z-index", "1");
        overlay.set_style("pointer-events", "none");
        overlay.set_style("opacity", "0");
        overlay.set_style("transition", global_constants::FADE_TRANSITION);

        overlay
    }

    fn apply_legibility_treatment(hero_section: &mut Element) {
        let Some(content_panel) =
            hero_section.find_child_by_class_mut(global_constants::CONTENT_PANEL_CLASS)
        else {
            return;
        };

        content_panel.set_style("position", "relative");
        content_panel.set_style("z-index", "10");
        content_panel.set_style("background", global_constants::CONTENT_PANEL_BACKGROUND);
        content_panel.set_style("backdrop-filter", global_constants::CONTENT_PANEL_BLUR);
        content_panel.set_style("border-radius", global_constants::CONTENT_PANEL_RADIUS);
        content_panel.set_style("padding", global_constants::CONTENT_PANEL_PADDING);
        content_panel.set_style("margin", global_constants::CONTENT_PANEL_MARGIN);
    }

    fn clear_legibility_treatment(hero_section: &mut Element) {
        let Some(content_panel) =
            hero_section.find_child_by_class_mut(global_constants::CONTENT_PANEL_CLASS)
        else {
            return;
        };

        for property in [
            "background",
            "backdrop-filter",
            "border-radius",
            "padding",
            "margin",
        ] {
            content_panel.clear_style(property);
        }
    }

    fn remove_generated_layers(hero_section: &mut Element) {
        hero_section.remove_children_with_class(global_constants::BG_CONTAINER_CLASS);
        hero_section.remove_children_with_class(global_constants::BG_OVERLAY_CLASS);
    }
}

impl BackgroundRenderer for ElementBackgroundRenderer {
    fn neutralize_gradient(&self) {
        let mut hero_section = self.hero_section.lock().unwrap();

        hero_section.set_style("background", "transparent");
        hero_section.set_style("transition", global_constants::NEUTRALIZE_TRANSITION);
    }

    fn apply_image(&self, plan: &ImageRenderPlan) {
        log::debug!(
            "[RENDERER] Applying image (img_element={} default={})",
            plan.uses_image_element(),
            plan.is_default_image
        );

        let mut hero_section = self.hero_section.lock().unwrap();

        let needs_relative_positioning =
            matches!(hero_section.style("position"), None | Some("static"));
        if needs_relative_positioning {
            hero_section.set_style("position", "relative");
        }

        // Last-applied-wins: any layers from an earlier application go away.
        Self::remove_generated_layers(&mut hero_section);

        hero_section.append_child(Self::build_background_container(plan));
        hero_section.append_child(Self::build_overlay(plan));
        Self::apply_legibility_treatment(&mut hero_section);

        hero_section.remove_class(global_constants::CLASS_GRADIENT_BG);
        for class_name in plan.state_classes() {
            hero_section.add_class(class_name);
        }

        // Fade both layers in.
        if let Some(container) =
            hero_section.find_child_by_class_mut(global_constants::BG_CONTAINER_CLASS)
        {
            container.set_style("opacity", "1");
        }
        if let Some(overlay) =
            hero_section.find_child_by_class_mut(global_constants::BG_OVERLAY_CLASS)
        {
            overlay.set_style("opacity", "1");
        }
    }

    fn apply_gradient_fallback(&self) {
        log::debug!("[RENDERER] Applying gradient fallback");

        let mut hero_section = self.hero_section.lock().unwrap();

        hero_section.set_style("background", global_constants::FALLBACK_GRADIENT);
        hero_section.set_style("background-image", "none");

        hero_section.add_class(global_constants::CLASS_GRADIENT_BG);
        hero_section.remove_class(global_constants::CLASS_IMAGE_BG);
        hero_section.remove_class(global_constants::CLASS_DEFAULT_BG);
        hero_section.remove_class(global_constants::CLASS_IOS_DEVICE);
        hero_section.remove_class(global_constants::CLASS_MOBILE_DEVICE);

        Self::remove_generated_layers(&mut hero_section);
        Self::clear_legibility_treatment(&mut hero_section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::DeviceProfile;

    fn hero_with_content_panel() -> Arc<Mutex<Element>> {
        let mut hero = Element::new("section").with_class(global_constants::HERO_SECTION_CLASS);
        hero.append_child(Element::new("div").with_class(global_constants::CONTENT_PANEL_CLASS));
        Arc::new(Mutex::new(hero))
    }

    fn desktop_plan(image_url: &str, is_default: bool) -> ImageRenderPlan {
        ImageRenderPlan::build(image_url, is_default, &DeviceProfile::default())
    }

    #[test]
    fn test_neutralize_gradient_makes_background_transparent() {
        let hero = hero_with_content_panel();
        let renderer = ElementBackgroundRenderer::new(Arc::clone(&hero));

        renderer.neutralize_gradient();

        assert_eq!(hero.lock().unwrap().style("background"), Some("transparent"));
    }

    #[test]
    fn test_apply_image_inserts_container_and_overlay_once() {
        let hero = hero_with_content_panel();
        let renderer = ElementBackgroundRenderer::new(Arc::clone(&hero));

        renderer.apply_image(&desktop_plan("https://img.test/a.jpg", false));
        renderer.apply_image(&desktop_plan("https://img.test/b.jpg", false));

        let hero_section = hero.lock().unwrap();
        assert_eq!(
            hero_section.count_children_with_class(global_constants::BG_CONTAINER_CLASS),
            1
        );
        assert_eq!(
            hero_section.count_children_with_class(global_constants::BG_OVERLAY_CLASS),
            1
        );
    }

    #[test]
    fn test_overlay_dim_reflects_default_versus_remote() {
        let hero = hero_with_content_panel();
        let renderer = ElementBackgroundRenderer::new(Arc::clone(&hero));

        renderer.apply_image(&desktop_plan("https://img.test/a.jpg", true));
        let default_overlay_gradient = {
            let hero_section = hero.lock().unwrap();
            hero_section
                .find_child_by_class(global_constants::BG_OVERLAY_CLASS)
                .unwrap()
                .style("background")
                .unwrap()
                .to_string()
        };

        renderer.apply_image(&desktop_plan("https://img.test/a.jpg", false));
        let remote_overlay_gradient = {
            let hero_section = hero.lock().unwrap();
            hero_section
                .find_child_by_class(global_constants::BG_OVERLAY_CLASS)
                .unwrap()
                .style("background")
                .unwrap()
                .to_string()
        };

        assert!(default_overlay_gradient.contains("0.3) 25%"));
        assert!(remote_overlay_gradient.contains("0.2) 25%"));
    }

    #[test]
    fn test_apply_image_fades_layers_in() {
        let hero = hero_with_content_panel();
        let renderer = ElementBackgroundRenderer::new(Arc::clone(&hero));

        renderer.apply_image(&desktop_plan("https://img.test/a.jpg", false));

        let hero_section = hero.lock().unwrap();
        let container = hero_section
            .find_child_by_class(global_constants::BG_CONTAINER_CLASS)
            .unwrap();
        assert_eq!(container.style("opacity"), Some("1"));
        assert_eq!(container.style("transition"), Some(global_constants::FADE_TRANSITION));
    }

    #[test]
    fn test_gradient_fallback_clears_legibility_treatment() {
        let hero = hero_with_content_panel();
        let renderer = ElementBackgroundRenderer::new(Arc::clone(&hero));

        renderer.apply_image(&desktop_plan("https://img.test/a.jpg", false));
        renderer.apply_gradient_fallback();

        let hero_section = hero.lock().unwrap();
        let content_panel = hero_section
            .find_child_by_class(global_constants::CONTENT_PANEL_CLASS)
            .unwrap();
        assert_eq!(content_panel.style("backdrop-filter"), None);
        assert_eq!(content_panel.style("border-radius"), None);
        assert!(hero_section.has_class(global_constants::CLASS_GRADIENT_BG));
        assert!(!hero_section.has_class(global_constants::CLASS_IMAGE_BG));
    }
}
