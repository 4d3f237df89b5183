use crate::core::models::ImageRenderPlan;

/// The effectful seam between the provider's decisions and the hero section
/// subtree. Implementations mutate presentation state only; they never decide
/// what to show.
pub trait BackgroundRenderer: Send + Sync {
    /// Neutralize pre-existing gradient styling before the final background
    /// is known, so nothing flashes on first paint.
    fn neutralize_gradient(&self);

    fn apply_image(&self, plan: &ImageRenderPlan);

    fn apply_gradient_fallback(&self);
}
