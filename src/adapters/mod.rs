mod element_background_renderer;
mod http_image_preloader;
mod pexels_photo_search_service;

pub use element_background_renderer::ElementBackgroundRenderer;
pub use http_image_preloader::HttpImagePreloader;
pub use pexels_photo_search_service::PexelsPhotoSearchService;
