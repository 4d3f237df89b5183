mod background_renderer;
mod image_preloader;
mod photo_search_service;

pub use background_renderer::BackgroundRenderer;
pub use image_preloader::ImagePreloader;
pub use photo_search_service::PhotoSearchService;
