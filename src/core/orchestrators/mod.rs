mod background_provider;

pub use background_provider::{BackgroundProvider, ProviderTiming};
