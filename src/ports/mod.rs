mod env_device_profile_provider;
mod published_config_source;

pub use env_device_profile_provider::EnvDeviceProfileProvider;
pub use published_config_source::PublishedConfigSource;
