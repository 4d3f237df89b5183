mod config_source;
mod device_profile_provider;

pub use config_source::ConfigSource;
pub use device_profile_provider::DeviceProfileProvider;
