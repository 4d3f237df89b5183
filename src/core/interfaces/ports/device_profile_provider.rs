use crate::core::models::DeviceProfile;

pub trait DeviceProfileProvider: Send + Sync {
    fn detect_profile(&self) -> DeviceProfile;
}
