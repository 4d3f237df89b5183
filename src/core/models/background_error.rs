use std::fmt;

/// The three failure kinds the provider recovers from. Each maps to exactly
/// one fallback: timeout to gradient, remote failure to the default image,
/// load failure to gradient.
#[derive(Debug)]
pub enum BackgroundError {
    ConfigTimeout,
    RemoteError(String),
    ImageLoadError(String),
}

impl fmt::Display for BackgroundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundError::ConfigTimeout => {
                write!(f, "no API key or default image within the config wait window")
            }
            BackgroundError::RemoteError(detail) => write!(f, "photo search failed: {}", detail),
            BackgroundError::ImageLoadError(detail) => {
                write!(f, "image failed to load: {}", detail)
            }
        }
    }
}

impl std::error::Error for BackgroundError {}
