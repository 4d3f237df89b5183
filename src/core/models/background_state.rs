use std::fmt;

/// Per-session lifecycle of the provider. Every state except `Uninitialized`
/// can be re-entered, e.g. a refresh moving back into `RemoteImage`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundState {
    Uninitialized,
    WaitingForConfig,
    DefaultImage,
    RemoteImage,
    GradientFallback,
}

impl fmt::Display for BackgroundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackgroundState::Uninitialized => write!(f, "Uninitialized"),
            BackgroundState::WaitingForConfig => write!(f, "WaitingForConfig"),
            BackgroundState::DefaultImage => write!(f, "DefaultImage"),
            BackgroundState::RemoteImage => write!(f, "RemoteImage"),
            BackgroundState::GradientFallback => write!(f, "GradientFallback"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_match_states() {
        assert_eq!(BackgroundState::Uninitialized.to_string(), "Uninitialized");
        assert_eq!(
            BackgroundState::GradientFallback.to_string(),
            "GradientFallback"
        );
    }
}
