use serde::Deserialize;

/// URL variants the search collaborator offers for a single photo.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhotoSources {
    #[serde(default)]
    pub large2x: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub id: u64,
    #[serde(default)]
    pub src: PhotoSources,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PhotoSearchResponse {
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl Photo {
    /// Best available URL, preferring large2x, then large, then medium.
    pub fn resolve_url(&self) -> Option<&str> {
        self.src
            .large2x
            .as_deref()
            .or(self.src.large.as_deref())
            .or(self.src.medium.as_deref())
    }
}
