//! Client configuration.

use crate::image::DEFAULT_MAX_IMAGE_BYTES;
use crate::location::KnownDistricts;

/// Backend address used when nothing else is configured (Flask dev server).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin the endpoint paths are appended to.
    pub base_url: String,
    /// Largest decoded image accepted for a chat turn.
    pub max_image_bytes: usize,
    /// Districts probed in the geocoder's display name.
    pub known_districts: KnownDistricts,
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// `base_url` joined with an absolute endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
            known_districts: KnownDistricts::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        let cfg = ClientConfig::with_base_url("https://recycle.example/");
        assert_eq!(cfg.endpoint("/get-recycle-info"), "https://recycle.example/get-recycle-info");
        assert_eq!(
            ClientConfig::default().endpoint("reverse-geocode"),
            "http://127.0.0.1:5000/reverse-geocode"
        );
    }
}
