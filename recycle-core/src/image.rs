//! Validation of images staged for the chat.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::ImageError;

/// Default upper bound on the decoded image payload.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// A `data:image/*;base64,...` URL that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDataUrl {
    url: String,
    media_type: String,
    byte_len: usize,
}

impl ImageDataUrl {
    /// Validate a data URL read from a file input.
    pub fn parse(url: impl Into<String>, max_bytes: usize) -> Result<Self, ImageError> {
        let url = url.into();
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| ImageError::Malformed("missing data: scheme".to_string()))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| ImageError::Malformed("missing payload separator".to_string()))?;
        let media_type = header
            .strip_suffix(";base64")
            .ok_or_else(|| ImageError::Malformed("payload is not base64".to_string()))?
            .to_ascii_lowercase();

        if !media_type.starts_with("image/") {
            return Err(ImageError::NotAnImage(media_type));
        }

        let byte_len = decoded_len(payload)?;
        if byte_len > max_bytes {
            return Err(ImageError::TooLarge {
                size: byte_len,
                limit: max_bytes,
            });
        }

        Ok(Self {
            url,
            media_type,
            byte_len,
        })
    }

    /// Build a data URL from raw file bytes and validate it.
    pub fn from_bytes(media_type: &str, bytes: &[u8], max_bytes: usize) -> Result<Self, ImageError> {
        Self::parse(
            format!("data:{};base64,{}", media_type, STANDARD.encode(bytes)),
            max_bytes,
        )
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    pub fn into_string(self) -> String {
        self.url
    }
}

/// Length of the decoded payload. Decodes fully so that corrupt payloads
/// are rejected up front.
fn decoded_len(payload: &str) -> Result<usize, ImageError> {
    STANDARD
        .decode(payload.trim())
        .map(|bytes| bytes.len())
        .map_err(|e| ImageError::Malformed(e.to_string()))
}

/// Guess an image media type from a file extension.
pub fn media_type_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "bmp" => Some("image/bmp"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}
