/// Error types for the recycling guide client
use thiserror::Error;

/// Main error type for backend calls
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed before a response arrived
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    /// Response body was not the JSON we expected
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// Backend answered with an `error` field
    #[error("server reported an error: {0}")]
    Server(String),

    /// Base URL could not be joined with an endpoint path
    #[error("invalid base URL {0}")]
    InvalidBaseUrl(String),
}

/// Reasons an attached image is refused before it is staged
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Data URL does not carry an `image/*` media type
    #[error("attachment is not an image (media type: {0})")]
    NotAnImage(String),

    /// Decoded payload exceeds the configured limit
    #[error("image is too large ({size} bytes, limit {limit} bytes)")]
    TooLarge { size: usize, limit: usize },

    /// Not a base64 data URL at all
    #[error("malformed data URL: {0}")]
    Malformed(String),
}

/// Type alias for Results using ClientError
pub type Result<T> = std::result::Result<T, ClientError>;

/// Platform location API refused or failed to report a position
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("geolocation unavailable: {0}")]
pub struct GeolocationError(pub String);
