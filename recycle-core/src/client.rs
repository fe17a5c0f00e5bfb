//! HTTP client for the recycling guide backend.
//!
//! Built on `reqwest`, which uses the browser fetch API on wasm32 and hyper
//! natively. No timeout and no retry: a failed call is reported once and the
//! caller renders an inline message.

use log::{debug, info, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::backend::{
    Backend, ANALYZE_IMAGE_PATH, LEGACY_GUIDE_PATH, LEGACY_RECYCLE_INFO_PATH, RECYCLE_INFO_PATH,
    REVERSE_GEOCODE_PATH, UNIFIED_CHAT_PATH,
};
use crate::chat::{ChatReply, ChatRequest};
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::location::{Coordinates, GeocodeResponse};
use crate::recycle_info::{RecycleInfo, RecycleInfoRequest, RecycleInfoResponse};

#[derive(Serialize)]
struct AnalyzeImageRequest<'a> {
    image_data_url: &'a str,
}

/// Client for the Flask backend endpoints.
#[derive(Clone)]
pub struct RecycleClient {
    client: Client,
    config: ClientConfig,
}

impl RecycleClient {
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] if `config.base_url` is not an
    /// absolute URL.
    pub fn new(config: ClientConfig) -> Result<Self> {
        reqwest::Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        Ok(Self {
            client: Client::new(),
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Decode a JSON body.
    ///
    /// With `keep_error_body`, a non-success status whose body still decodes
    /// is passed through so the caller sees the backend's `error` field.
    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        endpoint: &str,
        keep_error_body: bool,
    ) -> Result<T> {
        let status = response.status();
        let status_error = || ClientError::Status {
            status: status.as_u16(),
            url: endpoint.to_string(),
        };
        if !status.is_success() && !keep_error_body {
            return Err(status_error());
        }
        let body = response.text().await?;
        match serde_json::from_str(&body) {
            Ok(decoded) => {
                if !status.is_success() {
                    warn!("{} answered {} with a JSON body", endpoint, status);
                }
                Ok(decoded)
            }
            Err(_) if !status.is_success() => Err(status_error()),
            Err(source) => Err(ClientError::Decode {
                endpoint: endpoint.to_string(),
                source,
            }),
        }
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.config.endpoint(path);
        debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        Self::decode(response, path, true).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.endpoint(path);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::decode(response, path, false).await
    }

    /// Legacy image-only analysis (`/chatbot-analyze-image`).
    pub async fn analyze_image(&self, image_data_url: &str) -> Result<ChatReply> {
        info!("Requesting legacy image analysis");
        self.post_json(ANALYZE_IMAGE_PATH, &AnalyzeImageRequest { image_data_url })
            .await
    }

    /// Combine the legacy static JSON files into a [`RecycleInfo`].
    ///
    /// Each file is fetched independently; a failure only blanks its half.
    pub async fn fetch_legacy_recycle_info(&self, city: &str, district_key: &str) -> RecycleInfo {
        let localities = self
            .get_json::<serde_json::Value>(LEGACY_RECYCLE_INFO_PATH)
            .await
            .map_err(|e| warn!("Legacy locality table unavailable: {}", e))
            .ok();
        let guide = self
            .get_json::<serde_json::Value>(LEGACY_GUIDE_PATH)
            .await
            .map_err(|e| warn!("Legacy guide unavailable: {}", e))
            .ok();
        RecycleInfo::from_legacy(localities, guide, city, district_key)
    }
}

impl Backend for RecycleClient {
    async fn reverse_geocode(&self, at: Coordinates) -> Result<GeocodeResponse> {
        info!("Reverse geocoding {}, {}", at.latitude, at.longitude);
        let response: GeocodeResponse = self.post_json(REVERSE_GEOCODE_PATH, &at).await?;
        if let Some(error) = &response.error {
            return Err(ClientError::Server(error.clone()));
        }
        if response.address.is_none() {
            return Err(ClientError::Server("response has no address".to_string()));
        }
        Ok(response)
    }

    async fn recycle_info(&self, city: &str, district_key: &str) -> Result<RecycleInfo> {
        info!("Loading recycle info for {} / {}", city, district_key);
        let request = RecycleInfoRequest {
            city: city.to_string(),
            district_key: district_key.to_string(),
        };
        let response: RecycleInfoResponse = self.post_json(RECYCLE_INFO_PATH, &request).await?;
        Ok(RecycleInfo::from_response(response))
    }

    async fn unified_chat(&self, request: &ChatRequest) -> Result<ChatReply> {
        info!(
            "Unified chat turn (image attached: {})",
            request.image_data_url.is_some()
        );
        self.post_json(UNIFIED_CHAT_PATH, request).await
    }
}
