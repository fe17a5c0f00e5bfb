//! Backend endpoints the client talks to.

use crate::chat::{ChatReply, ChatRequest};
use crate::error::Result;
use crate::location::{Coordinates, GeocodeResponse};
use crate::recycle_info::RecycleInfo;

pub const REVERSE_GEOCODE_PATH: &str = "/reverse-geocode";
pub const RECYCLE_INFO_PATH: &str = "/get-recycle-info";
pub const UNIFIED_CHAT_PATH: &str = "/chatbot-unified-chat";
pub const ANALYZE_IMAGE_PATH: &str = "/chatbot-analyze-image";
pub const LEGACY_RECYCLE_INFO_PATH: &str = "/static/data/recycle_info.json";
pub const LEGACY_GUIDE_PATH: &str = "/static/data/disposal_guide.json";

/// The calls the controller needs from the backend.
///
/// Futures are not required to be `Send`: on wasm32 everything runs on the
/// browser's single thread.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Reverse-geocode a position. A response carrying `error` is an `Err`.
    async fn reverse_geocode(&self, at: Coordinates) -> Result<GeocodeResponse>;

    /// Locality rules and guide for one city/district.
    async fn recycle_info(&self, city: &str, district_key: &str) -> Result<RecycleInfo>;

    /// One unified chat turn. A reply carrying `error` is still `Ok`.
    async fn unified_chat(&self, request: &ChatRequest) -> Result<ChatReply>;
}
