//! UI state managed via Dioxus context.
//!
//! `UiState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<UiState>()`. All recycling logic lives in the wrapped
//! [`AppState`]; the remaining signals hold browser-only bits.

use dioxus::prelude::*;
use recycle_core::client::RecycleClient;
use recycle_core::config::ClientConfig;
use recycle_core::state::AppState;

/// DOM ids shared between components and the JS bridge.
pub mod ids {
    pub const LOCATION_PANEL: &str = "location-info-display";
    pub const CATEGORY_GRID: &str = "category-grid";
    pub const ITEM_LIST: &str = "item-list-container";
    pub const ITEM_MODAL: &str = "item-modal";
    pub const MODAL_TITLE: &str = "modal-title";
    pub const MODAL_DESCRIPTION: &str = "modal-description";
    pub const CHAT_INPUT: &str = "chat-input";
    pub const CHAT_SEND: &str = "chat-send-btn";
    pub const CHAT_MESSAGES: &str = "chat-messages";
    pub const IMAGE_INPUT: &str = "image-input";
    pub const IMAGE_PREVIEW: &str = "image-preview";
    pub const REMOVE_IMAGE: &str = "remove-image-btn";
}

/// Shared UI state for the recycling guide app.
#[derive(Clone, Copy)]
pub struct UiState {
    /// Location, locality panel, guide navigator and chat session
    pub app: Signal<AppState>,
    /// Backend client (None if the base URL was unusable)
    pub client: Signal<Option<RecycleClient>>,
    /// Configuration the client was built from
    pub config: Signal<ClientConfig>,
    /// Current text in the chat input
    pub chat_input: Signal<String>,
    /// Inline notice under the chat input (e.g. rejected attachment)
    pub notice: Signal<Option<String>>,
}

impl UiState {
    /// Create a new UiState for the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        let client = match RecycleClient::new(config.clone()) {
            Ok(client) => Some(client),
            Err(e) => {
                log::error!("Cannot build backend client: {}", e);
                None
            }
        };
        Self {
            app: Signal::new(AppState::new()),
            client: Signal::new(client),
            config: Signal::new(config),
            chat_input: Signal::new(String::new()),
            notice: Signal::new(None),
        }
    }
}
