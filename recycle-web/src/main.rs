//! Smart recycling guide web app.
//!
//! Data flow:
//! 1. On mount: ask the browser for a position, reverse geocode it and
//!    resolve the city and district.
//! 2. Fetch the locality rules and disposal guide for that district and
//!    render both halves independently.
//! 3. The guide and chat react to clicks from then on; the chat posts each
//!    turn to the unified chat endpoint on the page's own origin.

use dioxus::prelude::*;
use recycle_core::config::ClientConfig;
use recycle_ui::components::{CategoryGrid, ChatPanel, ItemList, ItemModal, LocationPanel};
use recycle_ui::flows;
use recycle_ui::js_bridge;
use recycle_ui::state::UiState;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("recycle-root"))
        .launch(App);
}

/// Backend origin: the page's own origin, or the dev server default.
fn client_config() -> ClientConfig {
    match js_bridge::page_origin() {
        Some(origin) => ClientConfig::with_base_url(origin),
        None => {
            log::warn!("No page origin; using default backend address");
            ClientConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let ui = use_context_provider(|| UiState::new(client_config()));

    // ─── Startup: locate once on mount ───
    use_effect(move || {
        spawn(flows::startup(ui));
    });

    rsx! {
        div {
            style: "max-width: 720px; margin: 0 auto; padding: 12px; font-family: system-ui, -apple-system, sans-serif;",
            h1 { style: "text-align: center; font-size: 24px;", "♻️ 스마트 분리수거 가이드" }

            LocationPanel {}

            section {
                h2 { style: "font-size: 18px;", "품목별 분리배출 가이드" }
                CategoryGrid {}
                ItemList {}
            }

            ChatPanel {}
            ItemModal {}
        }
    }
}
