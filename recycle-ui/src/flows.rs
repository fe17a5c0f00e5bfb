//! Async handlers wired to UI events.
//!
//! Each flow reads what it needs from the signals, releases the borrow,
//! awaits the backend, then writes the outcome back. No signal guard is
//! held across an `.await`.
//!
//! The sequencing mirrors `recycle_core::controller::Controller`, which the
//! CLI and the headless tests drive; keep the two in step:
//!
//! | flow | controller method |
//! |---|---|
//! | [`startup`] | `Controller::start` → `Controller::load_recycle_info` |
//! | [`send_chat`] | `Controller::send` |
//! | [`attach_image`] | `Controller::attach_image` |
//! | [`remove_image`] | `Controller::remove_image` |

use log::{info, warn};
use recycle_core::backend::Backend;
use recycle_core::chat::SendRejected;
use recycle_core::controller::locate;
use recycle_core::image::ImageDataUrl;
use recycle_core::locality::LocationFailure;

use dioxus::prelude::{ReadableExt, WritableExt};

use crate::js_bridge;
use crate::state::{ids, UiState};

/// Page-load flow: position → reverse geocode → recycle info.
///
/// Same transitions as `Controller::start`.
pub async fn startup(mut ui: UiState) {
    let Some(client) = (ui.client)() else {
        ui.app.write().location_failed(LocationFailure::ReverseGeocode);
        return;
    };
    let known = ui.config.read().known_districts.clone();

    let position = js_bridge::current_position().await;
    let location = match locate(&client, position, &known).await {
        Ok(location) => location,
        Err(failure) => {
            ui.app.write().location_failed(failure);
            return;
        }
    };

    ui.app.write().location_resolved(location.clone());
    let outcome = client
        .recycle_info(&location.city, &location.district_key)
        .await;
    ui.app.write().apply_recycle_info(outcome);
}

/// Send the chat input together with the pending image.
///
/// Same `begin_send`/`finish_send` pair as `Controller::send`.
pub async fn send_chat(mut ui: UiState) {
    let Some(client) = (ui.client)() else {
        warn!("Chat send ignored: no backend client");
        return;
    };
    let message = (ui.chat_input)();

    let turn = {
        let mut app = ui.app.write();
        let label = app.location_label().to_string();
        let turn = app.chat.begin_send(&message, &label);
        turn
    };
    let turn = match turn {
        Ok(turn) => turn,
        Err(SendRejected::Empty) => return,
        Err(SendRejected::InFlight) => {
            info!("Chat send ignored while a turn is in flight");
            return;
        }
    };
    ui.chat_input.set(String::new());
    ui.notice.set(None);
    js_bridge::scroll_to_bottom(ids::CHAT_MESSAGES);

    let had_image = turn.has_image();
    let outcome = client.unified_chat(&turn.request).await;
    ui.app.write().chat.finish_send(turn, outcome);

    if had_image && ui.app.read().chat.pending_image().is_none() {
        js_bridge::clear_file_input(ids::IMAGE_INPUT);
    }
    js_bridge::scroll_to_bottom(ids::CHAT_MESSAGES);
}

/// Read the selected file and stage it as the pending image.
pub async fn attach_image(mut ui: UiState) {
    let data_url = match js_bridge::read_file_as_data_url(ids::IMAGE_INPUT).await {
        Ok(Some(data_url)) => data_url,
        Ok(None) => return,
        Err(e) => {
            warn!("Reading image failed: {}", e);
            ui.notice.set(Some(e));
            return;
        }
    };

    let max_bytes = ui.config.read().max_image_bytes;
    match ImageDataUrl::parse(data_url, max_bytes) {
        Ok(image) => {
            ui.app.write().chat.attach_image(image);
            ui.notice.set(None);
        }
        Err(e) => {
            warn!("Rejected attachment: {}", e);
            ui.notice.set(Some(e.to_string()));
            js_bridge::clear_file_input(ids::IMAGE_INPUT);
        }
    }
}

/// Drop the pending image and reset the file input.
pub fn remove_image(mut ui: UiState) {
    if ui.app.write().chat.remove_image() {
        js_bridge::clear_file_input(ids::IMAGE_INPUT);
    }
}
