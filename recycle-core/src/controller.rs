//! Sequencing of the async flows against a [`Backend`] and a [`RecycleView`].
//!
//! The controller owns the [`AppState`]; each handler performs one
//! transition and pushes the affected regions to the view.

use log::{info, warn};

use crate::backend::Backend;
use crate::chat::SendRejected;
use crate::config::ClientConfig;
use crate::error::{ClientError, GeolocationError, ImageError};
use crate::image::ImageDataUrl;
use crate::locality::LocationFailure;
use crate::location::{resolve_location, Coordinates, KnownDistricts, ResolvedLocation};
use crate::recycle_info::RecycleInfo;
use crate::state::AppState;
use crate::view::{render_navigator, RecycleView};

/// Turn a platform position into a [`ResolvedLocation`].
pub async fn locate<B: Backend>(
    backend: &B,
    position: Result<Coordinates, GeolocationError>,
    known: &KnownDistricts,
) -> Result<ResolvedLocation, LocationFailure> {
    let at = position.map_err(|e| {
        warn!("{}", e);
        LocationFailure::Geolocation
    })?;
    info!("Position acquired: {}, {}", at.latitude, at.longitude);

    let response = backend.reverse_geocode(at).await.map_err(|e| {
        warn!("Reverse geocode failed: {}", e);
        LocationFailure::ReverseGeocode
    })?;
    Ok(resolve_location(&response, known))
}

pub struct Controller<B, V> {
    backend: B,
    view: V,
    config: ClientConfig,
    state: AppState,
}

impl<B: Backend, V: RecycleView> Controller<B, V> {
    /// Create a controller and draw the initial (pending) state.
    pub fn new(backend: B, view: V, config: ClientConfig) -> Self {
        let mut controller = Self {
            backend,
            view,
            config,
            state: AppState::new(),
        };
        controller.render_all();
        controller
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    fn render_all(&mut self) {
        self.view.render_locality(&self.state.locality);
        render_navigator(&mut self.view, &self.state.navigator);
        self.view.set_chat_controls(self.state.chat.controls_enabled());
        self.view
            .render_image_preview(self.state.chat.pending_image().map(ImageDataUrl::as_str));
    }

    /// Page-load flow: position → reverse geocode → recycle info.
    ///
    /// Any failure ends in an inline message; nothing is retried.
    pub async fn start(&mut self, position: Result<Coordinates, GeolocationError>) {
        match locate(&self.backend, position, &self.config.known_districts).await {
            Ok(location) => self.load_recycle_info(location).await,
            Err(failure) => {
                self.state.location_failed(failure);
                self.view.render_locality(&self.state.locality);
            }
        }
    }

    /// Fetch rules and guide for an already resolved location.
    pub async fn load_recycle_info(&mut self, location: ResolvedLocation) {
        self.set_location(location.clone());
        self.view.render_locality(&self.state.locality);

        let outcome = self
            .backend
            .recycle_info(&location.city, &location.district_key)
            .await;
        self.show_recycle_info(outcome);
    }

    /// Use `location` as chat context without fetching anything.
    pub fn set_location(&mut self, location: ResolvedLocation) {
        self.state.location_resolved(location);
    }

    /// Render rules and guide obtained outside the backend, e.g. from the
    /// legacy static files.
    pub fn show_recycle_info(&mut self, outcome: Result<RecycleInfo, ClientError>) {
        self.state.apply_recycle_info(outcome);
        self.view.render_locality(&self.state.locality);
        render_navigator(&mut self.view, &self.state.navigator);
    }

    pub fn select_category(&mut self, name: &str) -> bool {
        let changed = self.state.navigator.select_category(name);
        if changed {
            render_navigator(&mut self.view, &self.state.navigator);
        }
        changed
    }

    pub fn back(&mut self) -> bool {
        let changed = self.state.navigator.back();
        if changed {
            render_navigator(&mut self.view, &self.state.navigator);
        }
        changed
    }

    pub fn select_item(&mut self, name: &str) -> bool {
        let changed = self.state.navigator.select_item(name);
        if changed {
            self.view
                .render_item_detail(self.state.navigator.detail().as_ref());
        }
        changed
    }

    pub fn close_detail(&mut self) -> bool {
        let changed = self.state.navigator.close_detail();
        if changed {
            self.view.render_item_detail(None);
        }
        changed
    }

    /// Validate and stage an image read from a file input.
    pub fn attach_image(&mut self, data_url: String) -> Result<(), ImageError> {
        match ImageDataUrl::parse(data_url, self.config.max_image_bytes) {
            Ok(image) => {
                self.state.chat.attach_image(image);
                self.view
                    .render_image_preview(self.state.chat.pending_image().map(ImageDataUrl::as_str));
                Ok(())
            }
            Err(e) => {
                warn!("Rejected attachment: {}", e);
                self.view.show_notice(&e.to_string());
                Err(e)
            }
        }
    }

    pub fn remove_image(&mut self) -> bool {
        let removed = self.state.chat.remove_image();
        if removed {
            self.view.render_image_preview(None);
        }
        removed
    }

    /// One chat turn with `message` and the pending image.
    pub async fn send(&mut self, message: &str) -> Result<(), SendRejected> {
        let label = self.state.location_label().to_string();
        let turn = self.state.chat.begin_send(message, &label)?;

        let log = self.state.chat.log();
        for bubble in &log[log.len() - 2..] {
            self.view.append_message(bubble);
        }
        self.view.set_chat_controls(false);

        let outcome = self.backend.unified_chat(&turn.request).await;
        let index = self.state.chat.finish_send(turn, outcome);

        if let Some(bubble) = self.state.chat.log().get(index) {
            self.view.replace_message(index, bubble);
        }
        self.view.set_chat_controls(true);
        self.view
            .render_image_preview(self.state.chat.pending_image().map(ImageDataUrl::as_str));
        Ok(())
    }
}
