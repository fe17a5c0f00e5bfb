//! Application state shared by every frontend.
//!
//! `AppState` replaces page-level globals: the resolved location, the
//! locality panel, the guide navigator and the chat session live here and
//! change only through the synchronous methods below.

use log::{error, info, warn};

use crate::chat::ChatSession;
use crate::error::ClientError;
use crate::locality::{LocalityPanel, LocationFailure};
use crate::location::ResolvedLocation;
use crate::navigator::{GuideFailure, GuideNavigator};
use crate::recycle_info::RecycleInfo;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    location: Option<ResolvedLocation>,
    pub locality: LocalityPanel,
    pub navigator: GuideNavigator,
    pub chat: ChatSession,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> Option<&ResolvedLocation> {
        self.location.as_ref()
    }

    /// Conversational context sent with chat turns; empty until resolved.
    pub fn location_label(&self) -> &str {
        self.location
            .as_ref()
            .map_or("", |loc| loc.district_label.as_str())
    }

    pub fn location_resolved(&mut self, location: ResolvedLocation) {
        info!(
            "Resolved location: city={}, district={}, key={}",
            location.city, location.district_label, location.district_key
        );
        self.location = Some(location);
        self.locality = LocalityPanel::Pending;
    }

    pub fn location_failed(&mut self, failure: LocationFailure) {
        error!("Location unavailable: {:?}", failure);
        self.locality = LocalityPanel::LocationUnavailable(failure);
    }

    /// Apply the outcome of the combined recycle-info call.
    ///
    /// The locality panel and the guide are updated independently.
    pub fn apply_recycle_info(&mut self, outcome: Result<RecycleInfo, ClientError>) {
        let info = match outcome {
            Ok(info) => info,
            Err(e) => {
                error!("Recycle info request failed: {}", e);
                self.locality = LocalityPanel::LoadFailed;
                self.navigator.fail(GuideFailure::LoadFailed);
                return;
            }
        };

        self.locality = match (self.location.clone(), info.location_info) {
            (Some(location), Some(info)) => LocalityPanel::Info { location, info },
            (Some(location), None) => LocalityPanel::NoData { location },
            (None, _) => {
                warn!("Recycle info arrived without a resolved location");
                LocalityPanel::LoadFailed
            }
        };

        match info.guide {
            Ok(guide) => {
                info!("Loaded guide with {} categories", guide.categories.len());
                self.navigator.load(guide);
            }
            Err(failure) => {
                warn!("Guide unavailable: {:?}", failure);
                self.navigator.fail(failure);
            }
        }
    }
}
