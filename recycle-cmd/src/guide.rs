//! Location, locality rules and guide browsing.

use std::io::Write;

use anyhow::{bail, Context};
use log::info;
use recycle_core::client::RecycleClient;
use recycle_core::config::ClientConfig;
use recycle_core::controller::{locate, Controller};
use recycle_core::locality::LocalityPanel;
use recycle_core::location::{strip_whitespace, Coordinates, ResolvedLocation};

use crate::terminal::TerminalView;

fn client(config: &ClientConfig) -> anyhow::Result<RecycleClient> {
    RecycleClient::new(config.clone()).context("Failed to build backend client")
}

/// Reverse geocode a position and print the resolved district.
pub async fn run_locate<W: Write>(config: ClientConfig, lat: f64, lon: f64, mut out: W) -> anyhow::Result<()> {
    let client = client(&config)?;
    let at = Coordinates {
        latitude: lat,
        longitude: lon,
    };
    let location = match locate(&client, Ok(at), &config.known_districts).await {
        Ok(location) => location,
        Err(failure) => bail!(LocalityPanel::LocationUnavailable(failure).headline()),
    };

    writeln!(out, "📍 {}", location.display())?;
    writeln!(out, "districtKey: {}", location.district_key)?;
    Ok(())
}

/// Page-load flow for a position, then optional guide navigation.
pub async fn run_guide<W: Write>(
    config: ClientConfig,
    lat: f64,
    lon: f64,
    category: Option<&str>,
    item: Option<&str>,
    out: W,
) -> anyhow::Result<()> {
    let client = client(&config)?;
    let mut controller = Controller::new(client, TerminalView::new(out), config);
    controller
        .start(Ok(Coordinates {
            latitude: lat,
            longitude: lon,
        }))
        .await;

    if let Some(category) = category {
        if !controller.select_category(category) {
            bail!("No category named '{}'", category);
        }
    }
    if let Some(item) = item {
        if !controller.select_item(item) {
            bail!("No item named '{}' in this category", item);
        }
    }
    Ok(())
}

/// Rules and guide from the legacy static files for a known district.
pub async fn run_legacy<W: Write>(config: ClientConfig, city: &str, district: &str, out: W) -> anyhow::Result<()> {
    let client = client(&config)?;
    let location = ResolvedLocation {
        city: city.to_string(),
        district_key: strip_whitespace(district),
        district_label: district.to_string(),
    };
    info!("Loading legacy data for {}", location.display());

    let info = client
        .fetch_legacy_recycle_info(&location.city, &location.district_key)
        .await;
    let mut controller = Controller::new(client, TerminalView::new(out), config);
    controller.set_location(location);
    controller.show_recycle_info(Ok(info));
    Ok(())
}
