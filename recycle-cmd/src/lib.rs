//! Command implementations for the recycling guide CLI.
//!
//! Each subcommand drives the same core flows as the web page, with a
//! [`terminal::TerminalView`] printing what the page would show.

use std::io::{self, Write};

use clap::{Args, Subcommand};
use recycle_core::config::{ClientConfig, DEFAULT_BASE_URL};

pub mod chat;
pub mod guide;
pub mod terminal;

/// Backend connection options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct Connection {
    /// Backend origin the endpoint paths are appended to
    #[arg(long, env = "RECYCLE_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Largest image accepted for upload, in MiB
    #[arg(long, default_value_t = 10, global = true)]
    pub max_image_mb: usize,
}

impl Connection {
    pub fn config(&self) -> ClientConfig {
        ClientConfig {
            max_image_bytes: self.max_image_mb.saturating_mul(1024 * 1024),
            ..ClientConfig::with_base_url(self.base_url.clone())
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Reverse geocode a position and print the resolved district
    Locate {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,
    },

    /// Run the page-load flow for a position and browse the guide
    Guide {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Category to open after loading
        #[arg(long)]
        category: Option<String>,

        /// Item within the category to show in detail
        #[arg(long, requires = "category")]
        item: Option<String>,
    },

    /// Load rules and guide from the legacy static JSON files
    Legacy {
        #[arg(long)]
        city: String,

        /// District key as used in the data files (no spaces)
        #[arg(long)]
        district: String,
    },

    /// Send one unified-chat turn
    Chat {
        #[arg(short, long, default_value = "")]
        message: String,

        /// Image file to attach
        #[arg(short, long)]
        image: Option<String>,

        /// District label sent as conversational context
        #[arg(short, long, default_value = "")]
        location: String,
    },

    /// Analyze an image with the legacy endpoint
    Analyze {
        /// Image file to analyze
        #[arg(short, long)]
        image: String,
    },
}

pub async fn run(connection: Connection, command: Command) -> anyhow::Result<()> {
    run_to(connection, command, io::stdout()).await
}

/// Run `command`, writing what would be rendered to `out`.
pub async fn run_to<W: Write>(connection: Connection, command: Command, out: W) -> anyhow::Result<()> {
    let config = connection.config();
    match command {
        Command::Locate { lat, lon } => guide::run_locate(config, lat, lon, out).await,
        Command::Guide {
            lat,
            lon,
            category,
            item,
        } => {
            guide::run_guide(config, lat, lon, category.as_deref(), item.as_deref(), out).await
        }
        Command::Legacy { city, district } => {
            guide::run_legacy(config, &city, &district, out).await
        }
        Command::Chat {
            message,
            image,
            location,
        } => chat::run_chat(config, &message, image.as_deref(), &location, out).await,
        Command::Analyze { image } => chat::run_analyze(config, &image, out).await,
    }
}
