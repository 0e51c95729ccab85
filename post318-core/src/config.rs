//! Server configuration.
//!
//! Loaded from a TOML file when one exists; every field has a sensible
//! default so the server runs with no config file at all.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Post318Error, Post318Result};

/// Published-CSV URL of the events spreadsheet.
const DEFAULT_FEED_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRS7HO8nlnTebUouAj1iUIaGRCj77ntYr7486A05BfxyPYJSZPeD0Ohxc_hKaYkElPaQ4Xkldp4gopI/pub?output=csv";

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_refresh_interval() -> String {
    "10m".to_string()
}

fn default_window_months() -> u32 {
    12
}

fn default_upcoming_limit() -> usize {
    5
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_feed_url")]
    pub feed_url: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Feed poll interval in humantime format ("10m", "300s").
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: String,

    /// How many months ahead to expand the recurrence catalog.
    #[serde(default = "default_window_months")]
    pub window_months: u32,

    /// Cap on the upcoming-events list.
    #[serde(default = "default_upcoming_limit")]
    pub upcoming_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            feed_url: default_feed_url(),
            port: default_port(),
            refresh_interval: default_refresh_interval(),
            window_months: default_window_months(),
            upcoming_limit: default_upcoming_limit(),
        }
    }
}

impl ServerConfig {
    /// Load from a TOML file, falling back to defaults when it is absent.
    pub fn load(path: &Path) -> Post318Result<Self> {
        if !path.exists() {
            return Ok(ServerConfig::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Post318Error::Config(e.to_string()))
    }

    /// Parsed refresh interval.
    pub fn refresh_interval(&self) -> Post318Result<Duration> {
        humantime::parse_duration(&self.refresh_interval).map_err(|e| {
            Post318Error::Config(format!(
                "invalid refresh_interval '{}': {}",
                self.refresh_interval, e
            ))
        })
    }
}
