//! Configuration management for the Citewise view-state crates
//!
//! Supports loading configuration from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config.toml)
//! - Default values

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::Result;

/// Main UI configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UiConfig {
    /// Citation row layout constants
    #[serde(default)]
    pub layout: LayoutSection,

    /// Document listing defaults
    #[serde(default)]
    pub listing: ListingSection,
}

/// Citation row layout constants
///
/// Widths are in the same units as the measured pill widths supplied by the
/// rendering layer (pixels in practice).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LayoutSection {
    /// Horizontal space between adjacent resource pills
    #[serde(default = "default_inter_item_gap")]
    pub inter_item_gap: f64,

    /// Space reserved for the row title preceding the pills
    #[serde(default = "default_reserved_margin")]
    pub reserved_margin: f64,

    /// Width of the "+N" / collapse toggle control
    #[serde(default = "default_toggle_width")]
    pub toggle_width: f64,
}

/// Document listing defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListingSection {
    /// Default page size for document lists
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Keyword search debounce window in milliseconds
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

fn default_inter_item_gap() -> f64 { 4.0 }
fn default_reserved_margin() -> f64 { 40.0 }
fn default_toggle_width() -> f64 { 34.0 }
fn default_page_size() -> u32 { 25 }
fn default_search_debounce_ms() -> u64 { 500 }

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            inter_item_gap: default_inter_item_gap(),
            reserved_margin: default_reserved_margin(),
            toggle_width: default_toggle_width(),
        }
    }
}

impl Default for ListingSection {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

impl ListingSection {
    /// Get the search debounce window as a Duration
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

impl UiConfig {
    /// Load configuration from environment and files
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            // Load base config file
            .add_source(File::with_name("config").required(false))
            // Load from environment variables with APP__ prefix
            // e.g., APP__LAYOUT__TOGGLE_WIDTH=40
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: UiConfig = config.try_deserialize()?;
        tracing::debug!(
            page_size = config.listing.page_size,
            toggle_width = config.layout.toggle_width,
            "loaded UI configuration"
        );
        Ok(config)
    }

    /// Load from a specific TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
