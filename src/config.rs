//! Display settings file support.
//!
//! This module provides the display settings for the shower field and
//! utilities for reading them from TOML configuration files. Every
//! field has a default, so a missing or partial file still yields a
//! working configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::sim::shower::ShowerStatus;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Display settings for the shower field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSettings {
    /// Run the simulation as soon as the catalog loads.
    #[serde(default = "default_true")]
    pub enable_at_startup: bool,
    /// Hide radiants of showers outside any activity window.
    #[serde(default = "default_true")]
    pub active_radiant_only: bool,
    #[serde(default = "default_true")]
    pub show_radiant_markers: bool,
    #[serde(default = "default_true")]
    pub show_radiant_labels: bool,
    /// Marker color for confirmed-data activity, 8-bit RGB.
    #[serde(default = "default_color_active_confirmed")]
    pub color_active_confirmed: [u8; 3],
    /// Marker color for generic-data activity, 8-bit RGB.
    #[serde(default = "default_color_active_generic")]
    pub color_active_generic: [u8; 3],
    /// Marker color outside activity windows, 8-bit RGB.
    #[serde(default = "default_color_inactive")]
    pub color_inactive: [u8; 3],
}

fn default_true() -> bool {
    true
}

fn default_color_active_confirmed() -> [u8; 3] {
    [255, 240, 0]
}

fn default_color_active_generic() -> [u8; 3] {
    [0, 255, 240]
}

fn default_color_inactive() -> [u8; 3] {
    [255, 255, 255]
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            enable_at_startup: true,
            active_radiant_only: true,
            show_radiant_markers: true,
            show_radiant_labels: true,
            color_active_confirmed: default_color_active_confirmed(),
            color_active_generic: default_color_active_generic(),
            color_inactive: default_color_inactive(),
        }
    }
}

impl SimulationSettings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Marker color for a shower in the given status.
    pub fn status_color(&self, status: ShowerStatus) -> [u8; 3] {
        match status {
            ShowerStatus::ActiveConfirmed => self.color_active_confirmed,
            ShowerStatus::ActiveGeneric => self.color_active_generic,
            _ => self.color_inactive,
        }
    }
}
