//! Public API surface for renderers and UI panels.
//!
//! This file consolidates the read-only DTO types the simulation hands
//! out each frame. All types derive Serialize for JSON export.

use std::fmt;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::models::angle;
use crate::models::shower::{ActivityWindow, ZhrProfile};
use crate::sim::shower::ShowerStatus;

/// Radiant marker ready for drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiantMarker {
    /// Right ascension, radians.
    pub alpha: f64,
    /// Declination, radians.
    pub delta: f64,
    /// Status color, linear RGB in [0, 1].
    pub color: [f32; 3],
    /// Twinkling opacity, re-rolled every frame.
    pub opacity: f32,
    /// Shower name, present only when labels are switched on.
    pub label: Option<String>,
}

/// Snapshot of one meteor in flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeteorState {
    /// Radiant the track points away from, radians.
    pub radiant_alpha: f64,
    pub radiant_delta: f64,
    /// Compass bearing of the track footprint, radians.
    pub bearing: f64,
    /// Ground range from the observer, km.
    pub ground_range_km: f64,
    /// Height above ground, km.
    pub altitude_km: f64,
    /// Display brightness in [0, 1].
    pub brightness: f32,
    /// Line color, linear RGB in [0, 1].
    pub color: [f32; 3],
}

/// Info-panel summary of one shower on the current date.
#[derive(Debug, Clone, Serialize)]
pub struct ShowerInfo {
    pub name: String,
    /// IAU code, absent for purely numeric catalog identifiers.
    pub iau_code: Option<String>,
    pub status: ShowerStatus,
    /// Drifted radiant position, radians.
    pub radiant_alpha: f64,
    pub radiant_delta: f64,
    /// Radiant drift, radians per day.
    pub drift_alpha: f64,
    pub drift_delta: f64,
    /// Entry speed, km/s; 0 when unknown.
    pub speed: i32,
    /// Population index r; 0 when unknown.
    pub population_index: f64,
    /// Parent comet or asteroid; empty when unknown.
    pub parent: String,
    /// Window governing the current date; absent while inactive.
    pub activity: Option<ActivityWindow>,
    /// Solar longitude of the peak, degrees.
    pub solar_longitude_at_peak: Option<f64>,
}

impl fmt::Display for ShowerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.iau_code {
            Some(code) => writeln!(f, "{} ({code})", self.name)?,
            None => writeln!(f, "{}", self.name)?,
        }
        writeln!(f, "Type: meteor shower ({})", self.status.label())?;
        writeln!(
            f,
            "Radiant: {}/{}",
            angle::to_hms_string(self.radiant_alpha),
            angle::to_dms_string(self.radiant_delta)
        )?;
        if self.drift_alpha != 0.0 || self.drift_delta != 0.0 {
            writeln!(
                f,
                "Radiant drift (per day): {}/{}",
                angle::to_hms_string(self.drift_alpha),
                angle::to_dms_string(self.drift_delta)
            )?;
        }
        if self.speed > 0 {
            writeln!(f, "Geocentric meteoric velocity: {} km/s", self.speed)?;
        }
        if self.population_index > 0.0 {
            writeln!(f, "The population index: {}", self.population_index)?;
        }
        if !self.parent.is_empty() {
            writeln!(f, "Parent body: {}", self.parent)?;
        }
        if let Some(window) = &self.activity {
            if window.start.month() == window.finish.month() {
                writeln!(
                    f,
                    "Active: {} - {} {}",
                    window.start.day(),
                    window.finish.day(),
                    window.start.format("%B")
                )?;
            } else {
                writeln!(
                    f,
                    "Activity: {} {} - {} {}",
                    window.start.day(),
                    window.start.format("%B"),
                    window.finish.day(),
                    window.finish.format("%B")
                )?;
            }
            match self.solar_longitude_at_peak {
                Some(solar) => writeln!(
                    f,
                    "Maximum: {} {} (Solar longitude {solar:.2}\u{b0})",
                    window.peak.day(),
                    window.peak.format("%B")
                )?,
                None => writeln!(
                    f,
                    "Maximum: {} {}",
                    window.peak.day(),
                    window.peak.format("%B")
                )?,
            }
            match window.zhr {
                ZhrProfile::Fixed(zhr) => writeln!(f, "ZHR(max): {zhr}")?,
                ZhrProfile::Variable { min, max } => {
                    writeln!(f, "ZHR(max): variable; {min}-{max}")?
                }
            }
        }
        Ok(())
    }
}
