//! Per-shower simulation driver.
//!
//! [`ShowerSimulation`] owns one shower's validated definition, its
//! live meteors and a dedicated random generator, and re-derives the
//! activity status from the simulated clock on every tick. A record
//! that fails validation still gets an entry here; it just stays
//! invalid and inert for the lifetime of the catalog.

use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

use crate::api::{RadiantMarker, ShowerInfo};
use crate::config::SimulationSettings;
use crate::models::record::ShowerRecord;
use crate::models::shower::{ActivityWindow, ShowerDefinition};
use crate::models::time::julian_day_number;
use crate::services::activity::{self, ActivityMatch};
use crate::services::{rate, solar};
use crate::sim::meteor::Meteor;
use crate::sim::TickContext;

/// Activity status, re-derived on every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShowerStatus {
    /// The catalog record failed validation; permanently inert.
    Invalid,
    /// No tick has run yet.
    Undefined,
    /// The current date falls outside every activity window.
    Inactive,
    /// Active through the projected generic template.
    ActiveGeneric,
    /// Active through a confirmed per-year window.
    ActiveConfirmed,
}

impl ShowerStatus {
    /// Data-quality label for the info panel.
    pub fn label(&self) -> &'static str {
        match self {
            ShowerStatus::Invalid => "invalid",
            ShowerStatus::Undefined => "undefined",
            ShowerStatus::Inactive => "inactive",
            ShowerStatus::ActiveGeneric => "generic data",
            ShowerStatus::ActiveConfirmed => "confirmed data",
        }
    }
}

/// Display gate for a shower in the given status.
///
/// Invalid showers never display. Undefined ones always do, so a fresh
/// catalog shows its radiants before the first tick lands. Otherwise
/// the "active radiants only" setting decides whether inactive showers
/// stay visible.
pub fn enabled(status: ShowerStatus, settings: &SimulationSettings) -> bool {
    match status {
        ShowerStatus::Invalid => false,
        ShowerStatus::Undefined => true,
        ShowerStatus::ActiveGeneric | ShowerStatus::ActiveConfirmed => true,
        ShowerStatus::Inactive => !settings.active_radiant_only,
    }
}

/// One shower's live simulation state.
pub struct ShowerSimulation {
    shower_id: String,
    definition: Option<ShowerDefinition>,
    status: ShowerStatus,
    current_activity: Option<ActivityWindow>,
    /// Drifted radiant right ascension, radians.
    radiant_alpha: f64,
    /// Drifted radiant declination, radians.
    radiant_delta: f64,
    marker_opacity: f32,
    active_meteors: Vec<Meteor>,
    rng: ChaChaRng,
}

impl ShowerSimulation {
    /// Build from a raw catalog record.
    ///
    /// A record that fails validation is kept as a permanently invalid
    /// entry; the rejection is logged once here and the entry never
    /// activates, draws or spawns.
    pub fn from_record(record: &ShowerRecord, rng: ChaChaRng) -> Self {
        match ShowerDefinition::from_record(record) {
            Ok(definition) => Self {
                shower_id: definition.shower_id.clone(),
                radiant_alpha: definition.radiant_alpha,
                radiant_delta: definition.radiant_delta,
                definition: Some(definition),
                status: ShowerStatus::Undefined,
                current_activity: None,
                marker_opacity: 0.85,
                active_meteors: Vec::new(),
                rng,
            },
            Err(err) => {
                let shower_id = record.shower_id.clone().unwrap_or_default();
                log::warn!("discarding shower record `{shower_id}`: {err}");
                Self {
                    shower_id,
                    definition: None,
                    status: ShowerStatus::Invalid,
                    current_activity: None,
                    radiant_alpha: 0.0,
                    radiant_delta: 0.0,
                    marker_opacity: 0.85,
                    active_meteors: Vec::new(),
                    rng,
                }
            }
        }
    }

    /// Advance one frame.
    ///
    /// Re-derives status and the drifted radiant from the tick's clock,
    /// ages out finished meteors and spawns new ones by Bernoulli
    /// thinning of the current hourly rate. Spawning requires forward-
    /// running time and a rate of at least one meteor per hour.
    pub fn update(&mut self, tick: &TickContext, settings: &SimulationSettings) {
        let Some(definition) = self.definition.as_ref() else {
            return;
        };
        let Some(today) = tick.jd.to_date() else {
            // clock outside the calendar range
            return;
        };

        let resolved = activity::resolve(definition, today);
        self.status = match resolved {
            Some((_, ActivityMatch::Confirmed)) => ShowerStatus::ActiveConfirmed,
            Some((_, ActivityMatch::Generic)) => ShowerStatus::ActiveGeneric,
            None => ShowerStatus::Inactive,
        };
        self.current_activity = resolved.map(|(window, _)| window);

        if !enabled(self.status, settings) {
            return;
        }

        self.radiant_alpha = definition.radiant_alpha;
        self.radiant_delta = definition.radiant_delta;
        if self.status != ShowerStatus::Inactive {
            if let Some(window) = self.current_activity.as_ref() {
                let days_from_peak = tick.jd.value() - julian_day_number(window.peak) as f64;
                self.radiant_alpha += definition.drift_alpha * days_from_peak;
                self.radiant_delta += definition.drift_delta * days_from_peak;
            }
        }

        // radiant markers twinkle slightly frame to frame
        self.marker_opacity = 0.85 + self.rng.random::<f32>() / 10.0;

        let dt = tick.dt_seconds;
        self.active_meteors.retain_mut(|meteor| meteor.update(dt));

        if !tick.running_forward {
            return;
        }
        let Some(window) = self.current_activity.as_ref() else {
            return;
        };
        let current_zhr = rate::expected_zhr(window, tick.jd.value());
        if current_zhr < 1 {
            return;
        }

        // expected meteors this frame, thinned over a bounded number of
        // Bernoulli draws so a long frame cannot dump an unbounded burst
        let meteors_per_frame = f64::from(current_zhr) * dt / 3600.0;
        let max_this_frame = (meteors_per_frame.round() as i64).max(1);
        let spawn_probability = meteors_per_frame / max_this_frame as f64;
        for _ in 0..max_this_frame {
            if self.rng.random::<f64>() < spawn_probability {
                if let Some(meteor) = Meteor::spawn(
                    &mut self.rng,
                    self.radiant_alpha,
                    self.radiant_delta,
                    definition.speed,
                    definition.population_index,
                    &definition.colors,
                ) {
                    self.active_meteors.push(meteor);
                }
            }
        }
    }

    /// Catalog identifier.
    pub fn shower_id(&self) -> &str {
        &self.shower_id
    }

    /// Validated definition; `None` for invalid records.
    pub fn definition(&self) -> Option<&ShowerDefinition> {
        self.definition.as_ref()
    }

    pub fn status(&self) -> ShowerStatus {
        self.status
    }

    /// Window governing the last tick's date, if any.
    pub fn current_activity(&self) -> Option<&ActivityWindow> {
        self.current_activity.as_ref()
    }

    /// Drifted radiant position, radians.
    pub fn radiant(&self) -> (f64, f64) {
        (self.radiant_alpha, self.radiant_delta)
    }

    /// Live meteors in flight.
    pub fn meteors(&self) -> &[Meteor] {
        &self.active_meteors
    }

    /// Whether the shower displays under the given settings.
    pub fn is_enabled(&self, settings: &SimulationSettings) -> bool {
        enabled(self.status, settings)
    }

    /// Name for labels: the designation when the catalog has one.
    pub fn display_name(&self) -> &str {
        match &self.definition {
            Some(def) if !def.designation.is_empty() => &def.designation,
            _ => &self.shower_id,
        }
    }

    /// Radiant marker for the renderer, honoring the display settings.
    pub fn marker(&self, settings: &SimulationSettings) -> Option<RadiantMarker> {
        if !settings.show_radiant_markers || !self.is_enabled(settings) {
            return None;
        }
        self.definition.as_ref()?;
        let [r, g, b] = settings.status_color(self.status);
        Some(RadiantMarker {
            alpha: self.radiant_alpha,
            delta: self.radiant_delta,
            color: [
                f32::from(r) / 255.0,
                f32::from(g) / 255.0,
                f32::from(b) / 255.0,
            ],
            opacity: self.marker_opacity,
            label: settings
                .show_radiant_labels
                .then(|| self.display_name().to_owned()),
        })
    }

    /// Info-panel summary. `None` while the shower is hidden.
    pub fn info(&self, settings: &SimulationSettings) -> Option<ShowerInfo> {
        let definition = self.definition.as_ref()?;
        if !self.is_enabled(settings) {
            return None;
        }
        Some(ShowerInfo {
            name: self.display_name().to_owned(),
            iau_code: definition.iau_code().map(str::to_owned),
            status: self.status,
            radiant_alpha: self.radiant_alpha,
            radiant_delta: self.radiant_delta,
            drift_alpha: definition.drift_alpha,
            drift_delta: definition.drift_delta,
            speed: definition.speed,
            population_index: definition.population_index,
            parent: definition.parent_obj.clone(),
            activity: self.current_activity.clone(),
            solar_longitude_at_peak: self
                .current_activity
                .as_ref()
                .map(|window| solar::solar_longitude(window.peak)),
        })
    }
}
