//! Frame-driven simulation layer.
//!
//! [`Simulation`] owns one [`ShowerSimulation`] per catalog record and
//! fans each host frame out to them. Determinism is seed-based: the
//! master seed derives one child generator per shower, so a fixed seed
//! and tick sequence always replays the same sky.

pub mod meteor;
pub mod shower;

pub use meteor::Meteor;
pub use shower::{enabled, ShowerSimulation, ShowerStatus};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use crate::api::{MeteorState, RadiantMarker};
use crate::catalog::Catalog;
use crate::config::SimulationSettings;
use crate::models::time::JulianDay;

/// Per-frame inputs from the host clock.
#[derive(Debug, Clone, Copy)]
pub struct TickContext {
    /// Simulated instant, Julian day.
    pub jd: JulianDay,
    /// Frame length in simulated seconds.
    pub dt_seconds: f64,
    /// Whether simulated time advances; spawning stops in reverse.
    pub running_forward: bool,
}

/// The whole shower field.
pub struct Simulation {
    showers: Vec<ShowerSimulation>,
    settings: SimulationSettings,
    active: bool,
}

impl Simulation {
    /// Build one shower simulation per catalog record.
    ///
    /// Records that fail validation stay in the list as invalid inert
    /// entries, so catalog position survives for diagnostics. Pass a
    /// seed to get a reproducible meteor sequence; `None` seeds from
    /// the thread generator.
    pub fn from_catalog(catalog: &Catalog, settings: SimulationSettings, seed: Option<u64>) -> Self {
        let mut master = match seed {
            Some(seed) => ChaChaRng::seed_from_u64(seed),
            None => ChaChaRng::seed_from_u64(rand::rng().random()),
        };
        let showers = catalog
            .records()
            .iter()
            .map(|record| {
                let child = ChaChaRng::seed_from_u64(master.random());
                ShowerSimulation::from_record(record, child)
            })
            .collect();
        let active = settings.enable_at_startup;
        log::debug!("simulation ready, active={active}");
        Self {
            showers,
            settings,
            active,
        }
    }

    /// Advance every shower by one frame. A deactivated simulation
    /// ignores ticks entirely and keeps its state frozen.
    pub fn update(&mut self, jd: impl Into<JulianDay>, dt_seconds: f64, running_forward: bool) {
        if !self.active {
            return;
        }
        let tick = TickContext {
            jd: jd.into(),
            dt_seconds,
            running_forward,
        };
        for shower in &mut self.showers {
            shower.update(&tick, &self.settings);
        }
    }

    /// Master on/off switch, the catalog stays loaded either way.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Mutable settings access; changes apply from the next tick.
    pub fn settings_mut(&mut self) -> &mut SimulationSettings {
        &mut self.settings
    }

    /// All shower entries in catalog order, invalid ones included.
    pub fn showers(&self) -> &[ShowerSimulation] {
        &self.showers
    }

    /// Look a shower up by its catalog identifier.
    pub fn shower(&self, shower_id: &str) -> Option<&ShowerSimulation> {
        self.showers
            .iter()
            .find(|s| s.shower_id().eq_ignore_ascii_case(shower_id))
    }

    /// Number of showers active on the last ticked date.
    pub fn active_count(&self) -> usize {
        self.showers
            .iter()
            .filter(|s| {
                matches!(
                    s.status(),
                    ShowerStatus::ActiveGeneric | ShowerStatus::ActiveConfirmed
                )
            })
            .count()
    }

    /// Radiant markers for every displayable shower.
    pub fn markers(&self) -> Vec<RadiantMarker> {
        self.showers
            .iter()
            .filter_map(|s| s.marker(&self.settings))
            .collect()
    }

    /// Snapshots of every meteor currently in flight.
    pub fn meteor_states(&self) -> Vec<MeteorState> {
        self.showers
            .iter()
            .flat_map(|s| s.meteors().iter().map(Meteor::state))
            .collect()
    }
}
