//! Transient meteor entities.
//!
//! A meteor is a short-lived track through the visibility dome around
//! the observer: it ignites on the entry shell, descends obliquely and
//! burns out on the burnout shell. Geometry, magnitude and color are
//! all drawn from the owning shower's generator at spawn time; after
//! that the entity only ages.

use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::api::MeteorState;
use crate::models::shower::ColorPair;

/// Altitude at which meteors ignite, km above ground.
const ENTRY_ALTITUDE_KM: f64 = 115.0;
/// Altitude at which meteors burn out, km above ground.
const BURNOUT_ALTITUDE_KM: f64 = 70.0;
/// Ground range beyond which a burnout at 70 km sits below the horizon.
const VISIBLE_RANGE_KM: f64 = 457.8;
/// Steepest accepted entry obliquity, radians from vertical (about 70 degrees).
const MAX_OBLIQUITY_RAD: f64 = 1.22;
/// Sampled apparent magnitude band.
const MAG_BRIGHTEST: i32 = -2;
const MAG_FAINTEST: i32 = 6;

/// One live meteor.
#[derive(Debug, Clone)]
pub struct Meteor {
    radiant_alpha: f64,
    radiant_delta: f64,
    /// Compass bearing of the track footprint, radians.
    bearing: f64,
    /// Ground range of the ignition point, km from the observer.
    entry_range_km: f64,
    /// Ground range of the burnout point, km from the observer.
    burnout_range_km: f64,
    /// Visible flight time, seconds.
    duration: f64,
    age: f64,
    magnitude: f64,
    color: [f32; 3],
}

impl Meteor {
    /// Draw a fresh track from the shower's spawn distribution.
    ///
    /// Ignition points are spread area-uniformly over the visibility
    /// dome's footprint. Returns `None` when the drawn track burns out
    /// beyond the visible range or the shower carries no usable entry
    /// speed; callers simply skip those draws.
    pub(crate) fn spawn(
        rng: &mut ChaChaRng,
        radiant_alpha: f64,
        radiant_delta: f64,
        speed_kms: i32,
        population_index: f64,
        colors: &[ColorPair],
    ) -> Option<Meteor> {
        if speed_kms <= 0 {
            return None;
        }

        let bearing = rng.random::<f64>() * std::f64::consts::TAU;
        let entry_range_km = VISIBLE_RANGE_KM * rng.random::<f64>().sqrt();
        let obliquity = rng.random::<f64>() * MAX_OBLIQUITY_RAD;

        let descent_km = ENTRY_ALTITUDE_KM - BURNOUT_ALTITUDE_KM;
        let burnout_range_km = entry_range_km + descent_km * obliquity.tan();
        if burnout_range_km > VISIBLE_RANGE_KM {
            // grazing track, burns out beyond the horizon
            return None;
        }

        let horizontal_km = burnout_range_km - entry_range_km;
        let path_km = (descent_km * descent_km + horizontal_km * horizontal_km).sqrt();
        let duration = path_km / f64::from(speed_kms);

        Some(Meteor {
            radiant_alpha,
            radiant_delta,
            bearing,
            entry_range_km,
            burnout_range_km,
            duration,
            age: 0.0,
            magnitude: sample_magnitude(rng, population_index),
            color: sample_color(rng, colors),
        })
    }

    /// Advance by `dt` seconds. Returns false once the track has fully
    /// played out and the entity should be dropped.
    pub fn update(&mut self, dt: f64) -> bool {
        self.age += dt;
        self.age < self.duration
    }

    /// Flight progress in [0, 1].
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.age / self.duration).clamp(0.0, 1.0)
    }

    /// Current altitude, km above ground.
    pub fn altitude_km(&self) -> f64 {
        ENTRY_ALTITUDE_KM - (ENTRY_ALTITUDE_KM - BURNOUT_ALTITUDE_KM) * self.progress()
    }

    /// Current ground range from the observer, km.
    pub fn ground_range_km(&self) -> f64 {
        self.entry_range_km + (self.burnout_range_km - self.entry_range_km) * self.progress()
    }

    /// Apparent magnitude drawn at spawn.
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Display brightness in [0, 1]: the magnitude's luminance scaled
    /// by a fade-in/fade-out envelope over the flight.
    pub fn brightness(&self) -> f32 {
        let p = self.progress();
        let envelope = 4.0 * p * (1.0 - p);
        let luminance = 10f64.powf(-0.4 * (self.magnitude - f64::from(MAG_BRIGHTEST)));
        (envelope * luminance).clamp(0.0, 1.0) as f32
    }

    /// Snapshot for the renderer.
    pub fn state(&self) -> MeteorState {
        MeteorState {
            radiant_alpha: self.radiant_alpha,
            radiant_delta: self.radiant_delta,
            bearing: self.bearing,
            ground_range_km: self.ground_range_km(),
            altitude_km: self.altitude_km(),
            brightness: self.brightness(),
            color: self.color,
        }
    }
}

/// Draw an apparent magnitude from the population-index distribution.
///
/// Meteor counts grow by a factor r per magnitude step, so the band is
/// split into whole-magnitude bins weighted r^k and the draw lands
/// uniformly inside the chosen bin. A population index at or below 1
/// carries no information and falls back to a uniform draw.
fn sample_magnitude(rng: &mut ChaChaRng, population_index: f64) -> f64 {
    let band = f64::from(MAG_FAINTEST - MAG_BRIGHTEST);
    if population_index <= 1.0 {
        return f64::from(MAG_BRIGHTEST) + rng.random::<f64>() * band;
    }

    let bins = (MAG_FAINTEST - MAG_BRIGHTEST) as u32;
    let total: f64 = (0..bins).map(|k| population_index.powi(k as i32)).sum();
    let roll = rng.random::<f64>() * total;
    let mut cumulative = 0.0;

    for k in 0..bins {
        cumulative += population_index.powi(k as i32);
        if roll < cumulative {
            return f64::from(MAG_BRIGHTEST) + f64::from(k) + rng.random::<f64>();
        }
    }

    f64::from(MAG_FAINTEST)
}

/// Draw a color name from the shower's percent-weighted distribution
/// and map it to the renderer's line color.
fn sample_color(rng: &mut ChaChaRng, colors: &[ColorPair]) -> [f32; 3] {
    let roll = (rng.random::<f64>() * 100.0) as i32;
    let mut cumulative = 0;

    for pair in colors {
        cumulative += pair.intensity;
        if roll < cumulative {
            return color_rgb(&pair.name);
        }
    }

    color_rgb(colors.last().map(|c| c.name.as_str()).unwrap_or("white"))
}

fn color_rgb(name: &str) -> [f32; 3] {
    match name {
        "violet" => [0.69, 0.26, 0.67],
        "blueGreen" => [0.0, 1.0, 0.65],
        "yellow" => [1.0, 1.0, 0.17],
        "orangeYellow" => [1.0, 0.78, 0.0],
        "red" => [1.0, 0.04, 0.0],
        _ => [1.0, 1.0, 1.0],
    }
}
