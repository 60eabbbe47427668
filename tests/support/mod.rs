//! Shared helpers for the integration test suite.

use std::path::PathBuf;

use meteor_showers::{Catalog, Simulation, SimulationSettings};

/// Path to the shower catalog bundled with the crate.
pub fn catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/showers.json")
}

/// Loads the bundled catalog, panicking on any I/O or schema problem so
/// tests fail loudly when the data file is broken.
pub fn load_catalog() -> Catalog {
    Catalog::from_file(catalog_path()).expect("bundled catalog should load")
}

/// A simulation over the bundled catalog with default settings and a
/// fixed seed, so every test run draws the same random sequence.
#[allow(dead_code)]
pub fn seeded_simulation(seed: u64) -> Simulation {
    Simulation::from_catalog(&load_catalog(), SimulationSettings::default(), Some(seed))
}
