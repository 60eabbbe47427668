//! # Meteor Showers Simulation Core
//!
//! Headless simulation engine for meteor shower activity in a desktop
//! planetarium.
//!
//! The crate loads a JSON shower catalog, validates each record into a
//! definition with gap-filled activity windows, and drives a per-frame
//! simulation that resolves every shower's activity status for the
//! simulated date, models its hourly rate as an asymmetric Gaussian
//! around the peak, and spawns short-lived meteor entities by
//! Bernoulli thinning of that rate. Rendering and UI stay outside;
//! the engine hands out plain data snapshots.
//!
//! ## Features
//!
//! - **Catalog Loading**: Parse the shower catalog from JSON format
//! - **Validation**: Reject broken records, keep the rest of the catalog
//! - **Activity Resolution**: Confirmed per-year windows over the
//!   projected generic template, with New Year spanning handled
//! - **Rate Model**: Asymmetric Gaussian ZHR curve with variable-rate
//!   baselines
//! - **Meteor Entities**: Seedable, reproducible spawn geometry with
//!   population-index magnitudes and weighted colors
//! - **Display Settings**: TOML-backed marker and filter settings
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) handed to renderers and panels
//! - [`catalog`]: Catalog document loading and fingerprinting
//! - [`config`]: Display settings and their TOML file support
//! - [`models`]: Validated domain types, catalog records, time and angles
//! - [`services`]: Pure date, rate and solar longitude computations
//! - [`sim`]: Frame-driven simulation state, showers and meteors

pub mod api;
pub mod catalog;
pub mod config;
pub mod models;
pub mod services;
pub mod sim;

pub use api::{MeteorState, RadiantMarker, ShowerInfo};
pub use catalog::Catalog;
pub use config::{SettingsError, SimulationSettings};
pub use models::shower::{
    ActivityWindow, DefinitionError, ShowerDefinition, ZhrProfile,
};
pub use sim::{Simulation, ShowerSimulation, ShowerStatus, TickContext};
