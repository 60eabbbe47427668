//! Catalog query services.
//!
//! Pure date and rate computations over validated shower definitions.
//! Nothing here touches simulation state; the `sim` layer drives these
//! from its per-frame update.

pub mod activity;
pub mod rate;
pub mod solar;

pub use activity::{project_template, resolve, ActivityMatch};
pub use rate::expected_zhr;
pub use solar::solar_longitude;
