//! Minimal tour of the simulation core.
//!
//! Loads the bundled catalog, steps an hourly clock across the
//! Perseids peak and prints what a renderer would consume:
//!
//! ```text
//! cargo run --example quick_look
//! ```

use anyhow::Result;
use chrono::NaiveDate;
use meteor_showers::models::time::JulianDay;
use meteor_showers::{Catalog, Simulation, SimulationSettings};

fn main() -> Result<()> {
    let catalog = Catalog::from_file("data/showers.json")?;
    println!(
        "loaded `{}` v{}: {} showers, sha256 {}",
        catalog.short_name,
        catalog.version,
        catalog.len(),
        &catalog.checksum[..12]
    );

    let mut sim = Simulation::from_catalog(&catalog, SimulationSettings::default(), Some(42));

    let peak = NaiveDate::from_ymd_opt(2026, 8, 12).expect("valid date");
    let base = JulianDay::from_date(peak).value();
    for hour in 0..6 {
        sim.update(base + f64::from(hour) / 24.0, 3600.0, true);
        println!(
            "hour {hour}: {} shower(s) active, {} meteor(s) in flight",
            sim.active_count(),
            sim.meteor_states().len()
        );
    }

    println!();
    for marker in sim.markers() {
        let name = marker.label.as_deref().unwrap_or("(unnamed)");
        println!(
            "radiant of {name}: alpha {:.4} rad, delta {:.4} rad, opacity {:.2}",
            marker.alpha, marker.delta, marker.opacity
        );
    }

    if let Some(info) = sim.shower("PER").and_then(|s| s.info(sim.settings())) {
        println!();
        print!("{info}");
    }
    Ok(())
}
