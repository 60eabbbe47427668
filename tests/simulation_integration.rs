//! End-to-end simulation tests over the bundled catalog.
//!
//! Each test drives `Simulation::update` with a synthetic clock and
//! checks the observable surface: statuses, activity windows, radiant
//! markers, meteor snapshots and the info card.

mod support;

use chrono::NaiveDate;
use meteor_showers::models::time::JulianDay;
use meteor_showers::{ShowerStatus, ZhrProfile};

fn noon(year: i32, month: u32, day: u32) -> JulianDay {
    JulianDay::from_date(NaiveDate::from_ymd_opt(year, month, day).unwrap())
}

// ==================== Status resolution ====================

#[test]
fn test_perseids_active_on_peak_day() {
    let mut sim = support::seeded_simulation(11);

    for _ in 0..5 {
        sim.update(noon(2010, 8, 12), 120.0, true);
    }

    let per = sim.shower("PER").unwrap();
    assert_eq!(per.status(), ShowerStatus::ActiveGeneric);
    let window = per.current_activity().unwrap();
    assert_eq!(window.year, 2010);
    assert_eq!(window.zhr, ZhrProfile::Fixed(100));
    assert_eq!(window.start, NaiveDate::from_ymd_opt(2010, 7, 17).unwrap());
    assert_eq!(window.finish, NaiveDate::from_ymd_opt(2010, 8, 24).unwrap());

    // nothing else is in season in mid August
    for id in ["GEM", "LEO", "QUA"] {
        assert_eq!(sim.shower(id).unwrap().status(), ShowerStatus::Inactive);
    }
    assert_eq!(sim.active_count(), 1);
}

#[test]
fn test_quadrantids_window_spans_new_year() {
    let mut sim = support::seeded_simulation(3);

    sim.update(noon(2020, 12, 30), 120.0, true);
    let december = sim
        .shower("QUA")
        .unwrap()
        .current_activity()
        .cloned()
        .expect("active in late December");
    assert_eq!(sim.shower("QUA").unwrap().status(), ShowerStatus::ActiveGeneric);
    assert_eq!(december.year, 2020);
    assert_eq!(december.start, NaiveDate::from_ymd_opt(2020, 12, 28).unwrap());
    assert_eq!(december.peak, NaiveDate::from_ymd_opt(2021, 1, 3).unwrap());
    assert_eq!(december.finish, NaiveDate::from_ymd_opt(2021, 1, 12).unwrap());

    // the same window still governs after the year rolls over
    sim.update(noon(2021, 1, 2), 120.0, true);
    let january = sim
        .shower("QUA")
        .unwrap()
        .current_activity()
        .cloned()
        .expect("still active in early January");
    assert_eq!(january, december);
}

#[test]
fn test_leonids_confirmed_year_takes_precedence() {
    let mut sim = support::seeded_simulation(5);

    sim.update(noon(2002, 11, 17), 60.0, true);
    let leo = sim.shower("LEO").unwrap();
    assert_eq!(leo.status(), ShowerStatus::ActiveConfirmed);
    let window = leo.current_activity().unwrap();
    assert_eq!(window.year, 2002);
    assert_eq!(window.zhr, ZhrProfile::Variable { min: 2500, max: 3000 });

    // a year with no confirmed entry falls back to the generic window
    sim.update(noon(2010, 11, 17), 60.0, true);
    let leo = sim.shower("LEO").unwrap();
    assert_eq!(leo.status(), ShowerStatus::ActiveGeneric);
    assert_eq!(leo.current_activity().unwrap().zhr, ZhrProfile::Fixed(15));
}

// ==================== Markers ====================

#[test]
fn test_active_radiant_only_gates_markers() {
    let mut sim = support::seeded_simulation(9);

    sim.update(noon(2010, 8, 12), 120.0, true);
    let markers = sim.markers();
    assert_eq!(markers.len(), 1);
    let marker = &markers[0];
    assert_eq!(marker.label.as_deref(), Some("Perseids"));
    // generic-data activity color, 8-bit [0, 255, 240] scaled to [0, 1]
    assert!(marker.color[0].abs() < 1e-6);
    assert!((marker.color[1] - 1.0).abs() < 1e-6);
    assert!((marker.color[2] - 240.0 / 255.0).abs() < 1e-6);
    assert!((0.85..=0.95).contains(&marker.opacity));
    // on the peak day the radiant sits exactly at the catalog position
    assert!((marker.alpha - 48.2f64.to_radians()).abs() < 1e-9);
    assert!((marker.delta - 58.0f64.to_radians()).abs() < 1e-9);

    sim.settings_mut().active_radiant_only = false;
    sim.update(noon(2010, 8, 12), 120.0, true);
    assert_eq!(sim.markers().len(), 4);

    sim.settings_mut().show_radiant_labels = false;
    assert!(sim.markers().iter().all(|m| m.label.is_none()));

    sim.settings_mut().show_radiant_markers = false;
    assert!(sim.markers().is_empty());
}

#[test]
fn test_radiant_drifts_away_from_peak() {
    let mut sim = support::seeded_simulation(15);

    sim.update(noon(2010, 8, 12), 120.0, true);
    let at_peak = sim.shower("PER").unwrap().radiant();

    sim.update(noon(2010, 8, 17), 120.0, true);
    let later = sim.shower("PER").unwrap().radiant();

    // five days past the peak, drift is five single-day steps
    let expected_alpha = at_peak.0 + 5.0 * 7.0f64.to_radians() / 5.0;
    let expected_delta = at_peak.1 + 5.0 * 1.0f64.to_radians() / 5.0;
    assert!((later.0 - expected_alpha).abs() < 1e-9);
    assert!((later.1 - expected_delta).abs() < 1e-9);
}

// ==================== Meteor spawning ====================

#[test]
fn test_meteors_spawn_over_perseids_peak() {
    let mut sim = support::seeded_simulation(7);

    // an hour-long frame at ZHR 100 asks for a hundred draws
    let mut last_count = 0;
    for _ in 0..10 {
        sim.update(noon(2010, 8, 12), 3600.0, true);
        last_count = sim.meteor_states().len();
        assert!(last_count <= 100, "burst cap exceeded: {last_count}");
    }
    assert!(
        last_count >= 50,
        "far fewer meteors than the rate predicts: {last_count}"
    );

    for state in sim.meteor_states() {
        assert!((70.0..=115.0).contains(&state.altitude_km));
        assert!(state.ground_range_km <= 457.8 + 1e-9);
        assert!((0.0..=1.0).contains(&(state.brightness as f64)));
        assert!((0.0..std::f64::consts::TAU).contains(&state.bearing));
        assert!(state.color.iter().all(|c| (0.0..=1.0).contains(c)));
        assert!((state.radiant_alpha - 48.2f64.to_radians()).abs() < 1e-9);
    }
}

#[test]
fn test_spawn_rate_matches_expected_meteors_per_frame() {
    let mut sim = support::seeded_simulation(23);

    // ZHR 100 over a 3.6 s frame expects 0.1 meteors, thinned to a
    // single Bernoulli draw. A frame also outlives every track, so
    // each tick's count is just that tick's survivors.
    let ticks = 4000;
    let mut total = 0usize;
    for _ in 0..ticks {
        sim.update(noon(2010, 8, 12), 3.6, true);
        let spawned = sim.shower("PER").unwrap().meteors().len();
        assert!(spawned <= 1, "one draw per frame can spawn at most one meteor");
        total += spawned;
    }
    let mean = total as f64 / f64::from(ticks);
    assert!(
        (0.05..0.12).contains(&mean),
        "per-frame mean {mean} drifted from the expected 0.1 minus grazing losses"
    );
}

#[test]
fn test_time_reversal_never_spawns() {
    let mut sim = support::seeded_simulation(13);

    for _ in 0..20 {
        sim.update(noon(2010, 8, 12), 3600.0, false);
        assert!(sim.meteor_states().is_empty());
    }
}

#[test]
fn test_reversal_still_ages_out_existing_meteors() {
    let mut sim = support::seeded_simulation(29);

    let mut seen_any = false;
    for _ in 0..10 {
        sim.update(noon(2010, 8, 12), 3600.0, true);
        seen_any |= !sim.meteor_states().is_empty();
    }
    assert!(seen_any, "forward ticks at the peak should spawn");

    sim.update(noon(2010, 8, 12), 3600.0, false);
    assert!(sim.meteor_states().is_empty());
}

// ==================== Master switch ====================

#[test]
fn test_deactivated_simulation_freezes() {
    let mut sim = support::seeded_simulation(17);
    sim.set_active(false);
    assert!(!sim.is_active());

    sim.update(noon(2010, 8, 12), 3600.0, true);

    // no tick was processed, every shower still holds its initial state
    for shower in sim.showers() {
        assert_eq!(shower.status(), ShowerStatus::Undefined);
        assert!(shower.meteors().is_empty());
    }

    sim.set_active(true);
    sim.update(noon(2010, 8, 12), 3600.0, true);
    assert_eq!(sim.shower("PER").unwrap().status(), ShowerStatus::ActiveGeneric);
}

// ==================== Info card ====================

#[test]
fn test_info_for_active_perseids() {
    let mut sim = support::seeded_simulation(21);
    sim.update(noon(2010, 8, 12), 120.0, true);

    let info = sim
        .shower("PER")
        .unwrap()
        .info(sim.settings())
        .expect("active shower exposes an info card");
    assert_eq!(info.name, "Perseids");
    assert_eq!(info.iau_code.as_deref(), Some("PER"));
    assert_eq!(info.status, ShowerStatus::ActiveGeneric);
    assert_eq!(info.speed, 59);
    assert_eq!(info.parent, "Comet 109P/Swift-Tuttle");
    assert!(info.activity.is_some());
    let solar = info.solar_longitude_at_peak.expect("peak resolves");
    assert!((-1.0..359.0).contains(&solar));

    let card = info.to_string();
    assert!(card.starts_with("Perseids (PER)\n"), "card: {card}");
    assert!(card.contains("Type: meteor shower (generic data)"), "card: {card}");
    assert!(card.contains("Geocentric meteoric velocity: 59 km/s"), "card: {card}");
    assert!(card.contains("Activity: 17 July - 24 August"), "card: {card}");
    assert!(card.contains("Maximum: 12 August"), "card: {card}");
    assert!(card.contains("ZHR(max): 100"), "card: {card}");
}

#[test]
fn test_info_reports_variable_zhr_range() {
    let mut sim = support::seeded_simulation(25);
    sim.update(noon(2002, 11, 17), 120.0, true);

    let info = sim
        .shower("LEO")
        .unwrap()
        .info(sim.settings())
        .expect("confirmed outburst exposes an info card");
    assert_eq!(info.status, ShowerStatus::ActiveConfirmed);
    assert!(
        info.to_string().contains("ZHR(max): variable; 2500-3000"),
        "card: {info}"
    );
}
