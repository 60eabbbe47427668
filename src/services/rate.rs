//! Hourly-rate model.
//!
//! The activity curve is a Gaussian centered on the window's peak with
//! piecewise standard deviation: half the start-to-peak span on the way
//! up, half the peak-to-finish span on the way down. Variable showers
//! ride on a baseline equal to their quoted minimum.

use crate::models::shower::ActivityWindow;
use crate::models::time::julian_day_number;

/// Expected zenithal hourly rate at Julian day `jd`.
///
/// Rounded to the nearest whole meteor per hour and clamped to zero
/// from below.
pub fn expected_zhr(window: &ActivityWindow, jd: f64) -> i32 {
    let start = julian_day_number(window.start) as f64;
    let finish = julian_day_number(window.finish) as f64;
    let peak = julian_day_number(window.peak) as f64;

    let sd = if jd >= start && jd < peak {
        (peak - start) / 2.0
    } else {
        (finish - peak) / 2.0
    };

    let amplitude = window.zhr.amplitude();
    let floor = window.zhr.floor();
    let value = if sd > 0.0 {
        amplitude * (-((jd - peak) * (jd - peak)) / (sd * sd)).exp() + floor
    } else if jd == peak {
        // zero-width side: the curve collapses onto the peak instant
        amplitude + floor
    } else {
        floor
    };

    value.round().max(0.0) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shower::ZhrProfile;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window(zhr: ZhrProfile) -> ActivityWindow {
        ActivityWindow {
            year: 2010,
            zhr,
            start: date(2010, 8, 2),
            finish: date(2010, 8, 17),
            peak: date(2010, 8, 12),
        }
    }

    #[test]
    fn test_rate_at_peak_equals_amplitude() {
        let w = window(ZhrProfile::Fixed(10));
        let peak_jd = julian_day_number(w.peak) as f64;
        assert_eq!(expected_zhr(&w, peak_jd), 10);
    }

    #[test]
    fn test_rate_one_rising_sd_from_peak() {
        // five days before an Aug 2 -> Aug 12 rise is exactly one sigma
        let w = window(ZhrProfile::Fixed(10));
        let jd = julian_day_number(w.peak) as f64 - 5.0;
        assert_eq!(expected_zhr(&w, jd), (10.0 * (-1.0f64).exp()).round() as i32);
    }

    #[test]
    fn test_rate_is_asymmetric_around_peak() {
        // rising sd is 5 days, falling sd is 2.5 days
        let w = window(ZhrProfile::Fixed(100));
        let peak_jd = julian_day_number(w.peak) as f64;
        let rising = expected_zhr(&w, peak_jd - 2.0);
        let falling = expected_zhr(&w, peak_jd + 2.0);
        assert!(rising > falling, "rising {rising} <= falling {falling}");
    }

    #[test]
    fn test_rate_far_from_peak_decays_to_zero() {
        let w = window(ZhrProfile::Fixed(100));
        let jd = julian_day_number(w.finish) as f64 + 30.0;
        assert_eq!(expected_zhr(&w, jd), 0);
    }

    #[test]
    fn test_variable_profile_keeps_baseline() {
        let w = window(ZhrProfile::Variable { min: 20, max: 100 });
        let peak_jd = julian_day_number(w.peak) as f64;
        assert_eq!(expected_zhr(&w, peak_jd), 120);
        let far = expected_zhr(&w, peak_jd + 40.0);
        assert_eq!(far, 20);
    }

    #[test]
    fn test_single_day_window_spikes_at_peak_only() {
        let w = ActivityWindow {
            year: 2010,
            zhr: ZhrProfile::Fixed(50),
            start: date(2010, 8, 12),
            finish: date(2010, 8, 12),
            peak: date(2010, 8, 12),
        };
        let peak_jd = julian_day_number(w.peak) as f64;
        assert_eq!(expected_zhr(&w, peak_jd), 50);
        assert_eq!(expected_zhr(&w, peak_jd + 0.4), 0);
        assert_eq!(expected_zhr(&w, peak_jd - 0.4), 0);
    }

    proptest! {
        #[test]
        fn prop_rate_is_never_negative(offset in -40.0f64..40.0, zhr in 1i32..2000) {
            let w = window(ZhrProfile::Fixed(zhr));
            let jd = julian_day_number(w.peak) as f64 + offset;
            prop_assert!(expected_zhr(&w, jd) >= 0);
        }

        #[test]
        fn prop_rate_never_exceeds_amplitude_plus_floor(offset in -40.0f64..40.0) {
            let w = window(ZhrProfile::Variable { min: 15, max: 90 });
            let jd = julian_day_number(w.peak) as f64 + offset;
            prop_assert!(expected_zhr(&w, jd) <= 105);
        }
    }
}
