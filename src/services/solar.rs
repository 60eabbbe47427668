//! Solar longitude for the info panel.

use chrono::NaiveDate;

use crate::models::time::julian_day_number;

/// Days between J2000.0 and the given date times the daily mean motion
/// give the Sun's mean ecliptical longitude, quoted the way meteor
/// catalogs do, one degree short of the mean value and folded to a
/// single turn.
pub fn solar_longitude(date: NaiveDate) -> f64 {
    let days_since_j2000 = (julian_day_number(date) - 2_451_545) as f64;
    let mean = 280.460 + 0.9856474 * days_since_j2000;
    (mean / 360.0).rem_euclid(1.0) * 360.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_solar_longitude_at_j2000() {
        // n = 0 folds 280.460 to 279.46
        let l = solar_longitude(date(2000, 1, 1));
        assert!((l - 279.46).abs() < 1e-9, "got {l}");
    }

    #[test]
    fn test_solar_longitude_advances_roughly_one_degree_per_day() {
        let a = solar_longitude(date(2010, 8, 12));
        let b = solar_longitude(date(2010, 8, 13));
        let step = (b - a).rem_euclid(360.0);
        assert!((step - 0.9856474).abs() < 1e-6, "got {step}");
    }

    #[test]
    fn test_solar_longitude_stays_in_range() {
        let mut day = date(2019, 1, 1);
        for _ in 0..730 {
            let l = solar_longitude(day);
            assert!((-1.0..359.0).contains(&l), "{day} gave {l}");
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_solar_longitude_before_j2000() {
        // negative day counts must fold into the same range
        let l = solar_longitude(date(1990, 6, 1));
        assert!((-1.0..359.0).contains(&l));
    }
}
