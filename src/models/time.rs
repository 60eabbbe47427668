use chrono::{Datelike, NaiveDate};
use serde::*;

/// Offset between chrono's day count (0001-01-01 = day 1, proleptic
/// Gregorian) and the Julian day number of the same civil date.
const JDN_OF_CE_DAY_ZERO: i64 = 1_721_425;

/// Julian Date representation.
/// JD 0 = -4713-11-24 12:00:00 UTC (proleptic Gregorian)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDay(f64);

impl JulianDay {
    /// Create a new JD value.
    pub fn new<V: Into<f64>>(v: V) -> Self {
        Self(v.into())
    }

    /// Raw JD value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Civil date holding this instant.
    ///
    /// The integer part of the day count selects the date, so the civil
    /// day flips at noon UT, exactly like the catalog dates were written.
    /// Returns `None` when the value lies outside the representable
    /// calendar range.
    pub fn to_date(&self) -> Option<NaiveDate> {
        let jdn = self.0 as i64;
        let days_from_ce = i32::try_from(jdn - JDN_OF_CE_DAY_ZERO).ok()?;
        NaiveDate::from_num_days_from_ce_opt(days_from_ce)
    }

    /// JD of noon UT on the given civil date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(julian_day_number(date) as f64)
    }
}

impl From<f64> for JulianDay {
    fn from(v: f64) -> Self {
        JulianDay::new(v)
    }
}

/// Integer Julian day number of a civil date.
pub fn julian_day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce()) + JDN_OF_CE_DAY_ZERO
}

/// Add whole years to a date, clamping Feb 29 to Feb 28 when the target
/// year is not a leap year.
pub fn add_years(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
        .unwrap_or(date)
}

/// Month/day pair as written in catalog activity dates (`"MM.dd"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    /// Parse the catalog `"MM.dd"` form. Returns `None` for anything
    /// that is not two dot-separated numeric fields in calendar range.
    pub fn parse(s: &str) -> Option<MonthDay> {
        let (month, day) = s.trim().split_once('.')?;
        let month: u32 = month.parse().ok()?;
        let day: u32 = day.parse().ok()?;
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }
        Some(MonthDay { month, day })
    }

    /// Place the month/day into a concrete year. `None` when the
    /// combination does not exist there, e.g. Feb 29 outside leap years.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}
