//! Validated shower definitions.
//!
//! [`ShowerDefinition::from_record`] turns a raw catalog record into a
//! definition whose invariants hold everywhere downstream: angles in
//! radians, a dated template window at index 0, confirmed windows
//! gap-filled from the template, ordered dates in every window and a
//! color distribution that sums to 100.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::angle::{self, AngleParseError};
use crate::models::record::{ActivityRecord, ShowerRecord};
use crate::models::time::{add_years, MonthDay};

/// Placeholder year carried by undated template windows during parsing.
pub const GENERIC_YEAR: i32 = 1000;

/// Why a catalog record was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("missing mandatory field `{0}`")]
    MissingField(&'static str),
    #[error("activity entry {index}: malformed variable ZHR range `{raw}`")]
    MalformedVariable { index: usize, raw: String },
    #[error("activity entry {index}: unresolved {field} date")]
    UnresolvedDate { index: usize, field: &'static str },
    #[error("activity entry {index}: dates out of order after gap filling")]
    WindowOutOfOrder { index: usize },
    #[error("bad `{field}` angle: {source}")]
    BadAngle {
        field: &'static str,
        source: AngleParseError,
    },
}

/// Peak-rate profile of one activity window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZhrProfile {
    /// Single published peak ZHR.
    Fixed(i32),
    /// Outburst-class shower quoted as a range.
    Variable { min: i32, max: i32 },
}

impl ZhrProfile {
    /// Peak amplitude of the activity curve.
    pub fn amplitude(&self) -> f64 {
        match *self {
            ZhrProfile::Fixed(zhr) => f64::from(zhr),
            ZhrProfile::Variable { max, .. } => f64::from(max),
        }
    }

    /// Baseline the curve never drops below.
    pub fn floor(&self) -> f64 {
        match *self {
            ZhrProfile::Fixed(_) => 0.0,
            ZhrProfile::Variable { min, .. } => f64::from(min),
        }
    }
}

/// Weighted color drawn by spawned meteors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPair {
    pub name: String,
    /// Share of meteors in this color, percent.
    pub intensity: i32,
}

/// One dated interval of elevated activity.
///
/// `year` is 0 for the catalog template and the observation year for
/// confirmed windows; resolved projections carry the projected start
/// year. Dates always satisfy `start <= peak <= finish`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityWindow {
    pub year: i32,
    pub zhr: ZhrProfile,
    pub start: NaiveDate,
    pub finish: NaiveDate,
    pub peak: NaiveDate,
}

impl ActivityWindow {
    /// Inclusive containment test.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.finish
    }
}

/// Fully validated shower definition.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowerDefinition {
    /// Catalog identifier, usually the IAU shower code.
    pub shower_id: String,
    /// Human-readable shower name; may be empty.
    pub designation: String,
    /// Radiant right ascension at peak, radians.
    pub radiant_alpha: f64,
    /// Radiant declination at peak, radians.
    pub radiant_delta: f64,
    /// Radiant drift in right ascension, radians per day.
    /// The catalog quotes drift over the five days around the peak.
    pub drift_alpha: f64,
    /// Radiant drift in declination, radians per day.
    pub drift_delta: f64,
    /// Geocentric entry speed, km/s; 0 when unknown.
    pub speed: i32,
    /// Parent comet or asteroid; may be empty.
    pub parent_obj: String,
    /// Population index r; 0 when unknown.
    pub population_index: f64,
    /// Color distribution, guaranteed to sum to 100.
    pub colors: Vec<ColorPair>,
    activities: Vec<ActivityWindow>,
}

impl ShowerDefinition {
    /// Validate a raw record.
    ///
    /// The record must carry a shower id, radiant coordinates and at
    /// least one activity entry. The first activity entry is the
    /// generic template and must resolve to complete dates; later
    /// entries inherit whatever they leave out from the template,
    /// shifted into their own year.
    pub fn from_record(record: &ShowerRecord) -> Result<Self, DefinitionError> {
        let shower_id = record
            .shower_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(DefinitionError::MissingField("showerID"))?
            .to_owned();

        let radiant_alpha = required_angle("radiantAlpha", record.radiant_alpha.as_deref())?;
        let radiant_delta = required_angle("radiantDelta", record.radiant_delta.as_deref())?;
        // the catalog quotes five-day drift totals
        let drift_alpha = optional_angle("driftAlpha", record.drift_alpha.as_deref())? / 5.0;
        let drift_delta = optional_angle("driftDelta", record.drift_delta.as_deref())? / 5.0;

        if record.activity.is_empty() {
            return Err(DefinitionError::MissingField("activity"));
        }
        let raw_windows = record
            .activity
            .iter()
            .enumerate()
            .map(|(index, entry)| parse_window(index, entry))
            .collect::<Result<Vec<_>, _>>()?;
        let activities = fill_gaps(raw_windows)?;

        let colors = validated_colors(&shower_id, record);

        Ok(ShowerDefinition {
            shower_id,
            designation: record.designation.clone().unwrap_or_default(),
            radiant_alpha,
            radiant_delta,
            drift_alpha,
            drift_delta,
            speed: record.speed.unwrap_or(0),
            parent_obj: record.parent_obj.clone().unwrap_or_default(),
            population_index: record.pidx.unwrap_or(0.0),
            colors,
            activities,
        })
    }

    /// The generic template window.
    pub fn template(&self) -> &ActivityWindow {
        &self.activities[0]
    }

    /// Confirmed per-year windows, possibly empty.
    pub fn confirmed(&self) -> &[ActivityWindow] {
        &self.activities[1..]
    }

    /// All windows, template first.
    pub fn activities(&self) -> &[ActivityWindow] {
        &self.activities
    }

    /// IAU code for display. Purely numeric identifiers are catalog
    /// bookkeeping, not IAU codes, and yield `None`.
    pub fn iau_code(&self) -> Option<&str> {
        let numeric = self
            .shower_id
            .parse::<i64>()
            .map(|v| v != 0)
            .unwrap_or(false);
        if numeric {
            None
        } else {
            Some(&self.shower_id)
        }
    }
}

struct RawWindow {
    raw_year: i32,
    zhr: Option<ZhrProfile>,
    start: Option<NaiveDate>,
    finish: Option<NaiveDate>,
    peak: Option<NaiveDate>,
}

fn parse_window(index: usize, entry: &ActivityRecord) -> Result<RawWindow, DefinitionError> {
    let raw_year = entry.year;
    let parse_year = if raw_year == 0 { GENERIC_YEAR } else { raw_year };

    let zhr = match entry.zhr.unwrap_or(0) {
        0 => None,
        -1 => {
            let raw = entry.variable.clone().unwrap_or_default();
            Some(parse_variable_range(index, &raw)?)
        }
        fixed => Some(ZhrProfile::Fixed(fixed)),
    };

    let mut start = month_day_in(entry.start.as_deref(), parse_year);
    let mut finish = month_day_in(entry.finish.as_deref(), parse_year);
    let mut peak = month_day_in(entry.peak.as_deref(), parse_year);

    // windows written across New Year carry their tail into the next year
    if let (Some(s), Some(f), Some(p)) = (start, finish, peak) {
        let f = if s > f { add_years(f, 1) } else { f };
        let p = if s > p { add_years(p, 1) } else { p };
        start = Some(s);
        finish = Some(f);
        peak = Some(p);
    }

    Ok(RawWindow {
        raw_year,
        zhr,
        start,
        finish,
        peak,
    })
}

fn month_day_in(raw: Option<&str>, year: i32) -> Option<NaiveDate> {
    MonthDay::parse(raw?)?.in_year(year)
}

fn parse_variable_range(index: usize, raw: &str) -> Result<ZhrProfile, DefinitionError> {
    let malformed = || DefinitionError::MalformedVariable {
        index,
        raw: raw.to_owned(),
    };
    let (min, max) = raw.split_once('-').ok_or_else(malformed)?;
    if max.contains('-') {
        return Err(malformed());
    }
    let min: i32 = min.trim().parse().map_err(|_| malformed())?;
    let max: i32 = max.trim().parse().map_err(|_| malformed())?;
    Ok(ZhrProfile::Variable { min, max })
}

fn fill_gaps(windows: Vec<RawWindow>) -> Result<Vec<ActivityWindow>, DefinitionError> {
    let template = &windows[0];
    let template_zhr = template.zhr.unwrap_or(ZhrProfile::Fixed(0));
    let template_start = unresolved(template.start, 0, "start")?;
    let template_finish = unresolved(template.finish, 0, "finish")?;
    let template_peak = unresolved(template.peak, 0, "peak")?;

    let mut out = Vec::with_capacity(windows.len());
    out.push(ordered_window(
        0,
        template.raw_year,
        template_zhr,
        template_start,
        template_finish,
        template_peak,
    )?);

    for (index, window) in windows.iter().enumerate().skip(1) {
        let zhr = window.zhr.unwrap_or(template_zhr);
        let start = inherit(window.start, template_start, window.raw_year, index, "start")?;
        let finish = inherit(window.finish, template_finish, window.raw_year, index, "finish")?;
        let peak = inherit(window.peak, template_peak, window.raw_year, index, "peak")?;
        out.push(ordered_window(
            index,
            window.raw_year,
            zhr,
            start,
            finish,
            peak,
        )?);
    }
    Ok(out)
}

fn unresolved(
    date: Option<NaiveDate>,
    index: usize,
    field: &'static str,
) -> Result<NaiveDate, DefinitionError> {
    date.ok_or(DefinitionError::UnresolvedDate { index, field })
}

fn inherit(
    own: Option<NaiveDate>,
    template: NaiveDate,
    raw_year: i32,
    index: usize,
    field: &'static str,
) -> Result<NaiveDate, DefinitionError> {
    match own {
        Some(date) => Ok(date),
        // a second undated entry has no year to shift the template into
        None if raw_year == 0 => Err(DefinitionError::UnresolvedDate { index, field }),
        None => Ok(add_years(template, raw_year - GENERIC_YEAR)),
    }
}

fn ordered_window(
    index: usize,
    year: i32,
    zhr: ZhrProfile,
    start: NaiveDate,
    finish: NaiveDate,
    peak: NaiveDate,
) -> Result<ActivityWindow, DefinitionError> {
    if start <= peak && peak <= finish {
        Ok(ActivityWindow {
            year,
            zhr,
            start,
            finish,
            peak,
        })
    } else {
        Err(DefinitionError::WindowOutOfOrder { index })
    }
}

fn validated_colors(shower_id: &str, record: &ShowerRecord) -> Vec<ColorPair> {
    let mut colors: Vec<ColorPair> = record
        .colors
        .iter()
        .map(|c| ColorPair {
            name: c.color.clone(),
            intensity: c.intensity,
        })
        .collect();

    if !colors.is_empty() {
        let total: i32 = colors.iter().map(|c| c.intensity).sum();
        if total != 100 {
            log::warn!(
                "shower {shower_id}: color intensities sum to {total}, expected 100; \
                 using plain white"
            );
            colors.clear();
        }
    }
    if colors.is_empty() {
        colors.push(ColorPair {
            name: "white".to_owned(),
            intensity: 100,
        });
    }
    colors
}

fn required_angle(field: &'static str, value: Option<&str>) -> Result<f64, DefinitionError> {
    let raw = value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(DefinitionError::MissingField(field))?;
    angle::parse_angle(raw).map_err(|source| DefinitionError::BadAngle { field, source })
}

fn optional_angle(field: &'static str, value: Option<&str>) -> Result<f64, DefinitionError> {
    match value.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => angle::parse_angle(raw).map_err(|source| DefinitionError::BadAngle { field, source }),
        None => Ok(0.0),
    }
}
