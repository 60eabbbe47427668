//! Raw catalog records.
//!
//! These structs mirror the shower catalog JSON field-for-field and
//! carry no guarantees beyond "it deserialized". Validation into a
//! usable definition happens in [`crate::models::shower`].

use serde::{Deserialize, Serialize};

/// One shower entry as written in the catalog, prior to validation.
///
/// Every field is optional at this level; the catalog format leaves out
/// whatever is unknown for a given shower.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowerRecord {
    /// IAU shower code, normally injected from the catalog map key.
    #[serde(default, rename = "showerID", skip_serializing_if = "Option::is_none")]
    pub shower_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub activity: Vec<ActivityRecord>,
    /// Radiant right ascension at peak, decimal degrees or sexagesimal.
    #[serde(default, rename = "radiantAlpha", skip_serializing_if = "Option::is_none")]
    pub radiant_alpha: Option<String>,
    /// Radiant declination at peak.
    #[serde(default, rename = "radiantDelta", skip_serializing_if = "Option::is_none")]
    pub radiant_delta: Option<String>,
    /// Radiant drift over the five days around the peak.
    #[serde(default, rename = "driftAlpha", skip_serializing_if = "Option::is_none")]
    pub drift_alpha: Option<String>,
    #[serde(default, rename = "driftDelta", skip_serializing_if = "Option::is_none")]
    pub drift_delta: Option<String>,
    /// Geocentric entry speed, km/s.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<i32>,
    #[serde(default, rename = "parentObj", skip_serializing_if = "Option::is_none")]
    pub parent_obj: Option<String>,
    /// Population index r.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pidx: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<ColorRecord>,
}

/// One activity entry. `year` 0 marks the generic template; dated
/// entries carry observed data for that specific year.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(default)]
    pub year: i32,
    /// Peak zenithal hourly rate. 0 means "inherit from the template",
    /// -1 means "variable, see the `variable` range".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zhr: Option<i32>,
    /// `"min-max"` ZHR range for variable showers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    /// `"MM.dd"` activity start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// `"MM.dd"` activity finish.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish: Option<String>,
    /// `"MM.dd"` activity peak.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak: Option<String>,
}

/// Weighted meteor color component.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorRecord {
    pub color: String,
    /// Share of meteors drawn in this color, percent.
    #[serde(default)]
    pub intensity: i32,
}
