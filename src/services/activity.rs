//! Activity window resolution.
//!
//! Answers "which catalog window governs this date". Confirmed per-year
//! windows win over the generic template; the template itself is dated
//! in a placeholder year and gets projected onto the queried year here.

use chrono::{Datelike, NaiveDate};

use crate::models::shower::{ActivityWindow, ShowerDefinition};

/// Which kind of catalog window matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityMatch {
    Confirmed,
    Generic,
}

/// Find the window governing `date`.
///
/// Confirmed windows are scanned first, in catalog order, using
/// inclusive date containment. Only when none matches is the generic
/// template projected onto the queried year.
pub fn resolve(
    definition: &ShowerDefinition,
    date: NaiveDate,
) -> Option<(ActivityWindow, ActivityMatch)> {
    if let Some(window) = definition.confirmed().iter().find(|w| w.contains(date)) {
        return Some((window.clone(), ActivityMatch::Confirmed));
    }
    project_template(definition.template(), date).map(|w| (w, ActivityMatch::Generic))
}

/// Project the generic template onto the year of `date`.
///
/// A template that crosses New Year is tried in two alignments, start
/// in the queried year first and finish in the queried year second.
/// The peak follows the side it was attached to in the template. Any
/// projected date that does not exist in the target year, Feb 29 off a
/// leap year, counts as no match.
pub fn project_template(template: &ActivityWindow, date: NaiveDate) -> Option<ActivityWindow> {
    let year = date.year();
    let spans_new_year = template.start.year() != template.finish.year();
    let (start, finish) = if spans_new_year {
        project_span(template, year, year + 1, date)
            .or_else(|| project_span(template, year - 1, year, date))?
    } else {
        project_span(template, year, year, date)?
    };

    let peak_with_start = template.peak.year() == template.start.year();
    let peak_year = if peak_with_start {
        start.year()
    } else {
        finish.year()
    };
    let peak = NaiveDate::from_ymd_opt(peak_year, template.peak.month(), template.peak.day())?;

    Some(ActivityWindow {
        year: start.year(),
        zhr: template.zhr,
        start,
        finish,
        peak,
    })
}

fn project_span(
    template: &ActivityWindow,
    start_year: i32,
    finish_year: i32,
    date: NaiveDate,
) -> Option<(NaiveDate, NaiveDate)> {
    let start = NaiveDate::from_ymd_opt(start_year, template.start.month(), template.start.day())?;
    let finish =
        NaiveDate::from_ymd_opt(finish_year, template.finish.month(), template.finish.day())?;
    (start <= date && date <= finish).then_some((start, finish))
}
