//! Catalog angle strings.
//!
//! Radiant coordinates and drift rates appear in the catalog either as
//! plain decimal degrees (`"45.8"`) or sexagesimal (`"03h17m21s"` for
//! right ascension, `"+58d01m"` or `"+58°01'00\""` for declination).
//! Everything is carried internally as radians.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AngleParseError {
    #[error("empty angle string")]
    Empty,
    #[error("unrecognized angle syntax `{0}`")]
    Syntax(String),
}

/// Parse a catalog angle into radians.
///
/// Decimal input is taken as degrees. Sexagesimal input is hours when
/// the leading component carries an `h` marker and degrees when it
/// carries `d` or `°`; minutes and seconds are optional.
pub fn parse_angle(raw: &str) -> Result<f64, AngleParseError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(AngleParseError::Empty);
    }
    if let Ok(degrees) = s.parse::<f64>() {
        return Ok(degrees.to_radians());
    }
    parse_sexagesimal(s).ok_or_else(|| AngleParseError::Syntax(raw.to_string()))
}

fn parse_sexagesimal(s: &str) -> Option<f64> {
    // map marker glyph variants onto single-letter markers
    let normalized: String = s
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '°' | 'º' => 'd',
            '\'' | '′' => 'm',
            '"' | '″' => 's',
            other => other.to_ascii_lowercase(),
        })
        .collect();

    let (negative, rest) = match normalized.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, normalized.strip_prefix('+').unwrap_or(&normalized)),
    };

    let marker_at = rest.find(|c: char| !c.is_ascii_digit() && c != '.')?;
    let leading: f64 = rest[..marker_at].parse().ok()?;
    let hours = match rest[marker_at..].chars().next()? {
        'h' => true,
        'd' => false,
        _ => return None,
    };
    let mut tail = &rest[marker_at + 1..];

    let mut total = leading;
    if !tail.is_empty() {
        let (minutes, r) = component(tail, 'm')?;
        total += minutes / 60.0;
        tail = r;
    }
    if !tail.is_empty() {
        // the seconds marker itself may be omitted
        let (seconds, r) = match tail.find('s') {
            Some(_) => component(tail, 's')?,
            None => (tail.parse().ok()?, ""),
        };
        total += seconds / 3600.0;
        tail = r;
    }
    if !tail.is_empty() {
        return None;
    }

    let degrees = if hours { total * 15.0 } else { total };
    let signed = if negative { -degrees } else { degrees };
    Some(signed.to_radians())
}

fn component(s: &str, marker: char) -> Option<(f64, &str)> {
    let at = s.find(marker)?;
    let value: f64 = s[..at].parse().ok()?;
    Some((value, &s[at + 1..]))
}

/// Format radians as hours/minutes/seconds, e.g. `03h17m21.0s`.
pub fn to_hms_string(rad: f64) -> String {
    let total_hours = rad.to_degrees() / 15.0;
    let sign = if total_hours < 0.0 { "-" } else { "" };
    let (h, m, s) = split_sexagesimal(total_hours.abs());
    format!("{sign}{h:02}h{m:02}m{s:04.1}s")
}

/// Format radians as signed degrees/arcminutes/arcseconds,
/// e.g. `+58°01'00.0"`.
pub fn to_dms_string(rad: f64) -> String {
    let sign = if rad < 0.0 { "-" } else { "+" };
    let (d, m, s) = split_sexagesimal(rad.to_degrees().abs());
    format!("{sign}{d:02}°{m:02}'{s:04.1}\"")
}

fn split_sexagesimal(value: f64) -> (u32, u32, f64) {
    // round in tenths of a second up front so 59.96s carries into the
    // minute instead of printing as 60.0
    let tenths = (value * 36000.0).round() as u64;
    let whole = (tenths / 36000) as u32;
    let minutes = ((tenths % 36000) / 600) as u32;
    let seconds = (tenths % 600) as f64 / 10.0;
    (whole, minutes, seconds)
}
