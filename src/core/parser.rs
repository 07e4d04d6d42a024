//! Row parsing: one raw worksheet row plus the header → `Entry`.

use crate::models::entry::{COST_FIELDS, Entry, NUMERIC_FIELDS};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use thiserror::Error;

/// Unit token trailing every cost cell.
pub const CURRENCY_SUFFIX: &str = " €";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing `day` field")]
    MissingDay,

    #[error("malformed date '{0}', expected YYYY-MM-DD")]
    MalformedDate(String),

    #[error("'{0}' is not a calendar date")]
    ImpossibleDate(String),
}

/// Header tokens with spaces turned into underscores.
pub fn normalize_header<S: AsRef<str>>(row: &[S]) -> Vec<String> {
    row.iter().map(|f| f.as_ref().replace(' ', "_")).collect()
}

/// Split `YYYY-MM-DD` into its parts and validate it as a calendar date.
pub fn parse_iso_date(iso: &str) -> Result<(i32, u32, u32, NaiveDate), ParseError> {
    let parts: Vec<&str> = iso.split('-').collect();
    let [y, m, d] = parts.as_slice() else {
        return Err(ParseError::MalformedDate(iso.to_string()));
    };

    let malformed = || ParseError::MalformedDate(iso.to_string());
    let year: i32 = y.trim().parse().map_err(|_| malformed())?;
    let month: u32 = m.trim().parse().map_err(|_| malformed())?;
    let day: u32 = d.trim().parse().map_err(|_| malformed())?;

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ParseError::ImpossibleDate(iso.to_string()))?;

    Ok((year, month, day, date))
}

/// Numeric cell → `Some(value)`, or `None` for blanks, garbage and zero.
///
/// Commas are thousands separators (`"1,200"`, `"1,234.5"`); a lone comma
/// with a fraction that is not three digits long is read as a decimal comma
/// (`"55,5"`).
pub fn parse_measure(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let normalized = if !raw.contains(',') || raw.contains('.') {
        raw.replace(',', "")
    } else {
        let groups: Vec<&str> = raw.split(',').collect();
        let thousands = groups[1..].iter().all(|g| g.len() == 3);
        if thousands || groups.len() > 2 {
            raw.replace(',', "")
        } else {
            raw.replacen(',', ".", 1)
        }
    };

    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() && v != 0.0 => Some(v),
        _ => None,
    }
}

/// Cost cell like `"12 €"` → `12.0`; anything unreadable costs nothing.
pub fn parse_cost(raw: &str) -> f64 {
    let trimmed = raw.strip_suffix(CURRENCY_SUFFIX).unwrap_or(raw).trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

/// Build an `Entry` from a row. `header` must already be normalized.
pub fn parse_row<S: AsRef<str>>(header: &[String], row: &[S]) -> Result<Entry, ParseError> {
    let mut fields: BTreeMap<String, String> = header
        .iter()
        .enumerate()
        .map(|(i, key)| {
            let value = row.get(i).map(|v| v.as_ref().to_string()).unwrap_or_default();
            (key.clone(), value)
        })
        .collect();

    let iso_date = match fields.remove("day") {
        Some(d) if !d.trim().is_empty() => d,
        _ => return Err(ParseError::MissingDay),
    };
    let (year, month, day, date) = parse_iso_date(&iso_date)?;

    let [distance, elevation, descent, altitude, average_speed] =
        NUMERIC_FIELDS.map(|k| fields.remove(k).as_deref().and_then(parse_measure));
    let [food_cost, accommodation, other, cost_p_day] =
        COST_FIELDS.map(|k| fields.remove(k).as_deref().map_or(0.0, parse_cost));

    Ok(Entry {
        iso_date,
        date,
        year,
        month,
        day,
        distance,
        elevation,
        descent,
        altitude,
        average_speed,
        food_cost,
        accommodation,
        other,
        cost_p_day,
        extra: fields,
    })
}
