use crate::utils::date::today;
use crate::utils::formatting::display_float;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Fields parsed as optional floats; zero means "no data".
pub const NUMERIC_FIELDS: [&str; 5] = [
    "distance",
    "elevation",
    "descent",
    "altitude",
    "average_speed",
];

/// Currency-suffixed fields, defaulting to zero.
pub const COST_FIELDS: [&str; 4] = ["food_cost", "accommodation", "other", "cost_p_day"];

/// Columns of the logbook worksheet, already normalized.
pub const STANDARD_HEADER: [&str; 28] = [
    "no",
    "day",
    "start",
    "end",
    "country",
    "timezone",
    "place",
    "placeDetail",
    "time",
    "distance",
    "elevation",
    "descent",
    "altitude",
    "flats",
    "weather",
    "food_cost",
    "other",
    "accommodation",
    "fx",
    "overnight",
    "summary",
    "lostItems",
    "internal_notes",
    "cost_p_day",
    "total_time",
    "km_cumulative",
    "average_speed",
    "break_time",
];

/// Read-only view of a single entry field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(Option<f64>),
    Cost(f64),
    Integer(i64),
}

impl FieldValue {
    /// Whether a template section guarded by this field should render.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Number(n) => n.is_some_and(|v| v != 0.0),
            FieldValue::Cost(c) => *c > 0.0,
            FieldValue::Integer(i) => *i != 0,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Text(s) => s.trim().parse().ok(),
            FieldValue::Number(n) => *n,
            FieldValue::Cost(c) => Some(*c),
            FieldValue::Integer(i) => Some(*i as f64),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(Some(v)) | FieldValue::Cost(v) => f.write_str(&display_float(*v)),
            FieldValue::Number(None) => Ok(()),
            FieldValue::Integer(i) => write!(f, "{i}"),
        }
    }
}

/// One logbook record for a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub iso_date: String,
    pub date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub day: u32,

    pub distance: Option<f64>,
    pub elevation: Option<f64>,
    pub descent: Option<f64>,
    pub altitude: Option<f64>,
    pub average_speed: Option<f64>,

    pub food_cost: f64,
    pub accommodation: f64,
    pub other: f64,
    pub cost_p_day: f64,

    /// Every other header field, verbatim.
    pub extra: BTreeMap<String, String>,
}

impl Entry {
    pub fn is_cycling_day(&self) -> bool {
        self.distance.is_some()
    }

    pub fn is_rest_day(&self) -> bool {
        self.distance.is_none()
    }

    pub fn is_past_day(&self) -> bool {
        self.is_past_day_at(today())
    }

    /// `is_past_day` against an explicit reference date.
    pub fn is_past_day_at(&self, reference: NaiveDate) -> bool {
        self.date <= reference
    }

    pub fn is_valid_entry(&self) -> bool {
        self.is_past_day()
    }

    /// Raw string value of a non-coerced field, empty if the header lacks it.
    pub fn text(&self, name: &str) -> &str {
        self.extra.get(name).map(String::as_str).unwrap_or("")
    }

    /// Look up any field by name, including the derived date parts.
    pub fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            "iso_date" => FieldValue::Text(self.iso_date.clone()),
            "year" => FieldValue::Integer(i64::from(self.year)),
            "month" => FieldValue::Integer(i64::from(self.month)),
            "day" => FieldValue::Integer(i64::from(self.day)),
            "distance" => FieldValue::Number(self.distance),
            "elevation" => FieldValue::Number(self.elevation),
            "descent" => FieldValue::Number(self.descent),
            "altitude" => FieldValue::Number(self.altitude),
            "average_speed" => FieldValue::Number(self.average_speed),
            "food_cost" => FieldValue::Cost(self.food_cost),
            "accommodation" => FieldValue::Cost(self.accommodation),
            "other" => FieldValue::Cost(self.other),
            "cost_p_day" => FieldValue::Cost(self.cost_p_day),
            other => FieldValue::Text(self.extra.get(other)?.clone()),
        };
        Some(value)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Logbook: {} {} {} {}",
            self.iso_date,
            self.text("country"),
            self.text("place"),
            self.text("summary")
        )
    }
}
