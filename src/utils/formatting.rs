//! Number formatting used by the Markdown renderers.

/// Float as a spreadsheet user wrote it: `55.5`, `100.0`, `13.9`.
/// Whole numbers keep one decimal so measurements stay recognisable.
pub fn display_float(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

/// Same as `display_float` but empty for missing data.
pub fn display_opt(v: Option<f64>) -> String {
    v.map(display_float).unwrap_or_default()
}

/// Rounded to whole units, e.g. an average speed.
pub fn round0(v: f64) -> String {
    format!("{v:.0}")
}

/// Cost without a fraction when it has none: `32`, `12.50`.
pub fn format_cost(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.2}")
    }
}

pub fn euro(v: f64) -> String {
    format!("{} €", format_cost(v))
}

/// Integer part, as shown in the cost breakdown.
pub fn truncate(v: f64) -> String {
    format!("{}", v.trunc() as i64)
}
