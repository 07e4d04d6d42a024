mod common;

use chrono::{Days, NaiveDate};
use common::{cycling_row, header, rest_row};
use sheetlog::core::parser::{
    ParseError, normalize_header, parse_cost, parse_iso_date, parse_measure, parse_row,
};
use sheetlog::models::entry::FieldValue;
use sheetlog::utils::date::today;

#[test]
fn test_cycling_row_is_coerced() {
    let entry = parse_row(&header(), &cycling_row()).expect("valid row");

    assert_eq!(entry.distance, Some(55.5));
    assert_eq!(entry.elevation, Some(100.0));
    assert_eq!(entry.descent, Some(50.0));
    assert_eq!(entry.altitude, None);
    assert_eq!(entry.average_speed, Some(13.9));

    assert_eq!(entry.food_cost, 12.0);
    assert_eq!(entry.accommodation, 20.0);
    assert_eq!(entry.other, 0.0);
    assert_eq!(entry.cost_p_day, 32.0);

    assert_eq!(entry.text("place"), "Berlin");
    assert_eq!(entry.text("km_cumulative"), "1200");
    assert!(entry.is_cycling_day());
    assert!(!entry.is_rest_day());
}

#[test]
fn test_day_becomes_date_parts() {
    let entry = parse_row(&header(), &cycling_row()).expect("valid row");

    assert_eq!(entry.iso_date, "2022-03-14");
    assert_eq!(entry.year, 2022);
    assert_eq!(entry.month, 3);
    assert_eq!(entry.day, 14);
    assert_eq!(entry.field("day"), Some(FieldValue::Integer(14)));
    assert!(!entry.extra.contains_key("day"));
}

#[test]
fn test_zero_distance_is_rest_day() {
    let entry = parse_row(&header(), &rest_row()).expect("valid row");

    assert_eq!(entry.distance, None);
    assert!(entry.is_rest_day());
    assert!(!entry.is_cycling_day());
    assert_eq!(entry.altitude, Some(34.0));
    assert_eq!(entry.accommodation, 0.0);
}

#[test]
fn test_header_spaces_become_underscores() {
    let header = normalize_header(&["no", "day", "food cost", "internal notes"]);
    assert_eq!(header, vec!["no", "day", "food_cost", "internal_notes"]);

    let entry = parse_row(&header, &["1", "2022-03-14", "9 €", "flat tyre"]).expect("valid row");
    assert_eq!(entry.food_cost, 9.0);
    assert_eq!(entry.text("internal_notes"), "flat tyre");
}

#[test]
fn test_short_row_defaults_to_empty() {
    let entry = parse_row(&header(), &["7", "2022-04-01"]).expect("valid row");

    assert_eq!(entry.text("place"), "");
    assert_eq!(entry.field("summary"), Some(FieldValue::Text(String::new())));
    assert_eq!(entry.distance, None);
    assert_eq!(entry.cost_p_day, 0.0);
}

#[test]
fn test_cells_beyond_header_are_ignored() {
    let header = normalize_header(&["no", "day"]);
    let entry = parse_row(&header, &["1", "2022-03-14", "stray"]).expect("valid row");
    assert_eq!(entry.extra.len(), 1);
}

#[test]
fn test_missing_or_empty_day_is_rejected() {
    let header = normalize_header(&["no", "place"]);
    assert_eq!(
        parse_row(&header, &["1", "Berlin"]),
        Err(ParseError::MissingDay)
    );

    assert_eq!(
        parse_row(&common::header(), &["1", ""]),
        Err(ParseError::MissingDay)
    );
}

#[test]
fn test_malformed_dates_are_rejected() {
    for bad in ["2022-03", "2022-03-14-01", "2022-xx-14", "14.03.2022", "tomorrow"] {
        assert_eq!(
            parse_iso_date(bad),
            Err(ParseError::MalformedDate(bad.to_string())),
            "{bad} should be malformed"
        );
    }

    assert_eq!(
        parse_iso_date("2022-02-30"),
        Err(ParseError::ImpossibleDate("2022-02-30".to_string()))
    );
}

#[test]
fn test_measure_parsing() {
    assert_eq!(parse_measure("1,200"), Some(1200.0));
    assert_eq!(parse_measure("12,345,678"), Some(12_345_678.0));
    assert_eq!(parse_measure("1,234.5"), Some(1234.5));
    assert_eq!(parse_measure("55,5"), Some(55.5));
    assert_eq!(parse_measure("13.9"), Some(13.9));
    assert_eq!(parse_measure("0"), None);
    assert_eq!(parse_measure("0.0"), None);
    assert_eq!(parse_measure(""), None);
    assert_eq!(parse_measure("n/a"), None);
    assert_eq!(parse_measure("inf"), None);
}

#[test]
fn test_cost_parsing() {
    assert_eq!(parse_cost("12 €"), 12.0);
    assert_eq!(parse_cost("7.5 €"), 7.5);
    assert_eq!(parse_cost("0 €"), 0.0);
    assert_eq!(parse_cost(""), 0.0);
    assert_eq!(parse_cost("free"), 0.0);
    assert_eq!(parse_cost("-5 €"), 0.0);
}

#[test]
fn test_entry_display() {
    let entry = parse_row(&header(), &cycling_row()).expect("valid row");
    assert_eq!(entry.to_string(), "Logbook: 2022-03-14 DE Berlin Nice ride");
}

#[test]
fn test_past_day_includes_the_reference_date() {
    let entry = parse_row(&header(), &cycling_row()).expect("valid row");
    let date = NaiveDate::from_ymd_opt(2022, 3, 14).expect("date");

    assert!(entry.is_past_day_at(date));
    assert!(entry.is_past_day_at(date + Days::new(1)));
    assert!(!entry.is_past_day_at(date - Days::new(1)));
}

#[test]
fn test_entry_dated_today_is_valid() {
    let today = today().format("%Y-%m-%d").to_string();
    let header = normalize_header(&["no", "day"]);
    let entry = parse_row(&header, &["1", today.as_str()]).expect("valid row");

    assert!(entry.is_past_day());
    assert!(entry.is_valid_entry());
}
