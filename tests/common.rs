#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use sheetlog::models::entry::STANDARD_HEADER;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn sheetlog() -> Command {
    cargo_bin_cmd!("sheetlog")
}

/// Create an empty, test-specific directory inside the system temp dir
pub fn setup_test_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sheetlog", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

pub fn templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

pub fn header() -> Vec<String> {
    STANDARD_HEADER.iter().map(|s| s.to_string()).collect()
}

/// The reference row: a cycling day in Berlin.
pub fn cycling_row() -> Vec<String> {
    [
        "1", "2022-03-14", "08:00", "12:00", "DE", "CET", "Berlin", "", "4", "55,5", "100", "50",
        "", "", "sunny", "12 €", "0 €", "20 €", "1.0", "Hostel X", "Nice ride", "", "Felt great",
        "32 €", "4:00", "1200", "13.9", "0:30",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// A rest day: distance recorded as zero, no notes.
pub fn rest_row() -> Vec<String> {
    [
        "2", "2022-03-15", "", "", "DE", "CET", "Berlin", "Altstadt", "", "0", "", "", "34", "",
        "rain", "8 €", "3 €", "", "1.0", "Hostel X", "", "", "", "11 €", "", "1200", "", "",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// A planned day that has not happened yet.
pub fn future_row() -> Vec<String> {
    let mut row = cycling_row();
    row[0] = "999".to_string();
    row[1] = "2099-01-01".to_string();
    row
}

pub fn grid(rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let mut g = vec![header()];
    g.extend(rows);
    g
}

pub fn write_csv(path: &Path, rows: &[Vec<String>]) {
    let mut wtr = csv::Writer::from_path(path).expect("create csv");
    for row in rows {
        wtr.write_record(row).expect("write csv row");
    }
    wtr.flush().expect("flush csv");
}

/// Write `entries.csv` and a matching config into `dir`; returns the config path.
pub fn write_csv_logbook(dir: &Path, rows: Vec<Vec<String>>, extra_config: &str) -> PathBuf {
    let csv_path = dir.join("entries.csv");
    write_csv(&csv_path, &grid(rows));

    let config = format!(
        "source: csv\ncsv_path: {}\ncache_dir: {}\ncache_ttl: 60\ntemplates_dir: {}\n{}",
        csv_path.display(),
        dir.join("cache").display(),
        templates_dir().display(),
        extra_config
    );
    let config_path = dir.join("sheetlog.conf");
    fs::write(&config_path, config).expect("write config");
    config_path
}
