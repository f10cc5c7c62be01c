//! Shared fixture builders for the integration tests.

use chrono::NaiveDate;
use npi_scenario_rs::{HistoryRecord, NPI_COLUMNS, load_history};

/// CSV header matching the raw dataset layout.
pub fn header() -> String {
    let mut columns = vec!["CountryName", "RegionName", "Date"];
    columns.extend(NPI_COLUMNS);
    columns.push("StringencyIndex");
    columns.join(",")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The deterministic indicator value the fixtures use for a given day offset
/// and column. Cycles through 0/1/2 so consecutive days differ.
pub fn fixture_value(day_offset: usize, column: usize) -> f64 {
    ((day_offset + column) % 3) as f64
}

/// Builds daily CSV rows for one geography from `first` through `last` inclusive.
pub fn geo_rows(country: &str, region: &str, first: NaiveDate, last: NaiveDate) -> Vec<String> {
    let mut rows = Vec::new();
    let mut day = first;
    let mut offset = 0usize;
    while day <= last {
        let values: Vec<String> = (0..NPI_COLUMNS.len())
            .map(|column| format!("{:.1}", fixture_value(offset, column)))
            .collect();
        rows.push(format!(
            "{country},{region},{day},{},50.0",
            values.join(",")
        ));
        day = day.succ_opt().unwrap();
        offset += 1;
    }
    rows
}

/// Parses a fixture CSV, panicking on any malformed row.
pub fn history_from_csv(csv: &str) -> Vec<HistoryRecord> {
    load_history(csv.as_bytes(), |e| panic!("unexpected error: {e}"))
        .expect("fixture should parse")
}

/// Builds a history with daily rows for every geography from the 2020-01-01
/// inception through `last` inclusive.
pub fn build_history(geos: &[(&str, &str)], last: NaiveDate) -> Vec<HistoryRecord> {
    let mut lines = vec![header()];
    for (country, region) in geos {
        lines.extend(geo_rows(country, region, date(2020, 1, 1), last));
    }
    history_from_csv(&lines.join("\n"))
}

/// Owned country list, ready for `generate_scenario`'s filter parameter.
pub fn countries(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
