mod domain;
mod engine;
mod error;
mod fetch;
mod input;
mod output;
mod telemetry;

use chrono::NaiveDate;

pub use domain::{
    GeneratorConfig, GeoId, HistoryRecord, MAX_NPIS, NPI_COLUMNS, NPI_COUNT, NpiValues, Scenario,
};
pub use error::Error;
pub use fetch::{DEFAULT_DATA_URL, ensure_dataset};
pub use output::{ScenarioRow, write_scenario};
pub use telemetry::setup_logging;

/// Reads CSV-encoded historical intervention records from `reader`.
///
/// # Error handling
///
/// Not every row in the dataset may be valid — the CSV can contain malformed
/// rows or rows violating the dataset shape (e.g. an unparseable date).
/// Instead of aborting on the first bad row, `load_history` reports each such
/// error to the caller-supplied `on_error` callback and continues with the
/// remaining input. A header missing a required column is fatal and returned
/// as `Err` instead.
pub fn load_history(
    reader: impl std::io::Read,
    mut on_error: impl FnMut(Error),
) -> Result<Vec<HistoryRecord>, Error> {
    let mut records = Vec::new();
    for result in input::parse_history(reader) {
        match result {
            Ok(record) => records.push(record),
            Err(error @ Error::MissingColumn { .. }) => return Err(error),
            Err(error) => on_error(error),
        }
    }
    Ok(records)
}

/// Projects a table of intervention values per geography and day.
///
/// Days covered by `history` copy the recorded values; days after the record's
/// end are synthesized according to `scenario` (`None` applies the configured
/// default, [`Scenario::Historical`]). Rows come out sorted by country,
/// region, and date, one row per selected geography per day.
///
/// The returned table always spans the inception date (2020-01-01) through
/// `end_date`; `start_date` is accepted and logged but does not constrain the
/// range. Callers relying on a narrower window must slice the result
/// themselves.
///
/// `countries` restricts the output to the named countries, including their
/// sub-national regions; `None` or an empty slice selects every geography in
/// `history`. Naming a country the history does not contain is an error.
///
/// # Example
///
/// ```no_run
/// use std::fs::File;
/// use chrono::NaiveDate;
/// use npi_scenario_rs::{Error, Scenario, generate_scenario, load_history};
///
/// let reader = File::open("OxCGRT_latest.csv").unwrap();
/// let history = load_history(reader, |e: Error| eprintln!("skipped: {e}")).unwrap();
///
/// let start_date = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
/// let end_date = NaiveDate::from_ymd_opt(2021, 1, 31).unwrap();
/// let countries = vec!["Italy".to_string()];
///
/// let rows = generate_scenario(
///     start_date,
///     end_date,
///     &history,
///     Some(countries.as_slice()),
///     Some(&Scenario::Freeze),
/// )
/// .unwrap();
/// for row in &rows {
///     println!("{} {} {}", row.country_name, row.date, row.c1_school_closing);
/// }
/// ```
pub fn generate_scenario(
    start_date: NaiveDate,
    end_date: NaiveDate,
    history: &[HistoryRecord],
    countries: Option<&[String]>,
    scenario: Option<&Scenario>,
) -> Result<Vec<ScenarioRow>, Error> {
    generate_scenario_with(
        &GeneratorConfig::default(),
        start_date,
        end_date,
        history,
        countries,
        scenario,
    )
}

/// Like [`generate_scenario`], with an explicit [`GeneratorConfig`] instead of
/// the defaults.
pub fn generate_scenario_with(
    config: &GeneratorConfig,
    start_date: NaiveDate,
    end_date: NaiveDate,
    history: &[HistoryRecord],
    countries: Option<&[String]>,
    scenario: Option<&Scenario>,
) -> Result<Vec<ScenarioRow>, Error> {
    let scenario = scenario.unwrap_or_else(|| config.default_scenario());
    engine::build_scenario(config, start_date, end_date, history, countries, scenario)
}
