//! Module defining the parsing logic used to convert the raw dataset rows into validated domain types that can be provided to the generator.

use std::io::Read;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::{GeoId, HistoryRecord, NPI_COLUMNS};
use crate::error::{Error, validation_error};


/// Identity columns that must be present in the dataset header, on top of [`NPI_COLUMNS`].
const ID_COLUMNS: [&str; 2] = ["CountryName", "Date"];

/// Parses the data provided by the reader and returns an iterator over the parsing results.
///
/// A missing required column is reported as a single leading [`Error::MissingColumn`]
/// and no rows are yielded after it.
pub(crate) fn parse_history(
    reader: impl Read,
) -> impl Iterator<Item = Result<HistoryRecord, Error>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let header_error = check_headers(&mut csv_reader).err();
    let rows = header_error
        .is_none()
        .then(|| csv_reader.into_deserialize::<RawRecord>());

    header_error.map(Err).into_iter().chain(
        rows.into_iter().flatten().map(|result| {
            let raw = result?;
            HistoryRecord::try_from(raw)
        }),
    )
}

fn check_headers<R: Read>(csv_reader: &mut csv::Reader<R>) -> Result<(), Error> {
    let headers = csv_reader.headers()?;
    for column in ID_COLUMNS.iter().chain(NPI_COLUMNS.iter()) {
        if !headers.iter().any(|header| header == *column) {
            return Err(Error::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

// Intermediate type mirroring the dataset columns. Columns beyond these are ignored.
#[derive(Deserialize)]
struct RawRecord {
    #[serde(rename = "CountryName")]
    country_name: String,
    #[serde(rename = "RegionName")]
    region_name: Option<String>,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "C1_School closing")]
    c1_school_closing: Option<f64>,
    #[serde(rename = "C2_Workplace closing")]
    c2_workplace_closing: Option<f64>,
    #[serde(rename = "C3_Cancel public events")]
    c3_cancel_public_events: Option<f64>,
    #[serde(rename = "C4_Restrictions on gatherings")]
    c4_restrictions_on_gatherings: Option<f64>,
    #[serde(rename = "C5_Close public transport")]
    c5_close_public_transport: Option<f64>,
    #[serde(rename = "C6_Stay at home requirements")]
    c6_stay_at_home_requirements: Option<f64>,
    #[serde(rename = "C7_Restrictions on internal movement")]
    c7_restrictions_on_internal_movement: Option<f64>,
    #[serde(rename = "C8_International travel controls")]
    c8_international_travel_controls: Option<f64>,
    #[serde(rename = "H1_Public information campaigns")]
    h1_public_information_campaigns: Option<f64>,
    #[serde(rename = "H2_Testing policy")]
    h2_testing_policy: Option<f64>,
    #[serde(rename = "H3_Contact tracing")]
    h3_contact_tracing: Option<f64>,
    #[serde(rename = "StringencyIndex")]
    stringency_index: Option<f64>,
}

impl TryFrom<RawRecord> for HistoryRecord {
    type Error = crate::error::Error;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        // Missing region marks the country-level aggregate row
        let region = raw.region_name.unwrap_or_default();

        if raw.country_name.is_empty() {
            return Err(validation_error("", region, "empty CountryName"));
        }

        let date = parse_date(&raw.date)
            .ok_or_else(|| validation_error(&raw.country_name, &region, format!(
                "unparseable date: {}",
                raw.date
            )))?;

        let npis = [
            raw.c1_school_closing,
            raw.c2_workplace_closing,
            raw.c3_cancel_public_events,
            raw.c4_restrictions_on_gatherings,
            raw.c5_close_public_transport,
            raw.c6_stay_at_home_requirements,
            raw.c7_restrictions_on_internal_movement,
            raw.c8_international_travel_controls,
            raw.h1_public_information_campaigns,
            raw.h2_testing_policy,
            raw.h3_contact_tracing,
        ];

        Ok(
            HistoryRecord::new(GeoId::new(raw.country_name, region), date, npis)
                .with_stringency_index(raw.stringency_index),
        )
    }
}

/// The upstream dataset ships compact `YYYYMMDD` dates; exports use ISO `YYYY-MM-DD`.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y%m%d"))
        .ok()
}
