use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{GeoId, NPI_COUNT, NpiValues};
use crate::error::Error;


/// One generated day of intervention values for a single geography.
///
/// Serializes with the canonical dataset column names, so a written table can
/// be fed back in as historical input.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScenarioRow {
    #[serde(rename = "CountryName")]
    pub country_name: String,
    #[serde(rename = "RegionName")]
    pub region_name: String,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    #[serde(rename = "C1_School closing")]
    pub c1_school_closing: f64,
    #[serde(rename = "C2_Workplace closing")]
    pub c2_workplace_closing: f64,
    #[serde(rename = "C3_Cancel public events")]
    pub c3_cancel_public_events: f64,
    #[serde(rename = "C4_Restrictions on gatherings")]
    pub c4_restrictions_on_gatherings: f64,
    #[serde(rename = "C5_Close public transport")]
    pub c5_close_public_transport: f64,
    #[serde(rename = "C6_Stay at home requirements")]
    pub c6_stay_at_home_requirements: f64,
    #[serde(rename = "C7_Restrictions on internal movement")]
    pub c7_restrictions_on_internal_movement: f64,
    #[serde(rename = "C8_International travel controls")]
    pub c8_international_travel_controls: f64,
    #[serde(rename = "H1_Public information campaigns")]
    pub h1_public_information_campaigns: f64,
    #[serde(rename = "H2_Testing policy")]
    pub h2_testing_policy: f64,
    #[serde(rename = "H3_Contact tracing")]
    pub h3_contact_tracing: f64,
}

impl ScenarioRow {
    pub(crate) fn new(geo: GeoId, date: NaiveDate, npis: NpiValues) -> Self {
        let [c1, c2, c3, c4, c5, c6, c7, c8, h1, h2, h3] = npis.values();
        Self {
            country_name: geo.country().to_string(),
            region_name: geo.region().to_string(),
            date,
            c1_school_closing: c1,
            c2_workplace_closing: c2,
            c3_cancel_public_events: c3,
            c4_restrictions_on_gatherings: c4,
            c5_close_public_transport: c5,
            c6_stay_at_home_requirements: c6,
            c7_restrictions_on_internal_movement: c7,
            c8_international_travel_controls: c8,
            h1_public_information_campaigns: h1,
            h2_testing_policy: h2,
            h3_contact_tracing: h3,
        }
    }

    /// The indicator values in canonical column order.
    pub fn npi_values(&self) -> [f64; NPI_COUNT] {
        [
            self.c1_school_closing,
            self.c2_workplace_closing,
            self.c3_cancel_public_events,
            self.c4_restrictions_on_gatherings,
            self.c5_close_public_transport,
            self.c6_stay_at_home_requirements,
            self.c7_restrictions_on_internal_movement,
            self.c8_international_travel_controls,
            self.h1_public_information_campaigns,
            self.h2_testing_policy,
            self.h3_contact_tracing,
        ]
    }
}

/// Serializes the generated rows as CSV, headers included.
pub fn write_scenario(writer: impl Write, rows: &[ScenarioRow]) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
