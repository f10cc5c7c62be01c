//! Module for the types defining the intervention-plan domain.

mod indicators;
mod scenario;

pub use indicators::{MAX_NPIS, NPI_COLUMNS, NPI_COUNT, NpiValues};
pub use scenario::Scenario;

use chrono::NaiveDate;

/// A geography tracked by the dataset: a country, optionally narrowed to a
/// sub-national region. An empty region denotes the country-level aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeoId {
    country: String,
    region: String,
}

impl GeoId {
    pub fn new(country: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            region: region.into(),
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Whether this is the country-level aggregate entry.
    pub fn is_country_level(&self) -> bool {
        self.region.is_empty()
    }
}

/// One recorded day of intervention data for a single geography.
///
/// Indicator values may be missing in the raw data; the generator normalizes
/// them (forward-fill within the geography, zero before the first record).
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    geo: GeoId,
    date: NaiveDate,
    npis: [Option<f64>; NPI_COUNT],
    stringency_index: Option<f64>,
}

impl HistoryRecord {
    pub fn new(geo: GeoId, date: NaiveDate, npis: [Option<f64>; NPI_COUNT]) -> Self {
        Self {
            geo,
            date,
            npis,
            stringency_index: None,
        }
    }

    pub fn with_stringency_index(mut self, stringency_index: Option<f64>) -> Self {
        self.stringency_index = stringency_index;
        self
    }

    pub fn geo(&self) -> &GeoId {
        &self.geo
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn npis(&self) -> &[Option<f64>; NPI_COUNT] {
        &self.npis
    }

    /// The composite stringency index, when the dataset carries one.
    /// Not part of the generated output.
    pub fn stringency_index(&self) -> Option<f64> {
        self.stringency_index
    }
}

/// Explicit configuration for scenario generation.
///
/// Replaces what would otherwise be module-level state: the calendar anchor
/// every generated table starts from, and the policy applied when the caller
/// does not name one.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    inception_date: NaiveDate,
    default_scenario: Scenario,
}

impl GeneratorConfig {
    pub fn new(inception_date: NaiveDate, default_scenario: Scenario) -> Self {
        Self {
            inception_date,
            default_scenario,
        }
    }

    /// The fixed calendar anchor generated tables begin at.
    pub fn inception_date(&self) -> NaiveDate {
        self.inception_date
    }

    /// The policy used when no scenario is passed.
    pub fn default_scenario(&self) -> &Scenario {
        &self.default_scenario
    }
}

impl Default for GeneratorConfig {
    /// Inception 2020-01-01, scenario [`Scenario::Historical`].
    fn default() -> Self {
        Self {
            inception_date: NaiveDate::from_ymd_opt(2020, 1, 1)
                .expect("2020-01-01 is a valid date"),
            default_scenario: Scenario::Historical,
        }
    }
}
