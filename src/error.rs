//! Module defining the errors which are exposed to the users of the crate

use chrono::NaiveDate;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The dataset header lacks a column the generator needs
    #[error("dataset is missing required column `{column}`")]
    MissingColumn { column: String },

    /// Valid CSV violating the dataset shape, e.g., a row with an unparseable date
    #[error("invalid record — country: {country}, region: {region}: {message}")]
    Validation {
        country: String,
        region: String,
        message: String,
    },

    /// A country in the requested filter has no rows in the historical dataset
    #[error("unknown country in filter: {0}")]
    UnknownCountry(String),

    /// The requested end date precedes the inception date
    #[error("end date {end_date} precedes inception date {inception_date}")]
    DateRange {
        end_date: NaiveDate,
        inception_date: NaiveDate,
    },

    /// A scenario specification the generator cannot apply, e.g., a custom list of the wrong length
    #[error("invalid scenario: {message}")]
    ScenarioSpec { message: String },

    /// Failure reading or writing the dataset cache
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failure downloading the dataset
    #[error("download error: {0}")]
    Download(#[from] reqwest::Error),
}

pub(crate) fn validation_error(
    country: impl Into<String>,
    region: impl Into<String>,
    message: impl Into<String>,
) -> Error {
    Error::Validation {
        country: country.into(),
        region: region.into(),
        message: message.into(),
    }
}
