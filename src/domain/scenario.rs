//! Module defining the projection policies applied to dates beyond the historical record

use std::str::FromStr;

use crate::domain::NPI_COUNT;
use crate::error::Error;

/// Policy deciding the indicator values for dates after the last recorded day.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Scenario {
    /// Reproduce the historical record; beyond its end, hold the last known values.
    #[default]
    Historical,
    /// Hold every indicator at its last recorded value.
    Freeze,
    /// Set every indicator to zero.
    Min,
    /// Set every indicator to its documented maximum.
    Max,
    /// Broadcast a fixed set of indicator values to every projected day.
    /// Must hold exactly [`NPI_COUNT`] values.
    Custom(Vec<f64>),
}

impl FromStr for Scenario {
    type Err = Error;

    /// Parses the wire spellings: `Historical`, `Freeze`, `MIN`, `MAX`, or a
    /// comma-separated list of indicator values (e.g. `1,1,1,1,1,1,1,1,1,1,1`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Historical" => Ok(Scenario::Historical),
            "Freeze" => Ok(Scenario::Freeze),
            "MIN" => Ok(Scenario::Min),
            "MAX" => Ok(Scenario::Max),
            other => {
                let values = other
                    .split(',')
                    .map(|v| v.trim().parse::<f64>())
                    .collect::<Result<Vec<f64>, _>>()
                    .map_err(|_| Error::ScenarioSpec {
                        message: format!("unknown scenario: {other}"),
                    })?;
                if values.len() != NPI_COUNT {
                    return Err(Error::ScenarioSpec {
                        message: format!(
                            "custom scenario must provide {NPI_COUNT} indicator values, got {}",
                            values.len()
                        ),
                    });
                }
                Ok(Scenario::Custom(values))
            }
        }
    }
}
