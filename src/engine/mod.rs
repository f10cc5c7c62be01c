//! Module for the core scenario-generation logic

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;

use crate::{
    domain::{GeneratorConfig, GeoId, HistoryRecord, NPI_COUNT, NpiValues, Scenario},
    error::Error,
    output::ScenarioRow,
};

/// Indicator values applied to dates beyond the historical record.
enum FuturePolicy {
    /// Repeat the last recorded (normalized) row.
    HoldLast,
    /// Broadcast a fixed set of values.
    Fixed(NpiValues),
}

///
/// Builds the scenario table: one row per selected geography per day, from the
/// inception date through `end_date`. Historical days copy the recorded values,
/// later days follow the projection policy.
///
pub(crate) fn build_scenario(
    config: &GeneratorConfig,
    start_date: NaiveDate,
    end_date: NaiveDate,
    history: &[HistoryRecord],
    countries: Option<&[String]>,
    scenario: &Scenario,
) -> Result<Vec<ScenarioRow>, Error> {
    let inception_date = config.inception_date();
    if end_date < inception_date {
        return Err(Error::DateRange {
            end_date,
            inception_date,
        });
    }

    let policy = resolve_policy(scenario)?;

    tracing::debug!(%start_date, %end_date, ?scenario, "generating scenario table");

    let selected = select_records(history, countries, inception_date, end_date)?;
    let by_geo = group_by_geo(selected);

    let mut rows = Vec::new();
    for (geo, records) in by_geo {
        append_geo_rows(&mut rows, geo, records, end_date, &policy);
    }
    Ok(rows)
}

fn resolve_policy(scenario: &Scenario) -> Result<FuturePolicy, Error> {
    match scenario {
        Scenario::Historical | Scenario::Freeze => Ok(FuturePolicy::HoldLast),
        Scenario::Min => Ok(FuturePolicy::Fixed(NpiValues::zeroes())),
        Scenario::Max => Ok(FuturePolicy::Fixed(NpiValues::maxima())),
        Scenario::Custom(values) => {
            NpiValues::from_slice(values)
                .map(FuturePolicy::Fixed)
                .ok_or_else(|| Error::ScenarioSpec {
                    message: format!(
                        "custom scenario must provide {NPI_COUNT} indicator values, got {}",
                        values.len()
                    ),
                })
        }
    }
}

/// Restricts the history to the requested countries and to dates within
/// [inception, end]. An empty filter means every geography.
fn select_records<'h>(
    history: &'h [HistoryRecord],
    countries: Option<&[String]>,
    inception_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<Vec<&'h HistoryRecord>, Error> {
    let filter = countries.filter(|names| !names.is_empty());

    if let Some(names) = filter {
        let known: HashSet<&str> = history.iter().map(|r| r.geo().country()).collect();
        for name in names {
            if !known.contains(name.as_str()) {
                return Err(Error::UnknownCountry(name.clone()));
            }
        }
    }

    Ok(history
        .iter()
        .filter(|record| record.date() >= inception_date && record.date() <= end_date)
        .filter(|record| match filter {
            Some(names) => names.iter().any(|name| name == record.geo().country()),
            None => true,
        })
        .collect())
}

/// Groups records per geography, each group sorted by date.
/// The `BTreeMap` keeps the output ordered by (country, region).
fn group_by_geo(records: Vec<&HistoryRecord>) -> BTreeMap<&GeoId, Vec<&HistoryRecord>> {
    let mut by_geo: BTreeMap<&GeoId, Vec<&HistoryRecord>> = BTreeMap::new();
    for record in records {
        by_geo.entry(record.geo()).or_default().push(record);
    }
    for group in by_geo.values_mut() {
        group.sort_by_key(|record| record.date());
    }
    by_geo
}

fn append_geo_rows(
    rows: &mut Vec<ScenarioRow>,
    geo: &GeoId,
    records: Vec<&HistoryRecord>,
    end_date: NaiveDate,
    policy: &FuturePolicy,
) {
    // Historical part: copy recorded values, normalizing gaps as we go.
    // Missing indicators take the previous day's value; leading gaps become 0.
    let mut last_values = NpiValues::zeroes();
    let mut last_date = None;

    for record in records {
        last_values = fill_missing(record.npis(), last_values);
        last_date = Some(record.date());
        rows.push(ScenarioRow::new(geo.clone(), record.date(), last_values));
    }

    // Projected part: one row per day after the record's end through end_date.
    let Some(last_date) = last_date else {
        return;
    };
    let future_values = match policy {
        FuturePolicy::HoldLast => last_values,
        FuturePolicy::Fixed(values) => *values,
    };

    let mut date = last_date;
    while date < end_date {
        let Some(next) = date.succ_opt() else {
            break;
        };
        date = next;
        rows.push(ScenarioRow::new(geo.clone(), date, future_values));
    }
}

fn fill_missing(raw: &[Option<f64>; NPI_COUNT], previous: NpiValues) -> NpiValues {
    let previous = previous.values();
    let mut filled = [0.0; NPI_COUNT];
    for (i, value) in raw.iter().enumerate() {
        filled[i] = value.unwrap_or(previous[i]);
    }
    NpiValues::new(filled)
}
