//! Integration tests for the MIN and MAX projection policies.

use npi_scenario_rs::{MAX_NPIS, Scenario, generate_scenario};

use crate::common::{build_history, countries, date};

#[test]
fn min_projects_every_indicator_to_zero() {
    let history = build_history(&[("Italy", "")], date(2020, 12, 31));
    let filter = countries(&["Italy"]);

    let rows = generate_scenario(
        date(2021, 1, 1),
        date(2021, 1, 31),
        &history,
        Some(filter.as_slice()),
        Some(&Scenario::Min),
    )
    .expect("generation should succeed");

    assert_eq!(rows.len(), 397);

    let tail = &rows[rows.len() - 31..];
    let tail_sum: f64 = tail.iter().map(|r| r.npi_values().iter().sum::<f64>()).sum();
    assert_eq!(tail_sum, 0.0, "projected indicators must all be zero");

    // The recorded part is untouched
    let recorded_sum: f64 = rows[..rows.len() - 31]
        .iter()
        .map(|r| r.npi_values().iter().sum::<f64>())
        .sum();
    assert!(recorded_sum > 0.0);
}

#[test]
fn max_projects_every_indicator_to_its_documented_cap() {
    let history = build_history(&[("Italy", "")], date(2020, 12, 31));
    let filter = countries(&["Italy"]);

    let rows = generate_scenario(
        date(2021, 1, 1),
        date(2021, 1, 31),
        &history,
        Some(filter.as_slice()),
        Some(&Scenario::Max),
    )
    .expect("generation should succeed");

    assert_eq!(rows.len(), 397);

    let tail = &rows[rows.len() - 31..];
    for row in tail {
        assert_eq!(row.npi_values(), MAX_NPIS);
    }

    // Per-column mean over the projection equals the cap, so the mean row
    // sums to the sum of the caps
    let mean_row_sum = tail
        .iter()
        .map(|r| r.npi_values().iter().sum::<f64>())
        .sum::<f64>()
        / tail.len() as f64;
    assert_eq!(mean_row_sum, MAX_NPIS.iter().sum::<f64>());
    assert_eq!(MAX_NPIS.iter().sum::<f64>(), 30.0);
}
