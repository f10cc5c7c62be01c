//! Policy-shape integration tests.
//! Drives every projection policy over randomized histories and horizons
//! to verify the recorded prefix is copied and the projected tail follows
//! the policy's formula.


use npi_scenario_rs::NPI_COUNT;
use proptest::prelude::*;

use scenario::{assert_case, run_case};

proptest! {
    #[test]
    fn every_policy_projects_its_expected_tail(
        raw_history in prop::collection::vec(prop::array::uniform11(0u8..=4), 1..90),
        horizon in 1u64..45,
        shape_index in 0usize..16,
        raw_parameters in prop::collection::vec(0u8..=4, NPI_COUNT),
    ) {
        let catalog = catalog::all_shapes();
        let shape = &catalog[shape_index % catalog.len()];

        // Integer-valued indicators keep every asserted equality exact
        let history: Vec<[f64; NPI_COUNT]> = raw_history
            .iter()
            .map(|day| day.map(f64::from))
            .collect();
        let parameters: Vec<f64> = raw_parameters.iter().map(|&v| f64::from(v)).collect();

        let case = shape.build(history, &parameters[..shape.num_random_parameters()]);
        let rows = run_case(&case, horizon);
        assert_case(&case, horizon, &rows);
    }
}

// ---------------------------------------------------------------------------
// Deterministic spot checks for the test infrastructure itself
// ---------------------------------------------------------------------------

mod tests {
    use npi_scenario_rs::NPI_COUNT;

    use super::catalog::{FreezePolicy, MinPolicy};
    use super::scenario::{PolicyShape, assert_case, run_case};

    fn three_day_history() -> Vec<[f64; NPI_COUNT]> {
        vec![[0.0; NPI_COUNT], [1.0; NPI_COUNT], [2.0; NPI_COUNT]]
    }

    #[test]
    fn freeze_case_roundtrip() {
        let case = FreezePolicy.build(three_day_history(), &[]);
        assert_eq!(case.expected_tail, [2.0; NPI_COUNT]);

        let rows = run_case(&case, 4);
        assert_case(&case, 4, &rows);
    }

    #[test]
    fn min_case_roundtrip() {
        let case = MinPolicy.build(three_day_history(), &[]);
        assert_eq!(case.expected_tail, [0.0; NPI_COUNT]);

        let rows = run_case(&case, 2);
        assert_case(&case, 2, &rows);
    }

    #[test]
    fn zero_horizon_produces_no_projection() {
        let case = FreezePolicy.build(three_day_history(), &[]);
        let rows = run_case(&case, 0);
        assert_case(&case, 0, &rows);
        assert_eq!(rows.len(), 3);
    }
}
