use anyhow::{Context, Result};
use std::{env, fs::File};

use chrono::NaiveDate;
use npi_scenario_rs::{
    DEFAULT_DATA_URL, Error, Scenario, ensure_dataset, generate_scenario, load_history,
    setup_logging, write_scenario,
};

const USAGE: &str =
    "Usage: npi-scenario-rs <data.csv> <start-date> <end-date> [countries] [scenario]";

fn main() -> Result<()> {
    setup_logging()?;

    let args = parse_args()?;

    // The dataset is fetched into the cache file on first use
    let data_path = ensure_dataset(DEFAULT_DATA_URL, &args.data_path)?;
    let reader = File::open(&data_path)
        .with_context(|| format!("failed to open dataset {}", data_path.display()))?;
    let history = load_history(reader, handle_row_error)?;

    let rows = generate_scenario(
        args.start_date,
        args.end_date,
        &history,
        args.countries.as_deref(),
        args.scenario.as_ref(),
    )?;
    write_scenario(std::io::stdout(), &rows)?;

    Ok(())
}

struct Args {
    data_path: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    countries: Option<Vec<String>>,
    scenario: Option<Scenario>,
}

fn parse_args() -> Result<Args> {
    let mut args = env::args().skip(1);

    let data_path = args.next().ok_or_else(|| anyhow::anyhow!(USAGE))?;
    let start_date = parse_cli_date(&args.next().ok_or_else(|| anyhow::anyhow!(USAGE))?)?;
    let end_date = parse_cli_date(&args.next().ok_or_else(|| anyhow::anyhow!(USAGE))?)?;

    // Comma-separated country names; omit for every geography
    let countries = args.next().map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect::<Vec<String>>()
    });

    let scenario = args
        .next()
        .map(|raw| raw.parse::<Scenario>())
        .transpose()?;

    Ok(Args {
        data_path,
        start_date,
        end_date,
        countries,
        scenario,
    })
}

fn parse_cli_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("invalid date (expected YYYY-MM-DD): {raw}"))
}

// Just logs skipped rows here, but can be changed to do more sophisticated error handling
fn handle_row_error(error: Error) {
    tracing::warn!("{error}")
}
