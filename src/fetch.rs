//! Module for downloading and caching the raw intervention dataset.
//!
//! The generator itself never touches the network; this collaborator fills the
//! flat-file cache the CLI reads from.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Latest snapshot of the Oxford COVID-19 Government Response Tracker.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/OxCGRT/covid-policy-tracker/master/data/OxCGRT_latest.csv";

/// Returns `cache_path`, downloading `url` into it first unless the file
/// already exists.
pub fn ensure_dataset(url: &str, cache_path: impl AsRef<Path>) -> Result<PathBuf, Error> {
    let cache_path = cache_path.as_ref();

    if cache_path.exists() {
        tracing::debug!(path = %cache_path.display(), "dataset cache hit");
        return Ok(cache_path.to_path_buf());
    }

    if let Some(parent) = cache_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    tracing::info!(url, path = %cache_path.display(), "downloading dataset");
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let body = response.bytes()?;
    fs::write(cache_path, &body)?;

    Ok(cache_path.to_path_buf())
}
