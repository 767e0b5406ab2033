// crates/aqdash-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the Physical Layer (I/O, decompression) and delegates to the
//! CSV parser. Every call re-reads and re-parses the resource; nothing is
//! cached between calls.

use crate::error::Result;
use crate::model::CityRecord;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

pub mod common_io;
mod csv;

pub use self::csv::{parse_cities, CsvParse, RowError, RowIssue, COLUMNS};

/// The sample dataset compiled into the crate.
pub const EMBEDDED_CITIES_CSV: &str = include_str!("../../data/cities.csv");

pub fn default_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

pub fn default_dataset_filename() -> &'static str {
    "cities.csv"
}

pub fn default_dataset_path() -> PathBuf {
    default_data_dir().join(default_dataset_filename())
}

/// **Fallible Loader:** reads and parses the resource at `path`.
///
/// Files ending in `.gz` are decompressed when the `compact` feature is on.
pub fn try_load_cities(path: impl AsRef<Path>) -> Result<CsvParse> {
    let path = path.as_ref();
    let text = common_io::read_text(path)?;
    let parsed = parse_cities(&text);
    debug!(
        path = %path.display(),
        records = parsed.records.len(),
        skipped = parsed.issues.len(),
        "loaded city dataset"
    );
    Ok(parsed)
}

/// **Dashboard Loader:** like [`try_load_cities`], but an unreadable
/// resource yields an empty list.
///
/// An empty result means "no data available", not "zero cities exist";
/// the failure itself is only logged.
pub fn load_cities(path: impl AsRef<Path>) -> Vec<CityRecord> {
    let path = path.as_ref();
    match try_load_cities(path) {
        Ok(parsed) => parsed.records,
        Err(e) => {
            error!(path = %path.display(), error = %e, "city dataset unavailable");
            Vec::new()
        }
    }
}

/// Parses [`EMBEDDED_CITIES_CSV`].
pub fn embedded_cities() -> CsvParse {
    parse_cities(EMBEDDED_CITIES_CSV)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_is_clean() {
        let parsed = embedded_cities();
        assert!(parsed.is_clean(), "issues: {:?}", parsed.issues);
        assert_eq!(parsed.records.len(), 20);
        assert_eq!(parsed.records[0].city, "Los Angeles");
    }

    #[test]
    fn default_path_points_at_shipped_file() {
        assert!(default_dataset_path().ends_with("data/cities.csv"));
        assert_eq!(load_cities(default_dataset_path()).len(), 20);
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let path = default_data_dir().join("does-not-exist.csv");
        assert!(load_cities(&path).is_empty());
        assert!(matches!(
            try_load_cities(&path),
            Err(crate::AqError::NotFound(_))
        ));
    }
}
