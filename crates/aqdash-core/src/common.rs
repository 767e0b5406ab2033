// crates/aqdash-core/src/common.rs
use crate::loader::CsvParse;
use crate::model::CityRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Simple aggregate statistics for a loaded city dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStats {
    pub cities: usize,
    /// Distinct state/region names.
    pub states: usize,
    pub skipped_rows: usize,
    /// `None` when no city was loaded.
    pub mean_aqi: Option<f64>,
}

impl DatasetStats {
    pub fn from_records(records: &[CityRecord], skipped_rows: usize) -> Self {
        let states: BTreeSet<&str> = records.iter().map(|c| c.state.as_str()).collect();
        let mean_aqi = if records.is_empty() {
            None
        } else {
            Some(records.iter().map(|c| c.aqi).sum::<f64>() / records.len() as f64)
        };
        DatasetStats {
            cities: records.len(),
            states: states.len(),
            skipped_rows,
            mean_aqi,
        }
    }
}

impl From<&CsvParse> for DatasetStats {
    fn from(parsed: &CsvParse) -> Self {
        DatasetStats::from_records(&parsed.records, parsed.issues.len())
    }
}
