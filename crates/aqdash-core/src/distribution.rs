// crates/aqdash-core/src/distribution.rs

//! Summary numbers for the pollutant distribution view.

use crate::model::PollutantRecord;
use serde::Serialize;

/// One pie-chart slice.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

impl Slice {
    /// Tooltip text: `"Ozone (O₃): 15.0%"`.
    pub fn tooltip(&self) -> String {
        format!("{}: {:.1}%", self.label, self.value)
    }
}

pub fn slices(records: &[PollutantRecord]) -> Vec<Slice> {
    records
        .iter()
        .map(|p| Slice {
            label: p.label(),
            value: p.percentage,
            color: p.color,
        })
        .collect()
}

/// Records ordered by descending safety ratio. Ties keep table order.
pub fn by_hazard(records: &[PollutantRecord]) -> Vec<&PollutantRecord> {
    let mut sorted: Vec<&PollutantRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.ratio().total_cmp(&a.ratio()));
    sorted
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution<'a> {
    /// Sum of measured shares. Anything below 100 is unmeasured ambient gas.
    pub total_percentage: f64,
    pub most_prevalent: &'a PollutantRecord,
    pub most_hazardous: &'a PollutantRecord,
}

impl<'a> Distribution<'a> {
    /// `None` for an empty table.
    pub fn from_records(records: &'a [PollutantRecord]) -> Option<Self> {
        let first = records.first()?;
        let mut most_prevalent = first;
        let mut most_hazardous = first;
        for p in &records[1..] {
            if p.percentage > most_prevalent.percentage {
                most_prevalent = p;
            }
            if p.ratio() > most_hazardous.ratio() {
                most_hazardous = p;
            }
        }
        Some(Distribution {
            total_percentage: records.iter().map(|p| p.percentage).sum(),
            most_prevalent,
            most_hazardous,
        })
    }

    /// Remaining share attributed to unmeasured gases.
    pub fn unmeasured_percentage(&self) -> f64 {
        (100.0 - self.total_percentage).max(0.0)
    }

    /// `"Exceeds safe limit by 29%"` or `"At 60% of safe limit"`.
    pub fn hazard_note(&self) -> String {
        let ratio = self.most_hazardous.ratio();
        if ratio > 1.0 {
            format!("Exceeds safe limit by {:.0}%", (ratio - 1.0) * 100.0)
        } else {
            format!("At {:.0}% of safe limit", ratio * 100.0)
        }
    }
}
