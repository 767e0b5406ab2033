//! aqdash prelude: bring common types and traits into scope.

#![allow(unused_imports)]

pub use crate::common::DatasetStats;
pub use crate::dashboard::{tips, Dashboard, DashboardEvent};
pub use crate::distribution::{by_hazard, slices, Distribution, Slice};
pub use crate::error::{AqError, Result};
pub use crate::gauge::{clamp_aqi, hex_to_rgba, needle_rotation, Gauge};
pub use crate::loader::{
    embedded_cities, load_cities, parse_cities, try_load_cities, CsvParse, RowError, RowIssue,
};
pub use crate::model::{
    classify, find_pollutant, try_classify, AqiBand, CityRecord, PollutantRecord, SafetyStatus,
    BANDS, POLLUTANTS,
};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::NameMatch;
