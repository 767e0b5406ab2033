// crates/aqdash-core/src/lib.rs

//! # aqdash-core
//!
//! Data and arithmetic behind the air-quality dashboard:
//!
//! - [`model::band`]: the AQI band table and the classifier ([`classify`]).
//! - [`model::pollutant`]: the static pollutant table and its safety ratios.
//! - [`loader`]: the CSV loader for city weather/AQI snapshots.
//! - [`gauge`] and [`distribution`]: the numbers the gauge and the
//!   distribution view are drawn from.
//! - [`dashboard`]: session state (loaded cities, selection, search).
//!
//! ```rust
//! use aqdash_core::prelude::*;
//!
//! let band = classify(87.0);
//! assert_eq!(band.category, "Moderate");
//!
//! let parsed = parse_cities("city,state,aqi,temperature,windSpeed,humidity,latitude,longitude\n\
//!                            Fresno,California,158,31,4,35,36.7,-119.7\n");
//! assert_eq!(parsed.records[0].band().category, "Unhealthy");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "json")]
pub mod api; // JSON views
pub mod common;
pub mod dashboard;
pub mod distribution;
pub mod error;
pub mod gauge;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::error::{AqError, Result};
pub use crate::common::DatasetStats;
pub use crate::loader::{load_cities, parse_cities, try_load_cities, CsvParse, RowIssue};
pub use crate::model::{
    classify, try_classify, AqiBand, CityRecord, PollutantRecord, SafetyStatus, BANDS, POLLUTANTS,
};
