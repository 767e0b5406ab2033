// crates/aqdash-core/src/model/mod.rs

//! # Domain Model
//!
//! Static tables (bands, pollutants) and the parsed city snapshot.

pub mod band;
pub mod city;
pub mod pollutant;

pub use band::{classify, try_classify, AqiBand, AQI_DOMAIN_MAX, AQI_DOMAIN_MIN, BANDS};
pub use city::CityRecord;
pub use pollutant::{find_pollutant, PollutantRecord, SafetyStatus, POLLUTANTS};
