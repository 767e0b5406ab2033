// crates/aqdash-core/src/model/city.rs
use super::band::{classify, AqiBand};
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};

/// Weather and AQI snapshot for one city, as read from one CSV row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityRecord {
    pub city: String,
    pub state: String,
    pub aqi: f64,
    /// Degrees Celsius.
    pub temperature: f64,
    /// Miles per hour.
    pub wind_speed: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityRecord {
    pub fn band(&self) -> &'static AqiBand {
        classify(self.aqi)
    }

    /// `"Fresno, California"`
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

impl NameMatch for CityRecord {
    fn name_str(&self) -> &str {
        &self.city
    }
}
