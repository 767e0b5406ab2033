// crates/aqdash-core/src/api.rs

//! JSON views for front ends.
//!
//! Flat, serializable snapshots with the derived fields (category, status,
//! ratios) already computed, so a consumer never re-implements the
//! classification rules.

use crate::dashboard::tips;
use crate::error::Result;
use crate::gauge::Gauge;
use crate::model::{AqiBand, CityRecord, PollutantRecord, SafetyStatus};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityView<'a> {
    pub city: &'a str,
    pub state: &'a str,
    pub aqi: f64,
    pub category: &'static str,
    pub color: &'static str,
    pub temperature: f64,
    pub wind_speed: f64,
    pub humidity: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl<'a> From<&'a CityRecord> for CityView<'a> {
    fn from(c: &'a CityRecord) -> Self {
        let band = c.band();
        CityView {
            city: &c.city,
            state: &c.state,
            aqi: c.aqi,
            category: band.category,
            color: band.color,
            temperature: c.temperature,
            wind_speed: c.wind_speed,
            humidity: c.humidity,
            latitude: c.latitude,
            longitude: c.longitude,
        }
    }
}

/// A city with its gauge reading and advice, as the main dashboard panel
/// shows it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityDetailView<'a> {
    #[serde(flatten)]
    pub city: CityView<'a>,
    pub gauge: Gauge,
    pub advice_background: String,
    pub tips: [&'static str; 3],
}

impl<'a> CityDetailView<'a> {
    pub fn new(c: &'a CityRecord) -> Result<Self> {
        let gauge = Gauge::new(c.aqi);
        Ok(CityDetailView {
            city: CityView::from(c),
            advice_background: gauge.advice_background()?,
            gauge,
            tips: tips(c.aqi),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PollutantView {
    #[serde(flatten)]
    pub record: PollutantRecord,
    pub ratio: f64,
    pub status: SafetyStatus,
    pub status_text: String,
    pub limit_bar_percent: f64,
}

impl From<&PollutantRecord> for PollutantView {
    fn from(p: &PollutantRecord) -> Self {
        PollutantView {
            record: *p,
            ratio: p.ratio(),
            status: p.status(),
            status_text: p.status_text(),
            limit_bar_percent: p.limit_bar_percent(),
        }
    }
}

pub fn bands_json(bands: &[AqiBand]) -> Result<String> {
    to_json_pretty(&bands)
}

pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
