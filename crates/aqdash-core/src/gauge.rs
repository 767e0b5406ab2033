// crates/aqdash-core/src/gauge.rs

//! Semicircular AQI gauge: value clamping and needle geometry.

use crate::error::{AqError, Result};
use crate::model::{classify, AqiBand, AQI_DOMAIN_MAX, AQI_DOMAIN_MIN};
use serde::Serialize;

/// Tick labels along the dial.
pub const TICKS: [u16; 6] = [0, 100, 200, 300, 400, 500];

/// Clamp a reading into the displayable `[0, 500]` range. NaN reads as 0.
pub fn clamp_aqi(value: f64) -> f64 {
    if value.is_nan() {
        AQI_DOMAIN_MIN
    } else {
        value.clamp(AQI_DOMAIN_MIN, AQI_DOMAIN_MAX)
    }
}

/// Needle angle in degrees: -90 at 0, 0 at 250, +90 at 500.
pub fn needle_rotation(value: f64) -> f64 {
    clamp_aqi(value) / AQI_DOMAIN_MAX * 180.0 - 90.0
}

/// Everything the gauge widget draws for one reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gauge {
    pub raw: f64,
    pub value: f64,
    pub rotation: f64,
    pub band: &'static AqiBand,
}

impl Gauge {
    pub fn new(aqi: f64) -> Self {
        let value = clamp_aqi(aqi);
        Gauge {
            raw: aqi,
            value,
            rotation: needle_rotation(value),
            band: classify(value),
        }
    }

    /// Background of the health-advice panel: the band color at 20%.
    pub fn advice_background(&self) -> Result<String> {
        hex_to_rgba(self.band.color, 0.2)
    }
}

/// `"#10B981"` → `"rgba(16, 185, 129, 0.2)"`.
pub fn hex_to_rgba(hex: &str, alpha: f64) -> Result<String> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    // `from_str_radix` alone would accept a leading '+'
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AqError::InvalidData(format!("not a #RRGGBB color: {hex:?}")));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| AqError::InvalidData(format!("not a #RRGGBB color: {hex:?}")))
    };
    let (r, g, b) = (channel(0..2)?, channel(2..4)?, channel(4..6)?);
    Ok(format!("rgba({r}, {g}, {b}, {alpha})"))
}
