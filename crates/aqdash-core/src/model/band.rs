// crates/aqdash-core/src/model/band.rs
use serde::Serialize;

pub const AQI_DOMAIN_MIN: f64 = 0.0;
pub const AQI_DOMAIN_MAX: f64 = 500.0;

/// One labeled AQI interval.
///
/// `low` and `high` are the integer labels of the band. For real-valued
/// readings a band owns `[low, next.low)`; the last band is closed at 500.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AqiBand {
    pub low: f64,
    pub high: f64,
    pub category: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub health: &'static str,
}

impl AqiBand {
    /// Whether `value` is classified into this band.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        try_classify(value) == Some(self)
    }

    /// `"0-50"` style label for tables.
    pub fn range_label(&self) -> String {
        format!("{}-{}", self.low, self.high)
    }
}

/// The AQI band table, ordered by ascending `low`.
///
/// Contiguous over the integer AQI values in `[0, 500]`.
pub static BANDS: &[AqiBand] = &[
    AqiBand {
        low: 0.0,
        high: 50.0,
        category: "Good",
        description: "Air quality is satisfactory, and air pollution poses little or no risk.",
        color: "#10B981",
        health: "Minimal to no health risks.",
    },
    AqiBand {
        low: 51.0,
        high: 100.0,
        category: "Moderate",
        description: "Air quality is acceptable. However, there may be a risk for some people, particularly those who are unusually sensitive to air pollution.",
        color: "#FBBF24",
        health: "Unusually sensitive people should consider reducing prolonged outdoor exertion.",
    },
    AqiBand {
        low: 101.0,
        high: 150.0,
        category: "Unhealthy for Sensitive Groups",
        description: "Members of sensitive groups may experience health effects. The general public is less likely to be affected.",
        color: "#F97316",
        health: "People with respiratory or heart disease, the elderly and children should limit prolonged outdoor exertion.",
    },
    AqiBand {
        low: 151.0,
        high: 200.0,
        category: "Unhealthy",
        description: "Some members of the general public may experience health effects; members of sensitive groups may experience more serious health effects.",
        color: "#EF4444",
        health: "Everyone should limit prolonged outdoor exertion; sensitive groups should avoid outdoor activities.",
    },
    AqiBand {
        low: 201.0,
        high: 300.0,
        category: "Very Unhealthy",
        description: "Health alert: The risk of health effects is increased for everyone.",
        color: "#7C3AED",
        health: "Everyone should avoid outdoor physical activities; sensitive groups should remain indoors.",
    },
    AqiBand {
        low: 301.0,
        high: 500.0,
        category: "Hazardous",
        description: "Health warning of emergency conditions: everyone is more likely to be affected.",
        color: "#991B1B",
        health: "Everyone should avoid all outdoor activities; sensitive groups should remain indoors and keep activity levels low.",
    },
];

/// Strict lookup: the band owning `value`.
///
/// Bands are half-open at their upper end (`50.5` is Moderate), so every
/// real value in `[0, 500]` has exactly one band. Returns `None` for
/// negatives, values above 500 and NaN.
pub fn try_classify(value: f64) -> Option<&'static AqiBand> {
    // NaN fails the range check
    if !(AQI_DOMAIN_MIN..=AQI_DOMAIN_MAX).contains(&value) {
        return None;
    }
    BANDS.iter().rev().find(|band| band.low <= value)
}

/// Dashboard lookup: like [`try_classify`], but values that match no band
/// fall back to the first entry ("Good").
///
/// The fallback keeps output compatibility with the dashboard, which never
/// shows an empty category. Callers that need to tell the difference use
/// [`try_classify`].
pub fn classify(value: f64) -> &'static AqiBand {
    try_classify(value).unwrap_or(&BANDS[0])
}
