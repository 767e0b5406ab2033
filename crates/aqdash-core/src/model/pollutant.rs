// crates/aqdash-core/src/model/pollutant.rs
use crate::traits::NameMatch;
use serde::Serialize;
use std::fmt;

/// A measured pollutant in the static air sample.
///
/// `safe_limit` is always positive; it is the divisor of [`Self::ratio`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PollutantRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub formula: &'static str,
    /// Measured concentration in ppm.
    pub ppm: f64,
    /// Share of all measured pollutants, 0-100.
    pub percentage: f64,
    pub hazards: &'static [&'static str],
    /// Regulatory limit in ppm.
    pub safe_limit: f64,
    pub color: &'static str,
}

/// Safety classification of a concentration relative to its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SafetyStatus {
    Safe,
    Warning,
    Unsafe,
    Dangerous,
}

impl SafetyStatus {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > 1.5 {
            SafetyStatus::Dangerous
        } else if ratio > 1.0 {
            SafetyStatus::Unsafe
        } else if ratio > 0.75 {
            SafetyStatus::Warning
        } else {
            SafetyStatus::Safe
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SafetyStatus::Safe => "Safe",
            SafetyStatus::Warning => "Warning",
            SafetyStatus::Unsafe => "Unsafe",
            SafetyStatus::Dangerous => "Dangerous",
        }
    }
}

impl fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl PollutantRecord {
    /// Concentration relative to the safe limit (1.0 = at the limit).
    #[inline]
    pub fn ratio(&self) -> f64 {
        self.ppm / self.safe_limit
    }

    pub fn status(&self) -> SafetyStatus {
        SafetyStatus::from_ratio(self.ratio())
    }

    pub fn exceeds_limit(&self) -> bool {
        self.ppm > self.safe_limit
    }

    /// Fill of the limit bar, capped at 100.
    pub fn limit_bar_percent(&self) -> f64 {
        (self.ratio() * 100.0).min(100.0)
    }

    /// `"1.3x above safe limit"` or `"Within safe limits (58% of limit)"`.
    pub fn status_text(&self) -> String {
        let ratio = self.ratio();
        if self.exceeds_limit() {
            format!("{ratio:.1}x above safe limit")
        } else {
            format!("Within safe limits ({:.0}% of limit)", ratio * 100.0)
        }
    }

    /// `"Ozone (O₃)"`
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.formula)
    }
}

impl NameMatch for PollutantRecord {
    fn name_str(&self) -> &str {
        self.name
    }
}

/// Lookup by id (`"pm25"`), formula (`"PM2.5"`) or name, ignoring case.
pub fn find_pollutant(query: &str) -> Option<&'static PollutantRecord> {
    let q = query.trim();
    POLLUTANTS.iter().find(|p| {
        p.id.eq_ignore_ascii_case(q) || p.formula.eq_ignore_ascii_case(q) || p.is_named(q)
    })
}

/// The measured air sample shown by the dashboard.
///
/// Shares need not add up to 100; the remainder is unmeasured ambient gas.
pub static POLLUTANTS: &[PollutantRecord] = &[
    PollutantRecord {
        id: "o3",
        name: "Ozone",
        formula: "O₃",
        ppm: 0.07,
        percentage: 15.0,
        hazards: &[
            "Respiratory issues",
            "Lung damage with prolonged exposure",
            "Decreased lung function",
        ],
        safe_limit: 0.07,
        color: "#60A5FA",
    },
    PollutantRecord {
        id: "co",
        name: "Carbon Monoxide",
        formula: "CO",
        ppm: 5.2,
        percentage: 25.0,
        hazards: &[
            "Reduces oxygen delivery to organs",
            "Headaches and dizziness",
            "Fatal at high concentrations",
        ],
        safe_limit: 9.0,
        color: "#F87171",
    },
    PollutantRecord {
        id: "no2",
        name: "Nitrogen Dioxide",
        formula: "NO₂",
        ppm: 0.06,
        percentage: 20.0,
        hazards: &[
            "Inflammation of airways",
            "Increased asthma attacks",
            "Reduced lung function",
        ],
        safe_limit: 0.1,
        color: "#FBBF24",
    },
    PollutantRecord {
        id: "so2",
        name: "Sulfur Dioxide",
        formula: "SO₂",
        ppm: 0.03,
        percentage: 10.0,
        hazards: &[
            "Irritation of eyes and respiratory system",
            "Aggravates asthma",
            "Can cause acid rain",
        ],
        safe_limit: 0.075,
        color: "#34D399",
    },
    PollutantRecord {
        id: "pm25",
        name: "Particulate Matter",
        formula: "PM2.5",
        ppm: 15.5,
        percentage: 30.0,
        hazards: &[
            "Penetrates deep into lungs",
            "Cardiovascular and respiratory diseases",
            "Premature death in people with heart or lung disease",
        ],
        safe_limit: 12.0,
        color: "#A78BFA",
    },
];
