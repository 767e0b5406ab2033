// crates/aqdash-core/src/loader/csv.rs

//! Positional CSV parsing for city rows.
//!
//! Column order is fixed:
//! `city, state, aqi, temperature, windSpeed, humidity, latitude, longitude`.
//! The header line is skipped without being checked.

use crate::model::CityRecord;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

pub const COLUMNS: [&str; 8] = [
    "city",
    "state",
    "aqi",
    "temperature",
    "windSpeed",
    "humidity",
    "latitude",
    "longitude",
];

/// Why a row was skipped.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum RowError {
    #[error("expected {} columns, found {found}", COLUMNS.len())]
    ColumnCount { found: usize },

    #[error("column `{column}` is not a number: {value:?}")]
    InvalidNumber { column: &'static str, value: String },
}

/// A skipped row with its position in the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowIssue {
    /// 1-based line number; the header is line 1.
    pub line: usize,
    pub error: RowError,
    pub raw: String,
}

/// Parsed records plus the rows that were skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvParse {
    pub records: Vec<CityRecord>,
    pub issues: Vec<RowIssue>,
}

impl CsvParse {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Parse the city CSV text.
///
/// Blank lines (including the one a trailing newline leaves behind) are
/// ignored. Malformed rows are skipped and reported in [`CsvParse::issues`];
/// parsing never aborts.
pub fn parse_cities(text: &str) -> CsvParse {
    let mut out = CsvParse::default();

    for (idx, raw) in text.split('\n').enumerate().skip(1) {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }

        match parse_row(line) {
            Ok(record) => out.records.push(record),
            Err(error) => {
                let line_no = idx + 1;
                warn!(line = line_no, %error, "skipping malformed city row");
                out.issues.push(RowIssue {
                    line: line_no,
                    error,
                    raw: line.to_string(),
                });
            }
        }
    }

    out
}

fn parse_row(line: &str) -> Result<CityRecord, RowError> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != COLUMNS.len() {
        return Err(RowError::ColumnCount {
            found: fields.len(),
        });
    }

    let num = |i: usize| parse_number(fields[i], COLUMNS[i]);

    Ok(CityRecord {
        city: fields[0].trim().to_string(),
        state: fields[1].trim().to_string(),
        aqi: num(2)?,
        temperature: num(3)?,
        wind_speed: num(4)?,
        humidity: num(5)?,
        latitude: num(6)?,
        longitude: num(7)?,
    })
}

fn parse_number(raw: &str, column: &'static str) -> Result<f64, RowError> {
    let invalid = || RowError::InvalidNumber {
        column,
        value: raw.to_string(),
    };
    // `f64::from_str` accepts "NaN" and "inf"; neither is a usable reading.
    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "city,state,aqi,temperature,windSpeed,humidity,latitude,longitude";

    #[test]
    fn two_rows_in_order() {
        let text = format!(
            "{HEADER}\nCityA,StateA,42,20,5,60,1.0,2.0\nCityB,StateB,160,30,10,40,3.0,4.0"
        );
        let parsed = parse_cities(&text);
        assert!(parsed.is_clean());
        assert_eq!(parsed.records.len(), 2);

        let a = &parsed.records[0];
        assert_eq!(a.city, "CityA");
        assert_eq!(a.state, "StateA");
        assert_eq!(a.aqi, 42.0);
        assert_eq!(a.temperature, 20.0);
        assert_eq!(a.wind_speed, 5.0);
        assert_eq!(a.humidity, 60.0);
        assert_eq!(a.latitude, 1.0);
        assert_eq!(a.longitude, 2.0);

        let b = &parsed.records[1];
        assert_eq!(b.city, "CityB");
        assert_eq!(b.aqi, 160.0);
        assert_eq!((b.latitude, b.longitude), (3.0, 4.0));
    }

    #[test]
    fn trailing_newline_adds_no_record() {
        let body = format!("{HEADER}\nCityA,StateA,42,20,5,60,1.0,2.0\nCityB,StateB,160,30,10,40,3.0,4.0");
        let with_newline = format!("{body}\n");
        assert_eq!(
            parse_cities(&body).records.len(),
            parse_cities(&with_newline).records.len()
        );
        assert!(parse_cities(&with_newline).is_clean());
    }

    #[test]
    fn crlf_line_endings() {
        let text = format!("{HEADER}\r\nCityA,StateA,42,20,5,60,1.0,2.0\r\n");
        let parsed = parse_cities(&text);
        assert!(parsed.is_clean());
        assert_eq!(parsed.records[0].longitude, 2.0);
    }

    #[test]
    fn header_only_and_empty_input() {
        assert!(parse_cities(HEADER).records.is_empty());
        assert!(parse_cities("").records.is_empty());
    }

    #[test]
    fn short_row_is_skipped_with_line_number() {
        let text = format!("{HEADER}\nCityA,StateA,42\nCityB,StateB,160,30,10,40,3.0,4.0\n");
        let parsed = parse_cities(&text);
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].city, "CityB");
        assert_eq!(parsed.issues.len(), 1);
        assert_eq!(parsed.issues[0].line, 2);
        assert_eq!(parsed.issues[0].error, RowError::ColumnCount { found: 3 });
        assert_eq!(parsed.issues[0].raw, "CityA,StateA,42");
    }

    #[test]
    fn extra_column_is_skipped() {
        let text = format!("{HEADER}\nCityA,StateA,42,20,5,60,1.0,2.0,extra\n");
        let parsed = parse_cities(&text);
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.issues[0].error, RowError::ColumnCount { found: 9 });
    }

    #[test]
    fn non_numeric_field_names_its_column() {
        let text = format!("{HEADER}\nCityA,StateA,high,20,5,60,1.0,2.0\nCityB,StateB,1,2,3,4,NaN,6\n");
        let parsed = parse_cities(&text);
        assert!(parsed.records.is_empty());
        assert_eq!(
            parsed.issues[0].error,
            RowError::InvalidNumber {
                column: "aqi",
                value: "high".to_string()
            }
        );
        assert_eq!(
            parsed.issues[1].error,
            RowError::InvalidNumber {
                column: "latitude",
                value: "NaN".to_string()
            }
        );
    }

    #[test]
    fn whitespace_around_fields_is_tolerated() {
        let text = format!("{HEADER}\n Reno , Nevada , 37 ,15,8,22, 39.5,-119.8\n");
        let parsed = parse_cities(&text);
        assert!(parsed.is_clean());
        assert_eq!(parsed.records[0].city, "Reno");
        assert_eq!(parsed.records[0].aqi, 37.0);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            RowError::ColumnCount { found: 3 }.to_string(),
            "expected 8 columns, found 3"
        );
    }
}
