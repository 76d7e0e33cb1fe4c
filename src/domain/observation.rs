use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One data point of a FRED series, exactly as the API delivered it.
///
/// FRED sends both fields as strings; a missing value is encoded as `"."`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub date: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realtime_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realtime_end: Option<String>,
}

impl Observation {
    /// Numeric value, or `None` for FRED's `"."` placeholder and anything unparsable.
    pub fn numeric_value(&self) -> Option<f64> {
        let trimmed = self.value.trim();
        if trimmed == "." || trimmed.is_empty() {
            return None;
        }
        let v = trimmed.parse::<f64>().ok()?;
        if v.is_finite() { Some(v) } else { None }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Metadata of a series from FRED's `/series` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesInfo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub units: String,
    #[serde(default)]
    pub frequency: String,
    #[serde(default)]
    pub last_updated: String,
}
