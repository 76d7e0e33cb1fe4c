//! Terminal formatting for observations and series metadata.

use serde::Serialize;

use crate::domain::{DisplayUnit, Indicator, Observation, SeriesInfo};

/// One dashboard row: an indicator and its latest observation.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorRow {
    pub indicator: Indicator,
    pub series_id: &'static str,
    pub observation: Observation,
}

impl IndicatorRow {
    pub fn new(indicator: Indicator, observation: Observation) -> Self {
        Self {
            indicator,
            series_id: indicator.series_id(),
            observation,
        }
    }
}

/// Value in display units, rounded to 3 decimals; `n/a` for missing values.
pub fn format_value(observation: &Observation, unit: Option<DisplayUnit>) -> String {
    match observation.numeric_value() {
        Some(raw) => {
            let scaled = unit.map_or(raw, |u| u.scale(raw));
            let rounded = format!("{scaled:.3}");
            match unit {
                Some(u) => format!("{rounded} {}", u.label()),
                None => rounded,
            }
        }
        None => "n/a".to_string(),
    }
}

/// Single-series summary line, e.g. `UNRATE 2025-05-01 4.200 %`.
pub fn format_observation(series_id: &str, observation: &Observation) -> String {
    let unit = Indicator::from_series_id(series_id).map(Indicator::unit);
    format!(
        "{series_id} {} {}",
        observation.date,
        format_value(observation, unit)
    )
}

pub fn format_dashboard(rows: &[IndicatorRow]) -> String {
    let mut out = String::new();
    out.push_str("=== US economic indicators (FRED, latest) ===\n");
    out.push_str(format!("{:<30} {:<10} {:<12} {:>20}", "indicator", "series", "date", "value").trim_end());
    out.push('\n');
    out.push_str(format!("{:-<30} {:-<10} {:-<12} {:-<20}", "", "", "", "").trim_end());
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            "{:<30} {:<10} {:<12} {:>20}\n",
            row.indicator.display_name(),
            row.series_id,
            row.observation.date,
            format_value(&row.observation, Some(row.indicator.unit())),
        ));
    }

    out
}

pub fn format_series_info(info: &SeriesInfo) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} - {}\n", info.id, info.title));
    out.push_str(&format!("units: {}\n", or_dash(&info.units)));
    out.push_str(&format!("frequency: {}\n", or_dash(&info.frequency)));
    out.push_str(&format!("last updated: {}", or_dash(&info.last_updated)));
    out
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}
