use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The four headline US indicators with a fixed FRED series each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Indicator {
    Gdp,
    Inflation,
    Unemployment,
    InterestRate,
}

/// How a raw observation value should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayUnit {
    /// Raw value is billions of USD; shown as trillions.
    TrillionsUsd,
    /// Index level (e.g. CPI, 1982-84=100).
    Index,
    Percent,
}

impl DisplayUnit {
    pub fn label(self) -> &'static str {
        match self {
            DisplayUnit::TrillionsUsd => "trillion USD",
            DisplayUnit::Index => "index",
            DisplayUnit::Percent => "%",
        }
    }

    /// Convert a raw FRED value into this unit.
    pub fn scale(self, raw: f64) -> f64 {
        match self {
            DisplayUnit::TrillionsUsd => raw / 1000.0,
            DisplayUnit::Index | DisplayUnit::Percent => raw,
        }
    }
}

impl Indicator {
    pub const ALL: [Indicator; 4] = [
        Indicator::Gdp,
        Indicator::Inflation,
        Indicator::Unemployment,
        Indicator::InterestRate,
    ];

    pub fn series_id(self) -> &'static str {
        match self {
            Indicator::Gdp => "GDP",
            Indicator::Inflation => "CPIAUCSL",
            Indicator::Unemployment => "UNRATE",
            Indicator::InterestRate => "FEDFUNDS",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Indicator::Gdp => "US GDP",
            Indicator::Inflation => "US CPI (inflation)",
            Indicator::Unemployment => "US unemployment rate",
            Indicator::InterestRate => "Effective federal funds rate",
        }
    }

    pub fn unit(self) -> DisplayUnit {
        match self {
            Indicator::Gdp => DisplayUnit::TrillionsUsd,
            Indicator::Inflation => DisplayUnit::Index,
            Indicator::Unemployment | Indicator::InterestRate => DisplayUnit::Percent,
        }
    }

    pub fn from_series_id(series_id: &str) -> Option<Indicator> {
        Indicator::ALL.into_iter().find(|i| i.series_id() == series_id)
    }
}
