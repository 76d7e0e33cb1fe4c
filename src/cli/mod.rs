//! Command-line parsing for the `fred` indicator fetcher.
//!
//! Parsing is kept apart from dispatch (`crate::app`) so both can be tested
//! without touching the network.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::ConfigOverrides;
use crate::domain::Indicator;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "fred", version, about = "Latest US economic indicators from FRED")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Args, Clone)]
pub struct GlobalArgs {
    /// FRED API key (overrides --config and FRED_API_KEY).
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// JSON key file of the form {"api_keys": {"fred": "..."}}.
    #[arg(long = "config", value_name = "JSON", global = true)]
    pub key_file: Option<PathBuf>,

    /// Base URL of the FRED API (defaults to FRED_BASE_URL or the public endpoint).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds; 0 disables it.
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalArgs {
    pub fn config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_key: self.api_key.clone(),
            key_file: self.key_file.clone(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout,
        }
    }
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Latest observation of any FRED series.
    Latest {
        /// FRED series identifier, e.g. T10Y2Y.
        series_id: String,
    },
    /// Latest observation of one of the headline indicators.
    Indicator {
        #[arg(value_enum)]
        indicator: Indicator,
    },
    /// Latest observation of GDP, inflation, unemployment and the fed funds rate.
    Dashboard,
    /// Series metadata (title, units, frequency).
    Info { series_id: String },
}
