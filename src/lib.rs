//! `fred-indicators` library crate.
//!
//! Fetches the latest observation of FRED economic series. The binary (`fred`)
//! is a thin wrapper around this library so the client can be used directly:
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let client = fred_indicators::FredClient::from_env()?;
//! let gdp = client.latest_gdp().await?;
//! println!("{} {}", gdp.date, gdp.value);
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod report;

pub use config::{ApiKey, FredConfig};
pub use data::FredClient;
pub use domain::{Indicator, Observation, SeriesInfo};
pub use error::{AppError, ConfigError, FetchError};
