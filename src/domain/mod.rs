//! Domain types shared by the client, the reports and the CLI.
//!
//! - `Indicator`: the four headline series with their fixed FRED ids
//! - `Observation` / `SeriesInfo`: records as delivered by FRED

pub mod indicator;
pub mod observation;

pub use indicator::*;
pub use observation::*;
