//! Reporting: text rendering of fetched observations.
//!
//! Formatting lives here so the client stays free of presentation concerns.

pub mod format;

pub use format::*;
