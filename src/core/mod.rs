//! Core data types for the ROI comparison.
//!
//! Everything here is plain data: the six-field [`InputSet`] supplied by the
//! caller and the read-only [`ScenarioResult`] / [`ComparisonResult`] records
//! produced by [`crate::roi::compare`].

pub mod inputs;
pub mod results;

pub use inputs::{parse_input, InputField, InputSet};
pub use results::{ComparisonResult, ScenarioKind, ScenarioResult};

/// Days in a billing month.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Months in a billing year.
pub const MONTHS_PER_YEAR: f64 = 12.0;
