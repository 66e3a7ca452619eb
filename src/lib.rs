// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod roi;

// Re-export commonly used types
pub use crate::core::{
    parse_input, ComparisonResult, InputField, InputSet, ScenarioKind, ScenarioResult,
};

pub use crate::errors::{Denominator, ErrorCode, InvalidInputReason, RoiError};

pub use crate::roi::{
    compare, compare_checked, compare_with_mode, BoostAssessment, CalculationMode,
    UndefinedBoost,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter, RenderOptions};

pub use crate::config::{LoadedConfig, RoiConfig};
