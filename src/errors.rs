//! Error types for ROI calculations and the surrounding tooling.
//!
//! Library code returns [`RoiError`]; the binary wraps it in `anyhow` with
//! extra context.
//!
//! # Error Codes
//!
//! Codes are assigned by category:
//! - E001-E009: I/O errors
//! - E010-E019: Input errors
//! - E020-E029: Configuration errors
//! - E030-E039: Calculation errors
//!
//! # Example
//!
//! ```rust
//! use leadgen_roi::core::{parse_input, InputField};
//! use leadgen_roi::errors::ErrorCode;
//!
//! let err = parse_input(InputField::CostPerLead, "twenty").unwrap_err();
//! assert_eq!(err.code(), ErrorCode::INPUT_NOT_A_NUMBER);
//! assert!(err.is_user_fixable());
//! ```

use crate::core::InputField;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Structured error code for documentation and programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorCode(&'static str);

impl ErrorCode {
    /// I/O error - generic
    pub const IO_GENERIC: ErrorCode = ErrorCode("E009");

    /// Input error - empty value
    pub const INPUT_EMPTY: ErrorCode = ErrorCode("E010");
    /// Input error - value is not a number
    pub const INPUT_NOT_A_NUMBER: ErrorCode = ErrorCode("E011");
    /// Input error - NaN or infinity
    pub const INPUT_NOT_FINITE: ErrorCode = ErrorCode("E012");
    /// Input error - unrecognized field name
    pub const INPUT_UNKNOWN_FIELD: ErrorCode = ErrorCode("E013");

    /// Config error - invalid value
    pub const CONFIG_INVALID: ErrorCode = ErrorCode("E020");
    /// Config error - file could not be parsed
    pub const CONFIG_PARSE: ErrorCode = ErrorCode("E021");

    /// Calculation error - zero denominator
    pub const CALC_DIVISION_BY_ZERO: ErrorCode = ErrorCode("E030");
    /// Calculation error - finite inputs overflowed to infinity or NaN
    pub const CALC_NON_FINITE_RESULT: ErrorCode = ErrorCode("E031");

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a textual input could not be turned into a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputReason {
    Empty,
    NotANumber(String),
    NotFinite,
}

impl fmt::Display for InvalidInputReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("value is empty"),
            Self::NotANumber(text) => write!(f, "'{text}' is not a number"),
            Self::NotFinite => f.write_str("value must be finite"),
        }
    }
}

/// A divisor in the ROI pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Denominator {
    CostPerLead,
    LeadsPerDeal,
    TotalCostA,
    TotalCostB,
    /// Scenario A's net ROI, the divisor of the boost ratio.
    NetRoiA,
}

impl fmt::Display for Denominator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::CostPerLead => "costPerLead",
            Self::LeadsPerDeal => "leadsPerDeal",
            Self::TotalCostA => "totalCost of Option A",
            Self::TotalCostB => "totalCost of Option B",
            Self::NetRoiA => "netROI of Option A",
        })
    }
}

fn field_suffix(field: &Option<String>) -> String {
    field
        .as_deref()
        .map(|f| format!(" in '{f}'"))
        .unwrap_or_default()
}

#[derive(Debug, Error)]
pub enum RoiError {
    #[error("Invalid value for {}: {reason}", .field.key())]
    InvalidInput {
        field: InputField,
        reason: InvalidInputReason,
    },

    #[error("Unknown input field '{0}'")]
    UnknownField(String),

    #[error("Input {} is not finite", .field.key())]
    NonFiniteInput { field: InputField },

    #[error("Division by zero: {denominator} is 0")]
    DivisionByZero { denominator: Denominator },

    #[error("Result {quantity} is not a finite number; the inputs are too large")]
    NonFiniteResult { quantity: &'static str },

    #[error("Configuration error{}: {message}", field_suffix(.field))]
    Config {
        message: String,
        field: Option<String>,
        path: Option<PathBuf>,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RoiError {
    #[must_use]
    pub fn invalid_input(field: InputField, reason: InvalidInputReason) -> Self {
        Self::InvalidInput { field, reason }
    }

    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
            path: None,
        }
    }

    #[must_use]
    pub fn config_with_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
            path: None,
        }
    }

    /// Attach the offending config file to a config error.
    #[must_use]
    pub fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Config { message, field, .. } => Self::Config {
                message,
                field,
                path: Some(path.into()),
            },
            other => other,
        }
    }

    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput { reason, .. } => match reason {
                InvalidInputReason::Empty => ErrorCode::INPUT_EMPTY,
                InvalidInputReason::NotANumber(_) => ErrorCode::INPUT_NOT_A_NUMBER,
                InvalidInputReason::NotFinite => ErrorCode::INPUT_NOT_FINITE,
            },
            Self::UnknownField(_) => ErrorCode::INPUT_UNKNOWN_FIELD,
            Self::NonFiniteInput { .. } => ErrorCode::INPUT_NOT_FINITE,
            Self::DivisionByZero { .. } => ErrorCode::CALC_DIVISION_BY_ZERO,
            Self::NonFiniteResult { .. } => ErrorCode::CALC_NON_FINITE_RESULT,
            Self::Config { field: Some(_), .. } => ErrorCode::CONFIG_INVALID,
            Self::Config { .. } => ErrorCode::CONFIG_PARSE,
            Self::Io { .. } => ErrorCode::IO_GENERIC,
        }
    }

    /// Whether changing the inputs or config can resolve the error.
    #[must_use]
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}
