//! Interpretation of the ROI boost percentage.
//!
//! The raw `roi_boost_percent` is a ratio of ratios and is reported as-is,
//! never clamped. It only reads as "B improves on A by N%" when Scenario A
//! actually earns a positive return; otherwise the sign flips meaning and
//! the figure is classified as undefined.

use crate::core::ComparisonResult;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum BoostAssessment {
    /// B returns more per dollar than A, by this percentage.
    Higher(f64),
    /// B returns less per dollar than A, by this (positive) percentage.
    Lower(f64),
    Unchanged,
    Undefined(UndefinedBoost),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UndefinedBoost {
    /// A zero divisor somewhere in the pipeline produced NaN or infinity.
    NonFinite,
    /// Scenario A breaks even or loses money, so there is no baseline gain
    /// to improve on.
    NonPositiveBaseline,
}

impl fmt::Display for UndefinedBoost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NonFinite => "a zero input or cost makes the ratio non-finite",
            Self::NonPositiveBaseline => "Option A does not return a profit to compare against",
        })
    }
}

impl BoostAssessment {
    pub fn assess(result: &ComparisonResult) -> Self {
        let boost = result.roi_boost_percent;
        let baseline = result.scenario_a.return_on_cost();

        if !boost.is_finite() || !baseline.is_finite() {
            Self::Undefined(UndefinedBoost::NonFinite)
        } else if baseline <= 0.0 {
            Self::Undefined(UndefinedBoost::NonPositiveBaseline)
        } else if boost > 0.0 {
            Self::Higher(boost)
        } else if boost < 0.0 {
            Self::Lower(-boost)
        } else {
            Self::Unchanged
        }
    }

    pub fn is_defined(&self) -> bool {
        !matches!(self, Self::Undefined(_))
    }
}
