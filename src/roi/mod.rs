pub mod boost;


use crate::core::{
    ComparisonResult, InputSet, ScenarioKind, ScenarioResult, DAYS_PER_MONTH, MONTHS_PER_YEAR,
};
use crate::errors::{Denominator, RoiError};
use serde::{Deserialize, Serialize};

pub use boost::{BoostAssessment, UndefinedBoost};

/// How zero denominators and non-finite inputs are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMode {
    /// Let the arithmetic produce infinities and NaN.
    Permissive,
    /// Fail with [`RoiError`] before dividing by zero.
    #[default]
    Strict,
}

/// Ad spend over a full year.
pub fn yearly_ad_spend(inputs: &InputSet) -> f64 {
    inputs.daily_ad_spend * DAYS_PER_MONTH * MONTHS_PER_YEAR
}

/// Total cost of a scenario: its fee basis plus the shared ad spend.
pub fn total_cost(kind: ScenarioKind, inputs: &InputSet) -> f64 {
    let fee = match kind {
        ScenarioKind::A => inputs.recurring_fee * MONTHS_PER_YEAR,
        ScenarioKind::B => inputs.one_time_fee,
    };
    fee + yearly_ad_spend(inputs)
}

/// Run the lead → deal → income pipeline for one scenario.
///
/// Both scenarios share everything except the total cost.
pub fn evaluate_scenario(kind: ScenarioKind, inputs: &InputSet) -> ScenarioResult {
    let total_cost = total_cost(kind, inputs);
    let leads_generated = yearly_ad_spend(inputs) / inputs.cost_per_lead;
    let deals_closed = leads_generated / inputs.leads_per_deal;
    let gross_commission_income = deals_closed * inputs.deal_value;

    ScenarioResult {
        scenario: kind,
        total_cost,
        leads_generated,
        cost_per_lead: inputs.cost_per_lead,
        deals_closed,
        gross_commission_income,
        net_roi: gross_commission_income - total_cost,
    }
}

/// Percentage by which B's return on cost exceeds A's.
///
/// Signed and unclamped; see [`BoostAssessment`] for an interpretation.
pub fn roi_boost_percent(a: &ScenarioResult, b: &ScenarioResult) -> f64 {
    (b.return_on_cost() / a.return_on_cost() - 1.0) * 100.0
}

/// Compare the recurring-fee and one-time-fee scenarios.
///
/// Pure: zero divisors yield infinities or NaN in the result instead of an
/// error. Use [`compare_checked`] to reject them.
///
/// # Example
///
/// ```rust
/// use leadgen_roi::core::InputSet;
/// use leadgen_roi::roi::compare;
///
/// let result = compare(&InputSet::default());
/// assert_eq!(result.scenario_a.total_cost, 33_000.0);
/// assert_eq!(result.scenario_b.net_roi, 74_375.0);
/// assert!((result.roi_boost_percent - 377.737).abs() < 0.001);
/// ```
pub fn compare(inputs: &InputSet) -> ComparisonResult {
    let scenario_a = evaluate_scenario(ScenarioKind::A, inputs);
    let scenario_b = evaluate_scenario(ScenarioKind::B, inputs);

    ComparisonResult {
        inputs: *inputs,
        yearly_ad_spend: yearly_ad_spend(inputs),
        roi_boost_percent: roi_boost_percent(&scenario_a, &scenario_b),
        scenario_a,
        scenario_b,
    }
}

/// Like [`compare`], but fails instead of producing non-finite numbers.
///
/// Rejects non-finite inputs, then any zero divisor: `costPerLead`,
/// `leadsPerDeal`, either total cost, or Scenario A's net ROI (the divisor
/// of the boost ratio). Finite inputs large enough to overflow fail with
/// [`RoiError::NonFiniteResult`].
pub fn compare_checked(inputs: &InputSet) -> Result<ComparisonResult, RoiError> {
    if let Some(field) = inputs.first_non_finite() {
        return Err(RoiError::NonFiniteInput { field });
    }

    ensure_non_zero(inputs.cost_per_lead, Denominator::CostPerLead)?;
    ensure_non_zero(inputs.leads_per_deal, Denominator::LeadsPerDeal)?;
    ensure_non_zero(total_cost(ScenarioKind::A, inputs), Denominator::TotalCostA)?;
    ensure_non_zero(total_cost(ScenarioKind::B, inputs), Denominator::TotalCostB)?;

    let result = compare(inputs);
    ensure_non_zero(result.scenario_a.net_roi, Denominator::NetRoiA)?;
    if let Some(quantity) = result.first_non_finite() {
        return Err(RoiError::NonFiniteResult { quantity });
    }

    Ok(result)
}

/// Dispatch to [`compare`] or [`compare_checked`].
pub fn compare_with_mode(
    inputs: &InputSet,
    mode: CalculationMode,
) -> Result<ComparisonResult, RoiError> {
    match mode {
        CalculationMode::Permissive => Ok(compare(inputs)),
        CalculationMode::Strict => compare_checked(inputs),
    }
}

fn ensure_non_zero(value: f64, denominator: Denominator) -> Result<(), RoiError> {
    if value == 0.0 {
        Err(RoiError::DivisionByZero { denominator })
    } else {
        Ok(())
    }
}
