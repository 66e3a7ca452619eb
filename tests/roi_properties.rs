//! Property-based tests for the scenario comparison
//!
//! These tests verify invariants that should hold for all inputs:
//! - GCI and net ROI are derived exactly from deals and total cost
//! - Both scenarios share leads, deals and GCI
//! - Scaling the deal value scales GCI and leaves deals unchanged
//! - The checked comparison agrees with the permissive one when it succeeds
//! - Rendered numbers parse back to the rounded value

use leadgen_roi::formatting::{format_currency, format_number};
use leadgen_roi::{compare, compare_checked, parse_input, InputField, InputSet, RoiError};
use proptest::prelude::*;

/// Inputs in the ranges a user would plausibly type, all divisors non-zero.
fn realistic_inputs() -> impl Strategy<Value = InputSet> {
    (
        0.0..10_000.0f64,
        0.0..50_000.0f64,
        0.0..1_000.0f64,
        1.0..500.0f64,
        1.0..500.0f64,
        0.0..100_000.0f64,
    )
        .prop_map(
            |(recurring_fee, one_time_fee, daily_ad_spend, cost_per_lead, leads_per_deal, deal_value)| {
                InputSet {
                    recurring_fee,
                    one_time_fee,
                    daily_ad_spend,
                    cost_per_lead,
                    leads_per_deal,
                    deal_value,
                }
            },
        )
}

proptest! {
    /// Property: GCI is deals times deal value and net ROI is GCI minus
    /// total cost, with no rounding in between
    #[test]
    fn prop_gci_and_net_roi_are_exact(inputs in realistic_inputs()) {
        let result = compare(&inputs);
        for scenario in result.scenarios() {
            prop_assert_eq!(
                scenario.gross_commission_income,
                scenario.deals_closed * inputs.deal_value
            );
            prop_assert_eq!(
                scenario.net_roi,
                scenario.gross_commission_income - scenario.total_cost
            );
        }
    }

    /// Property: only the fee basis differs between the scenarios
    #[test]
    fn prop_scenarios_share_funnel(inputs in realistic_inputs()) {
        let result = compare(&inputs);
        let (a, b) = (&result.scenario_a, &result.scenario_b);

        prop_assert_eq!(a.leads_generated, b.leads_generated);
        prop_assert_eq!(a.deals_closed, b.deals_closed);
        prop_assert_eq!(a.gross_commission_income, b.gross_commission_income);
        prop_assert_eq!(a.cost_per_lead, b.cost_per_lead);
        prop_assert_eq!(a.total_cost, inputs.recurring_fee * 12.0 + result.yearly_ad_spend);
        prop_assert_eq!(b.total_cost, inputs.one_time_fee + result.yearly_ad_spend);
    }

    /// Property: doubling the deal value doubles GCI, shifts net ROI by the
    /// GCI increase and leaves the deal count alone
    #[test]
    fn prop_doubling_deal_value(inputs in realistic_inputs()) {
        let base = compare(&inputs);
        let doubled = compare(&inputs.with(InputField::DealValue, inputs.deal_value * 2.0));

        for (before, after) in base.scenarios().into_iter().zip(doubled.scenarios()) {
            prop_assert_eq!(after.deals_closed, before.deals_closed);
            prop_assert_eq!(after.gross_commission_income, before.gross_commission_income * 2.0);

            let shift = after.net_roi - before.net_roi;
            let tolerance = 1e-9 * before.gross_commission_income.abs().max(1.0);
            prop_assert!((shift - before.gross_commission_income).abs() <= tolerance);
        }
    }

    /// Property: with no ad spend nothing is produced and net ROI is the
    /// negated cost
    #[test]
    fn prop_zero_ad_spend(inputs in realistic_inputs()) {
        let result = compare(&inputs.with(InputField::DailyAdSpend, 0.0));

        prop_assert_eq!(result.yearly_ad_spend, 0.0);
        for scenario in result.scenarios() {
            prop_assert_eq!(scenario.leads_generated, 0.0);
            prop_assert_eq!(scenario.deals_closed, 0.0);
            prop_assert_eq!(scenario.gross_commission_income, 0.0);
            prop_assert_eq!(scenario.net_roi, -scenario.total_cost);
        }
    }

    /// Property: the checked comparison either agrees with `compare` or
    /// reports why it refused
    #[test]
    fn prop_checked_agrees_with_permissive(inputs in realistic_inputs()) {
        let permissive = compare(&inputs);
        match compare_checked(&inputs) {
            Ok(checked) => prop_assert_eq!(checked, permissive),
            Err(err) => prop_assert!(
                matches!(err, RoiError::DivisionByZero { .. }),
                "unexpected error: {err}"
            ),
        }
    }

    /// Property: a zero divisor makes the checked comparison fail while the
    /// permissive one still returns without panicking
    #[test]
    fn prop_zero_divisor_is_reported(
        inputs in realistic_inputs(),
        field in prop_oneof![Just(InputField::CostPerLead), Just(InputField::LeadsPerDeal)]
    ) {
        let zeroed = inputs.with(field, 0.0);
        let is_division_by_zero =
            matches!(compare_checked(&zeroed), Err(RoiError::DivisionByZero { .. }));
        prop_assert!(is_division_by_zero);
        let _ = compare(&zeroed);
    }

    /// Property: rendered currency and plain numbers parse back to the value
    /// rounded to cents
    #[test]
    fn prop_formatted_numbers_parse_back(cents in -1_000_000_000i64..1_000_000_000i64) {
        let value = cents as f64 / 100.0;

        let from_currency = parse_input(InputField::DealValue, &format_currency(value, true)).unwrap();
        let from_number = parse_input(InputField::LeadsPerDeal, &format_number(value)).unwrap();

        prop_assert!((from_currency - value).abs() < 1e-6);
        prop_assert!((from_number - value).abs() < 1e-6);
    }
}
