use super::InputSet;
use serde::{Serialize, Serializer};
use std::fmt;

/// Which cost structure a scenario models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScenarioKind {
    /// Monthly recurring fee ("Old Way").
    A,
    /// One-time setup fee ("New Way").
    B,
}

impl ScenarioKind {
    pub fn title(&self) -> &'static str {
        match self {
            Self::A => "Option A",
            Self::B => "Option B",
        }
    }

    pub fn tagline(&self) -> &'static str {
        match self {
            Self::A => "Old Way",
            Self::B => "New Way",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Outcome of one scenario. Values may be fractional, negative or (with
/// zero divisors) non-finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub scenario: ScenarioKind,
    #[serde(serialize_with = "finite_or_null")]
    pub total_cost: f64,
    #[serde(serialize_with = "finite_or_null")]
    pub leads_generated: f64,
    #[serde(serialize_with = "finite_or_null")]
    pub cost_per_lead: f64,
    #[serde(serialize_with = "finite_or_null")]
    pub deals_closed: f64,
    #[serde(serialize_with = "finite_or_null")]
    pub gross_commission_income: f64,
    #[serde(rename = "netROI", serialize_with = "finite_or_null")]
    pub net_roi: f64,
}

impl ScenarioResult {
    /// Net return per dollar spent.
    pub fn return_on_cost(&self) -> f64 {
        self.net_roi / self.total_cost
    }

    pub fn is_finite(&self) -> bool {
        [
            self.total_cost,
            self.leads_generated,
            self.cost_per_lead,
            self.deals_closed,
            self.gross_commission_income,
            self.net_roi,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Side-by-side comparison of both scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub inputs: InputSet,
    #[serde(serialize_with = "finite_or_null")]
    pub yearly_ad_spend: f64,
    pub scenario_a: ScenarioResult,
    pub scenario_b: ScenarioResult,
    #[serde(serialize_with = "finite_or_null")]
    pub roi_boost_percent: f64,
}

impl ComparisonResult {
    pub fn scenarios(&self) -> [&ScenarioResult; 2] {
        [&self.scenario_a, &self.scenario_b]
    }

    /// True when every derived number is finite.
    pub fn is_finite(&self) -> bool {
        self.first_non_finite().is_none()
    }

    /// Wire name of the first derived number that is infinite or NaN.
    pub fn first_non_finite(&self) -> Option<&'static str> {
        let [a, b] = self.scenarios();
        [
            ("yearlyAdSpend", self.yearly_ad_spend),
            ("scenarioA.totalCost", a.total_cost),
            ("scenarioA.leadsGenerated", a.leads_generated),
            ("scenarioA.dealsClosed", a.deals_closed),
            ("scenarioA.grossCommissionIncome", a.gross_commission_income),
            ("scenarioA.netROI", a.net_roi),
            ("scenarioB.totalCost", b.total_cost),
            ("scenarioB.leadsGenerated", b.leads_generated),
            ("scenarioB.dealsClosed", b.deals_closed),
            ("scenarioB.grossCommissionIncome", b.gross_commission_income),
            ("scenarioB.netROI", b.net_roi),
            ("roiBoostPercent", self.roi_boost_percent),
        ]
        .into_iter()
        .find(|(_, value)| !value.is_finite())
        .map(|(name, _)| name)
    }
}

/// JSON has no representation for NaN or infinities.
fn finite_or_null<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_none()
    }
}
