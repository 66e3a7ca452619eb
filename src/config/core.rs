use serde::{Deserialize, Serialize};

use crate::core::{InputField, InputSet};
use crate::errors::RoiError;
use crate::io::output::OutputFormat;
use crate::roi::CalculationMode;

/// Root configuration structure read from `.leadgen-roi.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RoiConfig {
    /// Default values for the calculator inputs
    #[serde(default)]
    pub inputs: Option<InputOverrides>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,

    /// Calculation behavior
    #[serde(default)]
    pub calculation: Option<CalculationConfig>,
}

/// Any subset of the six inputs; unset fields fall through to the
/// built-in defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InputOverrides {
    pub recurring_fee: Option<f64>,
    pub one_time_fee: Option<f64>,
    pub daily_ad_spend: Option<f64>,
    pub cost_per_lead: Option<f64>,
    pub leads_per_deal: Option<f64>,
    pub deal_value: Option<f64>,
}

impl InputOverrides {
    pub fn get(&self, field: InputField) -> Option<f64> {
        match field {
            InputField::RecurringFee => self.recurring_fee,
            InputField::OneTimeFee => self.one_time_fee,
            InputField::DailyAdSpend => self.daily_ad_spend,
            InputField::CostPerLead => self.cost_per_lead,
            InputField::LeadsPerDeal => self.leads_per_deal,
            InputField::DealValue => self.deal_value,
        }
    }

    /// Layer the configured values over `base`.
    pub fn apply(&self, base: InputSet) -> InputSet {
        InputField::ALL.into_iter().fold(base, |inputs, field| {
            self.get(field)
                .map_or(inputs, |value| inputs.with(field, value))
        })
    }

    pub fn validate(&self) -> Result<(), RoiError> {
        InputField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
            .find(|(_, value)| !value.is_finite())
            .map_or(Ok(()), |(field, _)| {
                Err(RoiError::config_with_field(
                    "value must be a finite number",
                    format!("inputs.{}", field.key().replace('-', "_")),
                ))
            })
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format (terminal, markdown, json)
    pub format: Option<OutputFormat>,

    /// Show the call-to-action block after the results
    pub show_cta: Option<bool>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CalculationConfig {
    /// Report non-finite results instead of failing on zero divisors
    #[serde(default)]
    pub permissive: bool,
}

impl RoiConfig {
    /// Configured inputs layered over the built-in defaults.
    pub fn base_inputs(&self) -> InputSet {
        self.inputs
            .map_or_else(InputSet::default, |overrides| {
                overrides.apply(InputSet::default())
            })
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.and_then(|output| output.format)
    }

    pub fn show_cta(&self) -> bool {
        self.output
            .and_then(|output| output.show_cta)
            .unwrap_or(true)
    }

    pub fn calculation_mode(&self) -> CalculationMode {
        match self.calculation {
            Some(CalculationConfig { permissive: true }) => CalculationMode::Permissive,
            _ => CalculationMode::Strict,
        }
    }

    pub fn validate(&self) -> Result<(), RoiError> {
        self.inputs
            .as_ref()
            .map_or(Ok(()), InputOverrides::validate)
    }
}

/// Commented template written by `leadgen-roi init`.
pub fn default_config_template() -> String {
    let defaults = InputSet::default();
    let inputs: String = defaults
        .iter()
        .map(|(field, value)| {
            format!(
                "{} = {}  # {}\n",
                field.key().replace('-', "_"),
                value,
                field.label()
            )
        })
        .collect();

    format!(
        r#"# Lead Gen ROI Calculator configuration

[inputs]
{inputs}
[output]
format = "terminal"  # terminal | markdown | json
show_cta = true

[calculation]
# Report infinite/NaN results instead of failing on zero divisors
permissive = false
"#
    )
}
