use crate::errors::{InvalidInputReason, RoiError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six named fields of an [`InputSet`], in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputField {
    RecurringFee,
    OneTimeFee,
    DailyAdSpend,
    CostPerLead,
    LeadsPerDeal,
    DealValue,
}

impl InputField {
    pub const ALL: [InputField; 6] = [
        Self::RecurringFee,
        Self::OneTimeFee,
        Self::DailyAdSpend,
        Self::CostPerLead,
        Self::LeadsPerDeal,
        Self::DealValue,
    ];

    /// Key used on the command line and in error messages.
    pub fn key(&self) -> &'static str {
        match self {
            Self::RecurringFee => "recurring-fee",
            Self::OneTimeFee => "one-time-fee",
            Self::DailyAdSpend => "daily-ad-spend",
            Self::CostPerLead => "cost-per-lead",
            Self::LeadsPerDeal => "leads-per-deal",
            Self::DealValue => "deal-value",
        }
    }

    /// Key used in JSON output.
    pub fn camel_key(&self) -> &'static str {
        match self {
            Self::RecurringFee => "recurringFee",
            Self::OneTimeFee => "oneTimeFee",
            Self::DailyAdSpend => "dailyAdSpend",
            Self::CostPerLead => "costPerLead",
            Self::LeadsPerDeal => "leadsPerDeal",
            Self::DealValue => "dealValue",
        }
    }

    /// Form label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::RecurringFee => "Monthly Retainer (Old Way - Lower Profits)",
            Self::OneTimeFee => "One-Time Setup Fee (New Way - Higher Profits)",
            Self::DailyAdSpend => "Daily Ad Budget",
            Self::CostPerLead => "Average Cost per Lead",
            Self::LeadsPerDeal => "Leads Needed to Win a Listing",
            Self::DealValue => "GCI per Listing ($)",
        }
    }

    /// Whether the field is a dollar amount (as opposed to a count).
    pub fn is_currency(&self) -> bool {
        !matches!(self, Self::LeadsPerDeal)
    }

    /// Resolve a field from its kebab-case, snake_case or camelCase key.
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized: String = key
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL
            .into_iter()
            .find(|field| field.camel_key().to_lowercase() == normalized)
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.camel_key())
    }
}

/// Caller-supplied inputs for one calculation.
///
/// `Default` yields the figures the calculator form starts with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputSet {
    pub recurring_fee: f64,
    pub one_time_fee: f64,
    pub daily_ad_spend: f64,
    pub cost_per_lead: f64,
    pub leads_per_deal: f64,
    pub deal_value: f64,
}

impl Default for InputSet {
    fn default() -> Self {
        Self {
            recurring_fee: 2000.0,
            one_time_fee: 1000.0,
            daily_ad_spend: 25.0,
            cost_per_lead: 20.0,
            leads_per_deal: 80.0,
            deal_value: 15000.0,
        }
    }
}

impl InputSet {
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::RecurringFee => self.recurring_fee,
            InputField::OneTimeFee => self.one_time_fee,
            InputField::DailyAdSpend => self.daily_ad_spend,
            InputField::CostPerLead => self.cost_per_lead,
            InputField::LeadsPerDeal => self.leads_per_deal,
            InputField::DealValue => self.deal_value,
        }
    }

    /// Return a copy with one field replaced.
    #[must_use]
    pub fn with(mut self, field: InputField, value: f64) -> Self {
        let slot = match field {
            InputField::RecurringFee => &mut self.recurring_fee,
            InputField::OneTimeFee => &mut self.one_time_fee,
            InputField::DailyAdSpend => &mut self.daily_ad_spend,
            InputField::CostPerLead => &mut self.cost_per_lead,
            InputField::LeadsPerDeal => &mut self.leads_per_deal,
            InputField::DealValue => &mut self.deal_value,
        };
        *slot = value;
        self
    }

    /// Iterate fields with their values in form order.
    pub fn iter(&self) -> impl Iterator<Item = (InputField, f64)> + '_ {
        InputField::ALL.into_iter().map(|field| (field, self.get(field)))
    }

    /// First field holding NaN or an infinity, if any.
    pub fn first_non_finite(&self) -> Option<InputField> {
        self.iter()
            .find(|(_, value)| !value.is_finite())
            .map(|(field, _)| field)
    }

    /// Build an input set from textual `(key, value)` pairs, starting from
    /// the defaults. Later pairs win over earlier ones.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, RoiError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .try_fold(Self::default(), |inputs, (key, text)| {
                let field =
                    InputField::from_key(key).ok_or_else(|| RoiError::UnknownField(key.into()))?;
                Ok(inputs.with(field, parse_input(field, text)?))
            })
    }
}

/// Parse user-entered text for `field` into a finite number.
///
/// Accepts surrounding whitespace, a leading `$` (after an optional sign)
/// and `,` digit grouping, so figures copied from rendered output parse
/// back. Negative values are accepted.
pub fn parse_input(field: InputField, text: &str) -> Result<f64, RoiError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RoiError::invalid_input(field, InvalidInputReason::Empty));
    }

    let (sign, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let unsigned = rest.strip_prefix('$').unwrap_or(rest);

    if !is_well_grouped(unsigned) {
        return Err(RoiError::invalid_input(
            field,
            InvalidInputReason::NotANumber(trimmed.to_string()),
        ));
    }
    let cleaned = format!("{sign}{}", unsigned.replace(',', ""));

    let value = cleaned.parse::<f64>().map_err(|_| {
        RoiError::invalid_input(field, InvalidInputReason::NotANumber(trimmed.to_string()))
    })?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(RoiError::invalid_input(field, InvalidInputReason::NotFinite))
    }
}

/// Commas may only appear as thousands separators in the integer part.
fn is_well_grouped(text: &str) -> bool {
    if !text.contains(',') {
        return true;
    }
    let integer = text.split('.').next().unwrap_or_default();
    if text[integer.len()..].contains(',') {
        return false;
    }
    let mut groups = integer.split(',');
    let head_ok = groups
        .next()
        .is_some_and(|head| (1..=3).contains(&head.len()));
    head_ok && groups.all(|group| group.len() == 3 && group.chars().all(|c| c.is_ascii_digit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_form() {
        let inputs = InputSet::default();
        assert_eq!(inputs.recurring_fee, 2000.0);
        assert_eq!(inputs.one_time_fee, 1000.0);
        assert_eq!(inputs.daily_ad_spend, 25.0);
        assert_eq!(inputs.cost_per_lead, 20.0);
        assert_eq!(inputs.leads_per_deal, 80.0);
        assert_eq!(inputs.deal_value, 15000.0);
    }

    #[test]
    fn test_from_key_accepts_all_spellings() {
        assert_eq!(
            InputField::from_key("daily-ad-spend"),
            Some(InputField::DailyAdSpend)
        );
        assert_eq!(
            InputField::from_key("daily_ad_spend"),
            Some(InputField::DailyAdSpend)
        );
        assert_eq!(
            InputField::from_key("dailyAdSpend"),
            Some(InputField::DailyAdSpend)
        );
        assert_eq!(InputField::from_key("ad_spend"), None);
    }

    #[test]
    fn test_with_replaces_single_field() {
        let inputs = InputSet::default().with(InputField::DealValue, 30000.0);
        assert_eq!(inputs.deal_value, 30000.0);
        assert_eq!(inputs.recurring_fee, 2000.0);
    }

    #[test]
    fn test_parse_plain_and_decorated_numbers() {
        let field = InputField::RecurringFee;
        assert_eq!(parse_input(field, "2000").unwrap(), 2000.0);
        assert_eq!(parse_input(field, "  2000.5 ").unwrap(), 2000.5);
        assert_eq!(parse_input(field, "$2,000.00").unwrap(), 2000.0);
        assert_eq!(parse_input(field, "-$1,234.50").unwrap(), -1234.5);
        assert_eq!(parse_input(field, "1,234,567.89").unwrap(), 1234567.89);
        assert_eq!(parse_input(field, "-25").unwrap(), -25.0);
    }

    #[test]
    fn test_parse_rejects_empty() {
        let err = parse_input(InputField::CostPerLead, "   ").unwrap_err();
        assert!(matches!(
            err,
            RoiError::InvalidInput {
                field: InputField::CostPerLead,
                reason: InvalidInputReason::Empty
            }
        ));
    }

    #[test]
    fn test_parse_rejects_garbage_and_bad_grouping() {
        for text in ["abc", "12abc", "1,00", "12,345,6", "1.000,5", "$", "--5"] {
            let err = parse_input(InputField::DealValue, text).unwrap_err();
            assert!(
                matches!(
                    err,
                    RoiError::InvalidInput {
                        reason: InvalidInputReason::NotANumber(_),
                        ..
                    }
                ),
                "expected NotANumber for {text:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        for text in ["NaN", "inf", "-infinity", "1e400"] {
            let err = parse_input(InputField::DealValue, text).unwrap_err();
            assert!(matches!(
                err,
                RoiError::InvalidInput {
                    reason: InvalidInputReason::NotFinite,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_from_pairs_overrides_defaults() {
        let inputs =
            InputSet::from_pairs([("cost-per-lead", "10"), ("dealValue", "$20,000")]).unwrap();
        assert_eq!(inputs.cost_per_lead, 10.0);
        assert_eq!(inputs.deal_value, 20000.0);
        assert_eq!(inputs.leads_per_deal, 80.0);
    }

    #[test]
    fn test_from_pairs_unknown_key() {
        let err = InputSet::from_pairs([("budget", "10")]).unwrap_err();
        assert!(matches!(err, RoiError::UnknownField(key) if key == "budget"));
    }

    #[test]
    fn test_first_non_finite() {
        assert_eq!(InputSet::default().first_non_finite(), None);
        let inputs = InputSet::default().with(InputField::LeadsPerDeal, f64::NAN);
        assert_eq!(inputs.first_non_finite(), Some(InputField::LeadsPerDeal));
    }
}
