use crate::core::InputField;
use crate::formatting::{ColorMode, EmojiMode, FormattingConfig};
use crate::io::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "leadgen-roi")]
#[command(
    about = "Compare a recurring-fee lead program against a one-time-fee program",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", value_parser = parse_color_mode, global = true)]
    pub color: Option<ColorMode>,

    /// When to print emoji: auto, always, never
    #[arg(long, value_name = "WHEN", value_parser = parse_emoji_mode, global = true)]
    pub emoji: Option<EmojiMode>,
}

impl Cli {
    /// Terminal styling: explicit flags win over `NO_COLOR`/`CLICOLOR*`.
    pub fn formatting(&self) -> FormattingConfig {
        let env = FormattingConfig::from_env();
        FormattingConfig::new(
            self.color.unwrap_or(env.color),
            self.emoji.unwrap_or(env.emoji),
        )
    }
}

fn parse_color_mode(s: &str) -> Result<ColorMode, String> {
    ColorMode::parse(s).ok_or_else(|| format!("expected auto, always or never, got '{s}'"))
}

fn parse_emoji_mode(s: &str) -> Result<EmojiMode, String> {
    EmojiMode::parse(s).ok_or_else(|| format!("expected auto, always or never, got '{s}'"))
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute both scenarios and the ROI boost
    Compare(CompareArgs),

    /// Initialize a .leadgen-roi.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },

    /// List the input fields with their labels and defaults
    Fields,
}

/// Field values are kept as text and parsed by `parse_input`, so `$2,000`
/// is accepted.
#[derive(Args, Debug, Clone, Default)]
pub struct CompareArgs {
    /// Option A monthly recurring fee
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub recurring_fee: Option<String>,

    /// Option B one-time fee
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub one_time_fee: Option<String>,

    /// Daily ad spend
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub daily_ad_spend: Option<String>,

    /// Cost per lead
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub cost_per_lead: Option<String>,

    /// Leads needed to close one deal
    #[arg(long, value_name = "COUNT", allow_hyphen_values = true)]
    pub leads_per_deal: Option<String>,

    /// Commission earned per closed deal
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub deal_value: Option<String>,

    /// Output format (falls back to the config file, then terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file to use instead of searching for .leadgen-roi.toml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report infinities and NaN instead of failing on zero divisors
    #[arg(long)]
    pub permissive: bool,

    /// Use plain output format (ASCII only, no colors, no emoji)
    #[arg(long)]
    pub plain: bool,

    /// Omit the call-to-action block
    #[arg(long = "no-cta")]
    pub no_cta: bool,
}

impl CompareArgs {
    /// Raw text given for each field on the command line.
    pub fn field_values(&self) -> impl Iterator<Item = (InputField, &str)> + '_ {
        InputField::ALL
            .into_iter()
            .filter_map(move |field| self.field_value(field).map(|text| (field, text)))
    }

    fn field_value(&self, field: InputField) -> Option<&str> {
        let value = match field {
            InputField::RecurringFee => &self.recurring_fee,
            InputField::OneTimeFee => &self.one_time_fee,
            InputField::DailyAdSpend => &self.daily_ad_spend,
            InputField::CostPerLead => &self.cost_per_lead,
            InputField::LeadsPerDeal => &self.leads_per_deal,
            InputField::DealValue => &self.deal_value,
        };
        value.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_compare_parses_field_flags() {
        let cli = Cli::try_parse_from([
            "leadgen-roi",
            "compare",
            "--recurring-fee",
            "$2,500",
            "--leads-per-deal",
            "40",
            "-f",
            "json",
            "-vv",
        ])
        .unwrap();

        let Commands::Compare(args) = &cli.command else {
            panic!("expected compare");
        };
        let values: Vec<_> = args.field_values().collect();
        assert_eq!(
            values,
            vec![
                (InputField::RecurringFee, "$2,500"),
                (InputField::LeadsPerDeal, "40"),
            ]
        );
        assert_eq!(args.format, Some(OutputFormat::Json));
        assert_eq!(cli.verbosity, 2);
    }

    #[test]
    fn test_negative_values_are_accepted() {
        let cli =
            Cli::try_parse_from(["leadgen-roi", "compare", "--daily-ad-spend", "-5"]).unwrap();
        let Commands::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.daily_ad_spend.as_deref(), Some("-5"));
    }

    #[test]
    fn test_init_force_flag() {
        let cli = Cli::try_parse_from(["leadgen-roi", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Commands::Init { force: true }));
        assert_eq!(cli.verbosity, 0);
    }

    #[test]
    fn test_verbosity_is_accepted_by_every_subcommand() {
        let init = Cli::try_parse_from(["leadgen-roi", "init", "-vv"]).unwrap();
        assert_eq!(init.verbosity, 2);

        let fields = Cli::try_parse_from(["leadgen-roi", "fields", "-v"]).unwrap();
        assert_eq!(fields.verbosity, 1);

        let leading = Cli::try_parse_from(["leadgen-roi", "-vvv", "compare"]).unwrap();
        assert_eq!(leading.verbosity, 3);
    }

    #[test]
    fn test_color_and_emoji_flags_override_environment() {
        let cli = Cli::try_parse_from([
            "leadgen-roi",
            "fields",
            "--color",
            "ALWAYS",
            "--emoji",
            "never",
        ])
        .unwrap();

        assert_eq!(
            cli.formatting(),
            FormattingConfig::new(ColorMode::Always, EmojiMode::Never)
        );
    }

    #[test]
    fn test_invalid_color_mode_is_rejected() {
        let err = Cli::try_parse_from(["leadgen-roi", "compare", "--color", "rainbow"]).unwrap_err();
        assert!(err.to_string().contains("expected auto, always or never"));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["leadgen-roi", "compare", "-f", "pdf"]).is_err());
    }
}
