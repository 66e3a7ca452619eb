use crate::cli::CompareArgs;
use crate::config::{load_config, load_config_from_path, LoadedConfig};
use crate::core::{parse_input, ComparisonResult, InputSet};
use crate::formatting::FormattingConfig;
use crate::io::{self, create_writer, OutputFormat, RenderOptions};
use crate::roi::{compare_with_mode, BoostAssessment, CalculationMode};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Everything `compare` needs once flags and config are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareSettings {
    pub inputs: InputSet,
    pub mode: CalculationMode,
    pub format: OutputFormat,
    pub render: RenderOptions,
    pub output: Option<PathBuf>,
}

pub fn handle_compare(args: &CompareArgs, formatting: FormattingConfig) -> Result<()> {
    let loaded = match &args.config {
        Some(path) => load_config_from_path(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => load_config(),
    };
    match &loaded.source {
        Some(path) => debug!(source = %path.display(), "using configuration file"),
        None => debug!("no configuration file found, using defaults"),
    }

    let settings = resolve_settings(args, &loaded, formatting)?;
    let result = run_comparison(&settings)?;

    let writer = io::open_output(settings.output.as_deref())?;
    write_report(&result, settings.format, settings.render, writer)?;

    if let Some(path) = &settings.output {
        info!(path = %path.display(), "report written");
    }
    Ok(())
}

/// Merge command-line flags over the loaded config. Field flags beat
/// `[inputs]`, which beats the built-in defaults.
pub fn resolve_settings(
    args: &CompareArgs,
    loaded: &LoadedConfig,
    formatting: FormattingConfig,
) -> Result<CompareSettings> {
    let config = &loaded.config;

    let inputs = args
        .field_values()
        .try_fold(config.base_inputs(), |inputs, (field, text)| {
            let value = parse_input(field, text)
                .with_context(|| format!("Invalid --{} argument", field.key()))?;
            anyhow::Ok(inputs.with(field, value))
        })?;

    let mode = if args.permissive {
        CalculationMode::Permissive
    } else {
        config.calculation_mode()
    };

    let formatting = if args.plain {
        FormattingConfig::plain()
    } else {
        formatting
    };

    Ok(CompareSettings {
        inputs,
        mode,
        format: args
            .format
            .or_else(|| config.output_format())
            .unwrap_or_default(),
        render: RenderOptions {
            formatting,
            show_cta: !args.no_cta && config.show_cta(),
        },
        output: args.output.clone(),
    })
}

pub fn run_comparison(settings: &CompareSettings) -> Result<ComparisonResult> {
    debug!(inputs = ?settings.inputs, mode = ?settings.mode, "resolved inputs");

    let result = compare_with_mode(&settings.inputs, settings.mode)
        .context("Cannot compare the two scenarios")?;

    match BoostAssessment::assess(&result) {
        BoostAssessment::Undefined(reason) => {
            warn!(boost = result.roi_boost_percent, %reason, "ROI boost is undefined");
        }
        _ => info!(boost = result.roi_boost_percent, "computed ROI boost"),
    }
    if !result.is_finite() {
        warn!("some results are not finite numbers");
    }

    Ok(result)
}

pub fn write_report<'a>(
    result: &ComparisonResult,
    format: OutputFormat,
    options: RenderOptions,
    writer: Box<dyn Write + 'a>,
) -> Result<()> {
    let mut output = create_writer(format, writer, options);
    output
        .write_comparison(result)
        .context("Failed to write report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_and_validate_config;
    use crate::core::InputField;
    use pretty_assertions::assert_eq;

    fn loaded(toml: &str) -> LoadedConfig {
        LoadedConfig {
            config: parse_and_validate_config(toml).unwrap(),
            source: None,
        }
    }

    #[test]
    fn test_defaults_without_flags_or_config() {
        let settings = resolve_settings(
            &CompareArgs::default(),
            &LoadedConfig::default(),
            FormattingConfig::plain(),
        )
        .unwrap();

        assert_eq!(settings.inputs, InputSet::default());
        assert_eq!(settings.mode, CalculationMode::Strict);
        assert_eq!(settings.format, OutputFormat::Terminal);
        assert!(settings.render.show_cta);
        assert_eq!(settings.output, None);
    }

    #[test]
    fn test_flags_override_config() {
        let config = loaded(
            "[inputs]\ndeal_value = 9000\ncost_per_lead = 10\n[output]\nformat = \"markdown\"\n",
        );
        let args = CompareArgs {
            deal_value: Some("$12,000".into()),
            format: Some(OutputFormat::Json),
            ..CompareArgs::default()
        };

        let settings = resolve_settings(&args, &config, FormattingConfig::plain()).unwrap();

        assert_eq!(settings.inputs.deal_value, 12000.0);
        assert_eq!(settings.inputs.cost_per_lead, 10.0);
        assert_eq!(settings.inputs.recurring_fee, 2000.0);
        assert_eq!(settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_config_format_and_mode_apply_without_flags() {
        let config = loaded("[output]\nformat = \"markdown\"\nshow_cta = false\n[calculation]\npermissive = true\n");
        let settings =
            resolve_settings(&CompareArgs::default(), &config, FormattingConfig::plain()).unwrap();

        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.mode, CalculationMode::Permissive);
        assert!(!settings.render.show_cta);
    }

    #[test]
    fn test_plain_and_no_cta_flags() {
        let args = CompareArgs {
            plain: true,
            no_cta: true,
            permissive: true,
            ..CompareArgs::default()
        };
        let settings =
            resolve_settings(&args, &LoadedConfig::default(), FormattingConfig::default())
                .unwrap();

        assert_eq!(settings.render.formatting, FormattingConfig::plain());
        assert!(!settings.render.show_cta);
        assert_eq!(settings.mode, CalculationMode::Permissive);
    }

    #[test]
    fn test_bad_flag_value_names_the_flag() {
        let args = CompareArgs {
            leads_per_deal: Some("eighty".into()),
            ..CompareArgs::default()
        };
        let err = resolve_settings(&args, &LoadedConfig::default(), FormattingConfig::plain())
            .unwrap_err();
        assert!(format!("{err:#}").contains("--leads-per-deal"));
    }

    #[test]
    fn test_strict_mode_rejects_zero_cost_per_lead() {
        let settings = CompareSettings {
            inputs: InputSet::default().with(InputField::CostPerLead, 0.0),
            mode: CalculationMode::Strict,
            format: OutputFormat::Json,
            render: RenderOptions::default(),
            output: None,
        };
        assert!(run_comparison(&settings).is_err());

        let permissive = CompareSettings {
            mode: CalculationMode::Permissive,
            ..settings
        };
        let result = run_comparison(&permissive).unwrap();
        assert!(result.scenario_a.leads_generated.is_infinite());
    }

    #[test]
    fn test_write_report_json() {
        let result = crate::roi::compare(&InputSet::default());
        let mut buffer = Vec::new();
        write_report(
            &result,
            OutputFormat::Json,
            RenderOptions::default(),
            Box::new(&mut buffer),
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["yearlyAdSpend"], 9000.0);
        assert_eq!(value["scenarioB"]["netROI"], 74375.0);
    }
}
