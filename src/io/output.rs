use crate::core::{ComparisonResult, InputField, ScenarioResult};
use crate::formatting::numbers::format_number_with;
use crate::formatting::{
    emoji_or_fallback, format_currency, format_percent, formatter_for, EmojiMode,
    FormattingConfig, OutputFormatter,
};
use crate::roi::BoostAssessment;
use comfy_table::{presets, CellAlignment, Table};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Markdown,
    Json,
}

/// Presentation options shared by all writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub formatting: FormattingConfig,
    pub show_cta: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            formatting: FormattingConfig::default(),
            show_cta: true,
        }
    }
}

pub trait OutputWriter {
    fn write_comparison(&mut self, result: &ComparisonResult) -> anyhow::Result<()>;
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    options: RenderOptions,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, options)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer, options)),
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
    }
}

/// One row of the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Metric {
    TotalCost,
    CostPerLead,
    DealsClosed,
    EstimatedGci,
    NetRoi,
}

impl Metric {
    const ALL: [Metric; 5] = [
        Self::TotalCost,
        Self::CostPerLead,
        Self::DealsClosed,
        Self::EstimatedGci,
        Self::NetRoi,
    ];

    fn emoji(&self) -> &'static str {
        match self {
            Self::TotalCost => "💰",
            Self::CostPerLead => "📊",
            Self::DealsClosed => "📋",
            Self::EstimatedGci => "🏆",
            Self::NetRoi => "📈",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::TotalCost => "Total Cost",
            Self::CostPerLead => "Cost per Lead",
            Self::DealsClosed => "Deals Closed",
            Self::EstimatedGci => "Estimated GCI",
            Self::NetRoi => "Net ROI",
        }
    }

    fn value(&self, scenario: &ScenarioResult) -> f64 {
        match self {
            Self::TotalCost => scenario.total_cost,
            Self::CostPerLead => scenario.cost_per_lead,
            Self::DealsClosed => scenario.deals_closed,
            Self::EstimatedGci => scenario.gross_commission_income,
            Self::NetRoi => scenario.net_roi,
        }
    }

    fn render(&self, scenario: &ScenarioResult, unicode: bool) -> String {
        let value = self.value(scenario);
        if *self == Self::DealsClosed {
            format_number_with(value, unicode)
        } else {
            format_currency(value, unicode)
        }
    }
}

fn render_input(field: InputField, value: f64, unicode: bool) -> String {
    if field.is_currency() {
        format_currency(value, unicode)
    } else {
        format_number_with(value, unicode)
    }
}

/// Headline sentence for the boost, e.g. "ROI Boost: 377.74% higher with the
/// New Way!".
pub fn boost_headline(assessment: &BoostAssessment, unicode: bool) -> String {
    match assessment {
        BoostAssessment::Higher(pct) => format!(
            "ROI Boost: {} higher with the New Way!",
            format_percent(*pct, unicode)
        ),
        BoostAssessment::Lower(pct) => format!(
            "ROI Boost: {} lower with the New Way",
            format_percent(*pct, unicode)
        ),
        BoostAssessment::Unchanged => {
            "ROI Boost: 0.00% (both ways return the same per dollar)".to_string()
        }
        BoostAssessment::Undefined(reason) => format!("ROI Boost: undefined ({reason})"),
    }
}

/// Promotional block shown under the results.
pub struct CallToAction {
    pub heading: &'static str,
    pub pitch: &'static str,
    pub button: &'static str,
    pub footnote: &'static str,
}

impl CallToAction {
    pub fn new(unicode: bool) -> Self {
        Self {
            heading: "Used by top agents at Century 21, Ray White, and Stone Real Estate",
            pitch: if unicode {
                "You're looking at the system responsible for $52k GCI from $455 ad spend \u{2014} and it's yours for a one-time fee."
            } else {
                "You're looking at the system responsible for $52k GCI from $455 ad spend - and it's yours for a one-time fee."
            },
            button: if unicode {
                "Get My Setup \u{2192}"
            } else {
                "Get My Setup ->"
            },
            footnote: "One-time cost. Yours to keep. No monthly BS.",
        }
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatter: Box<dyn OutputFormatter>,
    show_cta: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, options: RenderOptions) -> Self {
        Self {
            writer,
            formatter: formatter_for(options.formatting),
            show_cta: options.show_cta,
        }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(if self.formatter.unicode() {
            presets::UTF8_FULL
        } else {
            presets::ASCII_FULL
        });
        table
    }

    fn write_inputs(&mut self, result: &ComparisonResult) -> anyhow::Result<()> {
        let unicode = self.formatter.unicode();
        let mut table = self.table();
        table.set_header(vec!["Input", "Value"]);
        for (field, value) in result.inputs.iter() {
            table.add_row(vec![
                field.label().to_string(),
                render_input(field, value, unicode),
            ]);
        }
        align_right(&mut table, 1);

        writeln!(self.writer, "{}", self.formatter.bold("Inputs"))?;
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scenarios(&mut self, result: &ComparisonResult) -> anyhow::Result<()> {
        let unicode = self.formatter.unicode();
        let mut table = self.table();
        table.set_header(vec![
            String::new(),
            format!("{} ({})", result.scenario_a.scenario, result.scenario_a.scenario.tagline()),
            format!("{} ({})", result.scenario_b.scenario, result.scenario_b.scenario.tagline()),
        ]);
        for metric in Metric::ALL {
            table.add_row(vec![
                format!(
                    "{} {}",
                    self.formatter
                        .emoji(metric.emoji(), emoji_or_fallback(metric.emoji()).1),
                    metric.label()
                ),
                metric.render(&result.scenario_a, unicode),
                metric.render(&result.scenario_b, unicode),
            ]);
        }
        align_right(&mut table, 1);
        align_right(&mut table, 2);

        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_boost(&mut self, result: &ComparisonResult) -> anyhow::Result<()> {
        let assessment = BoostAssessment::assess(result);
        let headline = boost_headline(&assessment, self.formatter.unicode());
        let marker = self.formatter.emoji("🚨", "[!]");
        let line = if assessment.is_defined() {
            self.formatter.new_way(&headline)
        } else {
            self.formatter.warning(&headline)
        };
        writeln!(self.writer, "{marker} {line}")?;
        Ok(())
    }

    fn write_cta(&mut self) -> anyhow::Result<()> {
        let cta = CallToAction::new(self.formatter.unicode());
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.emoji("✅", "[OK]"),
            self.formatter.bold(cta.heading)
        )?;
        writeln!(self.writer, "{}", cta.pitch)?;
        writeln!(
            self.writer,
            "{} {}",
            self.formatter.emoji("🔒", ">>"),
            self.formatter.new_way(cta.button)
        )?;
        writeln!(self.writer, "{}", self.formatter.dim(cta.footnote))?;
        Ok(())
    }
}

fn align_right(table: &mut Table, column: usize) {
    if let Some(column) = table.column_mut(column) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_comparison(&mut self, result: &ComparisonResult) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{}",
            self.formatter.heading("Lead Gen ROI Calculator")
        )?;
        writeln!(self.writer)?;
        self.write_inputs(result)?;
        self.write_scenarios(result)?;
        self.write_boost(result)?;
        if self.show_cta {
            self.write_cta()?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
    unicode: bool,
    show_cta: bool,
}

impl<W: Write> MarkdownWriter<W> {
    /// Markdown is usually written to a file, so only `--emoji never` (or
    /// `--plain`) restricts it to ASCII; terminal detection does not apply.
    pub fn new(writer: W, options: RenderOptions) -> Self {
        Self {
            writer,
            unicode: options.formatting.emoji != EmojiMode::Never,
            show_cta: options.show_cta,
        }
    }

    fn write_inputs(&mut self, result: &ComparisonResult) -> anyhow::Result<()> {
        writeln!(self.writer, "## Inputs")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Input | Value |")?;
        writeln!(self.writer, "|-------|------:|")?;
        for (field, value) in result.inputs.iter() {
            writeln!(
                self.writer,
                "| {} | {} |",
                field.label(),
                render_input(field, value, self.unicode)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_scenarios(&mut self, result: &ComparisonResult) -> anyhow::Result<()> {
        writeln!(self.writer, "## Comparison")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Metric | Option A (Old Way) | Option B (New Way) |"
        )?;
        writeln!(self.writer, "|--------|-------------------:|-------------------:|")?;
        for metric in Metric::ALL {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                metric.label(),
                metric.render(&result.scenario_a, self.unicode),
                metric.render(&result.scenario_b, self.unicode)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_comparison(&mut self, result: &ComparisonResult) -> anyhow::Result<()> {
        writeln!(self.writer, "# Lead Gen ROI Calculator")?;
        writeln!(self.writer)?;
        self.write_inputs(result)?;
        self.write_scenarios(result)?;

        let headline = boost_headline(&BoostAssessment::assess(result), self.unicode);
        writeln!(self.writer, "**{headline}**")?;

        if self.show_cta {
            let cta = CallToAction::new(self.unicode);
            writeln!(self.writer)?;
            writeln!(self.writer, "### {}", cta.heading)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", cta.pitch)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "**{}**", cta.button)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "_{}_", cta.footnote)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    #[serde(flatten)]
    result: &'a ComparisonResult,
    boost: BoostAssessment,
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_comparison(&mut self, result: &ComparisonResult) -> anyhow::Result<()> {
        let report = JsonReport {
            result,
            boost: BoostAssessment::assess(result),
        };
        let json = serde_json::to_string_pretty(&report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
