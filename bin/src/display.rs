//! Display utilities and shared argument handling for the adforecast CLI.

use adforecast_lib::prelude::*;
use adforecast_lib::{FormatError, Money};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Table,
    Csv,
    Tsv,
    Json,
    Ndjson,
}

impl Format {
    /// Returns the machine-readable format, or None for the table view.
    pub(crate) const fn output_format(self) -> Option<OutputFormat> {
        match self {
            Self::Table => None,
            Self::Csv => Some(OutputFormat::Csv),
            Self::Tsv => Some(OutputFormat::Tsv),
            Self::Json => Some(OutputFormat::Json),
            Self::Ndjson => Some(OutputFormat::Ndjson),
        }
    }
}

/// Opens the saved-campaign store.
pub(crate) fn open_store(state_dir: Option<PathBuf>) -> Result<FileStore> {
    let path = state_dir.unwrap_or_else(FileStore::default_path);
    debug!(path = %path.display(), "opening state store");
    FileStore::new(path).context("Failed to open campaign state")
}

/// Loads the saved campaign.
pub(crate) fn load_state(store: &FileStore) -> Result<CampaignState> {
    store.load().with_context(|| {
        format!(
            "Failed to load {} (run `adforecast state reset` to start over)",
            store.state_path().display()
        )
    })
}

/// Checks a budget against the baseline's minimum.
fn check_minimum(budget: Budget) -> Result<Budget> {
    let minimum = ForecastEstimator::global().profile().minimum_budget;
    Ok(budget.check_policy(minimum)?)
}

/// Parses a budget and checks it against the baseline's minimum.
pub(crate) fn parse_budget(input: &str) -> Result<Budget> {
    let budget: Budget = input
        .parse()
        .with_context(|| format!("Invalid budget: {input}"))?;
    check_minimum(budget)
}

/// Uses the budget given on the command line, or the saved campaign's budget.
pub(crate) fn resolve_budget(input: Option<&str>, state_dir: Option<PathBuf>) -> Result<Budget> {
    if let Some(input) = input {
        return parse_budget(input);
    }

    let state = load_state(&open_store(state_dir)?)?;
    debug!(budget = state.budget, "using saved campaign budget");
    Budget::new(state.budget)
        .map_err(anyhow::Error::from)
        .and_then(check_minimum)
        .context("Saved campaign has an invalid budget")
}

/// Parses a YYYY-MM-DD date.
pub(crate) fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").with_context(|| format!("Invalid date: {input}"))
}

/// Returns a writer for the output file, or stdout.
fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn write_with<F>(format: OutputFormat, output: Option<&Path>, write: F) -> Result<()>
where
    F: FnOnce(&dyn DynFormatter, &mut dyn Write) -> std::result::Result<(), FormatError>,
{
    let mut writer = open_output(output)?;
    match format {
        OutputFormat::Csv => write(&CsvFormatter::new(), &mut writer)?,
        OutputFormat::Tsv => write(&CsvFormatter::tsv(), &mut writer)?,
        OutputFormat::Json => write(&JsonFormatter::new().with_pretty(true), &mut writer)?,
        OutputFormat::Ndjson => write(&JsonFormatter::ndjson(), &mut writer)?,
    }
    writer.flush()?;
    Ok(())
}

/// Lets the output format be picked at runtime.
pub(crate) trait DynFormatter {
    fn series(&self, series: &TimeSeries, writer: &mut dyn Write) -> std::result::Result<(), FormatError>;
    fn metrics(
        &self,
        metrics: &PerformanceMetrics,
        writer: &mut dyn Write,
    ) -> std::result::Result<(), FormatError>;
}

impl<T: Formatter> DynFormatter for T {
    fn series(&self, series: &TimeSeries, writer: &mut dyn Write) -> std::result::Result<(), FormatError> {
        self.write_series(series, writer)
    }

    fn metrics(
        &self,
        metrics: &PerformanceMetrics,
        writer: &mut dyn Write,
    ) -> std::result::Result<(), FormatError> {
        self.write_metrics(metrics, writer)
    }
}

/// Writes a forecast series in a machine-readable format.
pub(crate) fn write_series(series: &TimeSeries, output: Option<&Path>, format: OutputFormat) -> Result<()> {
    write_with(format, output, |formatter, writer| formatter.series(series, writer))
}

/// Writes a metric bundle in a machine-readable format.
pub(crate) fn write_metrics(
    metrics: &PerformanceMetrics,
    output: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    write_with(format, output, |formatter, writer| formatter.metrics(metrics, writer))
}

/// Renders a forecast series as a table, with the scaling projection beside
/// the scaling window.
pub(crate) fn series_table(series: &TimeSeries, projected_scaling: &[u64]) -> String {
    let mut out = format!(
        "{:<8} {:<10} {:>10} {:>10} {:>10}\n{}\n",
        "DATE",
        "PHASE",
        "SERIES A",
        "SERIES B",
        "PROJECTED",
        "-".repeat(52)
    );

    let mut projections = projected_scaling.iter();
    for point in series.points() {
        let projected = match point.phase {
            Phase::Discovery => String::new(),
            Phase::Scaling => projections.next().map(u64::to_string).unwrap_or_default(),
        };
        out.push_str(&format!(
            "{:<8} {:<10} {:>10} {:>10} {:>10}\n",
            point.label, point.phase, point.series_a, point.series_b, projected
        ));
    }
    out
}

/// Renders a metric bundle as a table.
pub(crate) fn metrics_table(metrics: &PerformanceMetrics) -> String {
    let mut out = format!(
        "{:<22} {:>12} {:>12}\n{}\n",
        "METRIC",
        "MIN",
        "MAX",
        "-".repeat(48)
    );

    for (name, range) in metrics.ranges() {
        out.push_str(&format!(
            "{:<22} {:>12} {:>12}\n",
            name,
            ForecastEstimator::format_compact(range.min),
            ForecastEstimator::format_compact(range.max)
        ));
    }

    for (name, value) in [
        ("ctr", metrics.ctr.to_string()),
        ("cpc", metrics.cpc.to_string()),
        ("conversion rate", metrics.conversion_rate.to_string()),
        ("cost per conversion", metrics.cost_per_conversion.to_string()),
    ] {
        out.push_str(&format!("{name:<22} {value:>12}\n"));
    }
    out
}

/// Formats a daily budget for display.
pub(crate) fn format_budget(budget: Budget) -> String {
    let profile = ForecastEstimator::global().profile();
    Money::new(budget.value(), profile.currency).to_string()
}
