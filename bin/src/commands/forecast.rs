//! Forecast command implementation.

use crate::display::{self, Format};
use adforecast_lib::prelude::*;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Show the daily forecast scaled to a budget.
pub(crate) fn forecast(
    budget: Option<&str>,
    format: Format,
    output: Option<&Path>,
    state_dir: Option<PathBuf>,
) -> Result<()> {
    let budget = display::resolve_budget(budget, state_dir)?;
    let estimator = ForecastEstimator::global();
    let series = estimator.scaled_forecast(budget);
    info!(budget = budget.value(), days = series.len(), "scaled forecast");

    if let Some(format) = format.output_format() {
        return display::write_series(&series, output, format);
    }

    let (_, scaling) = series.phases();
    let projected = ForecastEstimator::project_scaling(&scaling);
    let table = format!(
        "Daily forecast at {}/day ({})\n\n{}",
        display::format_budget(budget),
        BudgetTier::classify(budget),
        display::series_table(&series, &projected)
    );

    match output {
        Some(path) => {
            std::fs::write(path, table)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Forecast written to {}", path.display());
        }
        None => print!("{table}"),
    }

    Ok(())
}
