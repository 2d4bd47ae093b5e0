//! Metrics command implementation.

use crate::display::{self, Format};
use adforecast_lib::prelude::*;
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Project campaign performance for a budget and duration.
pub(crate) fn metrics(
    budget: Option<&str>,
    days: u32,
    format: Format,
    state_dir: Option<PathBuf>,
) -> Result<()> {
    let budget = display::resolve_budget(budget, state_dir)?;
    let duration = CampaignDays::new(days)?;
    let metrics = ForecastEstimator::global().generate_performance_metrics(budget, duration)?;
    info!(budget = budget.value(), days, "generated performance metrics");

    if let Some(format) = format.output_format() {
        return display::write_metrics(&metrics, None, format);
    }

    println!(
        "Performance at {}/day for {duration} days\n",
        display::format_budget(budget)
    );
    print!("{}", display::metrics_table(&metrics));

    Ok(())
}
