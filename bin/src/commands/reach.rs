//! Reach command implementation.

use crate::display;
use adforecast_lib::prelude::*;
use anyhow::Result;
use std::path::PathBuf;

/// Estimate daily reach for a budget.
pub(crate) fn reach(budget: Option<&str>, state_dir: Option<PathBuf>) -> Result<()> {
    let budget = display::resolve_budget(budget, state_dir)?;
    let reach = ForecastEstimator::global().estimate_reach(budget);

    println!("Budget:      {}/day", display::format_budget(budget));
    println!("Tier:        {}", BudgetTier::classify(budget));
    println!(
        "Daily reach: {} - {} ({reach})",
        ForecastEstimator::format_compact(reach.min),
        ForecastEstimator::format_compact(reach.max)
    );

    Ok(())
}
