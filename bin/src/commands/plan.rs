//! Plan command implementation.
//!
//! Checks the saved campaign against the launch policy and renders the full
//! forecast for it.

use crate::display;
use adforecast_lib::prelude::*;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::warn;

/// Validate the saved campaign and show its forecast.
pub(crate) fn plan(json: bool, state_dir: Option<PathBuf>) -> Result<()> {
    let state = display::load_state(&display::open_store(state_dir)?)?;
    let today = chrono::Local::now().date_naive();
    let issues = state.validate(today);

    let request = state
        .forecast_request()
        .context("Saved campaign cannot be forecast")?;
    let report = ForecastEstimator::global().estimate(request)?;

    if json {
        for issue in &issues {
            warn!("{issue}");
        }
        JsonFormatter::new()
            .with_pretty(true)
            .write_value(&report, std::io::stdout().lock())?;
        return Ok(());
    }

    println!("Campaign:  {}", state.project_name);
    println!(
        "Website:   {}",
        if state.url.is_empty() { "-" } else { state.url.as_str() }
    );
    println!("Goal:      {}", state.goal.label());
    println!("CTA:       {}", state.cta);
    println!("Locations: {}", state.locations.join(", "));
    match state.schedule() {
        Ok(Some(schedule)) => println!("Schedule:  {schedule}"),
        _ => println!("Schedule:  not set ({} days assumed)", request.duration),
    }
    println!("Assets:    {}", state.assets_count);

    if issues.is_empty() {
        println!("\nReady to launch.");
    } else {
        println!("\nIssues:");
        for issue in &issues {
            println!("  - {issue}");
        }
    }

    println!("\n{}\n", ForecastEstimator::format_report(&report));
    print!(
        "{}",
        display::series_table(&report.forecast, &report.projected_scaling)
    );

    Ok(())
}
