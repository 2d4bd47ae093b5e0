//! Tiers command implementation.

use crate::display;
use adforecast_lib::prelude::*;
use anyhow::Result;

/// List budget tiers, marking the one a budget falls into.
pub(crate) fn list_tiers(budget: Option<&str>) -> Result<()> {
    let current = budget
        .map(display::parse_budget)
        .transpose()?
        .map(BudgetTier::classify);

    println!("{:<2} {:<14} {:<12} DESCRIPTION", "", "TIER", "DAILY BUDGET");
    println!("{}", "-".repeat(70));

    for tier in BudgetTier::all() {
        let marker = if current == Some(*tier) { "*" } else { "" };
        println!(
            "{:<2} {:<14} {:<12} {}",
            marker,
            tier.label(),
            band(*tier),
            tier.description()
        );
    }

    Ok(())
}

fn band(tier: BudgetTier) -> String {
    match tier.max_budget() {
        Some(max) => format!("${}-${}", tier.min_budget(), max),
        None => format!("${}+", tier.min_budget()),
    }
}
