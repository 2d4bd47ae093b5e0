//! State command implementations.

use crate::display;
use adforecast_lib::prelude::*;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::info;

/// Field changes requested on the command line.
#[derive(Debug, Default)]
pub(crate) struct StateChanges {
    pub(crate) url: Option<String>,
    pub(crate) project_name: Option<String>,
    pub(crate) goal: Option<String>,
    pub(crate) cta: Option<String>,
    pub(crate) budget: Option<String>,
    pub(crate) start: Option<String>,
    pub(crate) end: Option<String>,
    pub(crate) add_locations: Vec<String>,
    pub(crate) remove_locations: Vec<String>,
    pub(crate) assets: Option<u32>,
}

/// Parsed form of [`StateChanges`], checked before anything is saved.
#[derive(Debug, Default)]
struct ParsedChanges {
    goal: Option<CampaignGoal>,
    budget: Option<Budget>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl StateChanges {
    fn parse(&self) -> Result<ParsedChanges> {
        Ok(ParsedChanges {
            goal: self.goal.as_deref().map(str::parse).transpose()?,
            budget: self
                .budget
                .as_deref()
                .map(display::parse_budget)
                .transpose()?,
            start: self.start.as_deref().map(display::parse_date).transpose()?,
            end: self.end.as_deref().map(display::parse_date).transpose()?,
        })
    }

    fn apply(self, parsed: ParsedChanges, state: &mut CampaignState) {
        if let Some(url) = self.url {
            state.url = url;
        }
        if let Some(project_name) = self.project_name {
            state.project_name = project_name;
        }
        if let Some(goal) = parsed.goal {
            state.goal = goal;
        }
        if let Some(cta) = self.cta {
            state.cta = cta;
        }
        if let Some(budget) = parsed.budget {
            state.budget = budget.value();
        }
        if parsed.start.is_some() {
            state.start_at = parsed.start;
        }
        if parsed.end.is_some() {
            state.end_at = parsed.end;
        }
        for location in &self.remove_locations {
            state.remove_location(location);
        }
        for location in &self.add_locations {
            state.add_location(location);
        }
        if let Some(assets) = self.assets {
            state.assets_count = assets;
        }
    }
}

/// Print the saved campaign.
pub(crate) fn show(state_dir: Option<PathBuf>) -> Result<()> {
    let store = display::open_store(state_dir)?;
    let state = display::load_state(&store)?;

    println!("File:      {}", store.state_path().display());
    println!("Campaign:  {}", state.project_name);
    println!("Website:   {}", state.url);
    println!("Goal:      {} ({})", state.goal.label(), state.goal);
    println!("CTA:       {}", state.cta);
    println!("Budget:    {}/day", state.budget);
    println!(
        "Start:     {}",
        state.start_at.map_or_else(|| "-".to_string(), |d| d.to_string())
    );
    println!(
        "End:       {}",
        state.end_at.map_or_else(|| "-".to_string(), |d| d.to_string())
    );
    println!("Locations: {}", state.locations.join(", "));
    println!("Assets:    {}", state.assets_count);

    Ok(())
}

/// Change fields of the saved campaign.
pub(crate) fn set(changes: StateChanges, state_dir: Option<PathBuf>) -> Result<()> {
    let parsed = changes.parse()?;
    let store = display::open_store(state_dir)?;

    let state = store
        .update(|state| changes.apply(parsed, state))
        .context("Failed to save campaign")?;
    info!(path = %store.state_path().display(), "campaign saved");

    if let Err(e) = state.schedule() {
        println!("Warning: {e}");
    }
    println!("Saved campaign to {}", store.state_path().display());

    Ok(())
}

/// Forget the saved campaign.
pub(crate) fn reset(state_dir: Option<PathBuf>) -> Result<()> {
    let store = display::open_store(state_dir)?;
    store.reset().context("Failed to reset campaign")?;
    println!("Campaign reset to defaults");

    Ok(())
}
