//! adforecast CLI - budget-driven advertising campaign forecasts.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;
mod logging;

use display::Format;

#[derive(Parser)]
#[command(name = "adforecast")]
#[command(about = "Budget-driven advertising campaign forecasts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only log errors)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Directory holding the saved campaign. Defaults to the platform data directory.
    #[arg(long, env = "ADFORECAST_STATE_DIR", global = true)]
    state_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the daily forecast scaled to a budget
    Forecast {
        /// Daily budget (e.g. 30 or $30). Defaults to the saved campaign's budget.
        #[arg(short, long)]
        budget: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,

        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Estimate daily reach for a budget
    Reach {
        /// Daily budget. Defaults to the saved campaign's budget.
        #[arg(short, long)]
        budget: Option<String>,
    },

    /// Project campaign performance for a budget and duration
    Metrics {
        /// Daily budget. Defaults to the saved campaign's budget.
        #[arg(short, long)]
        budget: Option<String>,

        /// Campaign length in days
        #[arg(short, long, default_value = "14")]
        days: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },

    /// List budget tiers
    Tiers {
        /// Highlight the tier this daily budget falls into
        #[arg(short, long)]
        budget: Option<String>,
    },

    /// Validate the saved campaign and show its full forecast
    Plan {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or change the saved campaign
    State {
        #[command(subcommand)]
        action: StateAction,
    },
}

/// Actions on the saved campaign.
#[derive(Subcommand)]
enum StateAction {
    /// Print the saved campaign
    Show,

    /// Change fields of the saved campaign
    Set {
        /// Website being advertised
        #[arg(long)]
        url: Option<String>,

        /// Campaign name
        #[arg(long)]
        project_name: Option<String>,

        /// Campaign goal (traffic, leads, sales)
        #[arg(long)]
        goal: Option<String>,

        /// Call-to-action text
        #[arg(long)]
        cta: Option<String>,

        /// Daily budget
        #[arg(long)]
        budget: Option<String>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,

        /// Add a targeted location (repeatable)
        #[arg(long = "location")]
        add_locations: Vec<String>,

        /// Remove a targeted location (repeatable)
        #[arg(long = "remove-location")]
        remove_locations: Vec<String>,

        /// Number of creative assets
        #[arg(long)]
        assets: Option<u32>,
    },

    /// Forget the saved campaign
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let state_dir = cli.state_dir;

    match command {
        Commands::Forecast {
            budget,
            format,
            output,
        } => commands::forecast::forecast(
            budget.as_deref(),
            format,
            output.as_deref(),
            state_dir,
        ),
        Commands::Reach { budget } => commands::reach::reach(budget.as_deref(), state_dir),
        Commands::Metrics {
            budget,
            days,
            format,
        } => commands::metrics::metrics(budget.as_deref(), days, format, state_dir),
        Commands::Tiers { budget } => commands::tiers::list_tiers(budget.as_deref()),
        Commands::Plan { json } => commands::plan::plan(json, state_dir),
        Commands::State { action } => match action {
            StateAction::Show => commands::state::show(state_dir),
            StateAction::Set {
                url,
                project_name,
                goal,
                cta,
                budget,
                start,
                end,
                add_locations,
                remove_locations,
                assets,
            } => commands::state::set(
                commands::state::StateChanges {
                    url,
                    project_name,
                    goal,
                    cta,
                    budget,
                    start,
                    end,
                    add_locations,
                    remove_locations,
                    assets,
                },
                state_dir,
            ),
            StateAction::Reset => commands::state::reset(state_dir),
        },
    }
}
