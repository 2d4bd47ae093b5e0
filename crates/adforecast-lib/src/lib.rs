//! Budget-driven advertising campaign forecasts.
//!
//! This is a facade crate that re-exports functionality from the adforecast
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use adforecast_lib::prelude::*;
//!
//! let estimator = ForecastEstimator::global();
//! let request = ForecastRequest::new(Budget::new(45.0)?, CampaignDays::new(10)?);
//!
//! let report = estimator.estimate(request)?;
//! println!("{}", ForecastEstimator::format_report(&report));
//! assert_eq!(report.tier, BudgetTier::BasicReach);
//! # Ok::<(), ForecastError>(())
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/adforecast/adforecast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use adforecast_types::*;

// Re-export the estimator
pub use adforecast_estimate::{BaselineProfile, ForecastEstimator, ForecastReport, ForecastRequest};

// Re-export formatters
#[cfg(feature = "format")]
pub use adforecast_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat,
};

// Re-export state handling
#[cfg(feature = "state")]
pub use adforecast_state::{
    CampaignState, FileStore, MemoryStore, StateError, StateIssue, StateStore,
};

/// Prelude module for convenient imports.
///
/// ```
/// use adforecast_lib::prelude::*;
/// ```
pub mod prelude {
    pub use adforecast_types::{
        Budget, BudgetTier, CampaignDays, CampaignGoal, ForecastError, MINIMUM_DAILY_BUDGET,
        MetricRange, PerformanceMetrics, Phase, Result, Schedule, TimeSeries,
    };

    pub use adforecast_estimate::{ForecastEstimator, ForecastReport, ForecastRequest};

    #[cfg(feature = "format")]
    pub use adforecast_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};

    #[cfg(feature = "state")]
    pub use adforecast_state::{CampaignState, FileStore, MemoryStore, StateStore};
}
