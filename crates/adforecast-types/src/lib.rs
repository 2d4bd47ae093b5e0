//! Core value types for the adforecast campaign forecast model.
//!
//! This crate provides the data structures shared by the workspace:
//!
//! - [`Budget`] - A validated daily spend
//! - [`CampaignDays`] - A positive campaign duration
//! - [`Schedule`] - Inclusive campaign date range
//! - [`TimeSeries`] - Two-series daily forecast with discovery/scaling phases
//! - [`PerformanceMetrics`] - Projected reach, impressions, clicks and conversions
//! - [`BudgetTier`] - Named budget band
//! - [`ForecastError`] - Validation and computation errors

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/adforecast/adforecast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod budget;
mod error;
mod metrics;
mod schedule;
mod series;
mod tier;

pub use budget::{Budget, CampaignDays, DEFAULT_CAMPAIGN_DAYS, MINIMUM_DAILY_BUDGET};
pub use error::{ForecastError, Result, ScheduleError};
pub use metrics::{Currency, CurrencyParseError, MetricRange, Money, Percent, PerformanceMetrics};
pub use schedule::Schedule;
pub use series::{DISCOVERY_DAYS, ForecastPoint, Phase, TimeSeries};
pub use tier::{BudgetTier, CampaignGoal, GoalParseError};
