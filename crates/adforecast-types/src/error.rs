//! Error types for adforecast.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for adforecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while validating inputs or computing a forecast.
#[derive(Error, Debug)]
pub enum ForecastError {
    /// Budget is NaN, infinite, negative, or zero where it is used as a divisor.
    #[error("Invalid budget: {value} ({reason})")]
    InvalidBudget {
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// Budget is valid but below the minimum daily spend policy.
    #[error("Budget {value} is below the minimum daily budget of {minimum}")]
    BelowMinimumBudget {
        /// The rejected value.
        value: f64,
        /// The policy minimum.
        minimum: f64,
    },

    /// Campaign duration is zero, negative, or fractional.
    #[error("Invalid duration: {0} (expected a positive whole number of days)")]
    InvalidDuration(String),

    /// Invalid campaign schedule.
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// Time series arrays differ in length.
    #[error("Mismatched series lengths: {labels} labels, {series_a} series A, {series_b} series B")]
    MismatchedSeries {
        /// Number of labels.
        labels: usize,
        /// Number of series A values.
        series_a: usize,
        /// Number of series B values.
        series_b: usize,
    },

    /// Baseline profile is inconsistent.
    #[error("Invalid baseline profile: {0}")]
    Baseline(String),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Error for invalid campaign schedules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// End date is before the start date.
    #[error("Invalid schedule: end {end} is before start {start}")]
    EndBeforeStart {
        /// The start date.
        start: NaiveDate,
        /// The end date.
        end: NaiveDate,
    },
}
