//! Daily budget and campaign duration.

use derive_more::{Display, Into};
use serde::{Deserialize, Serialize};

use crate::ForecastError;

/// Smallest daily budget the campaign planner accepts.
pub const MINIMUM_DAILY_BUDGET: f64 = 10.0;

/// Campaign length used when none is requested.
pub const DEFAULT_CAMPAIGN_DAYS: u32 = 14;

/// A daily advertising spend.
///
/// Always finite and non-negative. Zero is representable so that callers can
/// scale a series down to nothing, but it is rejected wherever the budget
/// ends up in a denominator.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, Into, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Budget(f64);

impl Budget {
    /// Creates a budget, rejecting NaN, infinities and negative amounts.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidBudget`] if the value is not a finite,
    /// non-negative number.
    pub fn new(value: f64) -> Result<Self, ForecastError> {
        if value.is_nan() {
            return Err(ForecastError::InvalidBudget {
                value,
                reason: "not a number",
            });
        }
        if value.is_infinite() {
            return Err(ForecastError::InvalidBudget {
                value,
                reason: "not finite",
            });
        }
        if value < 0.0 {
            return Err(ForecastError::InvalidBudget {
                value,
                reason: "negative",
            });
        }
        Ok(Self(value))
    }

    /// Returns the amount.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns true if the budget is exactly zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Checks the budget against a minimum daily spend.
    ///
    /// The estimator itself accepts any valid budget; this is the check the
    /// presentation layer runs before calling it.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::BelowMinimumBudget`] if the budget is below `minimum`.
    pub fn check_policy(self, minimum: f64) -> Result<Self, ForecastError> {
        if self.0 < minimum {
            return Err(ForecastError::BelowMinimumBudget {
                value: self.0,
                minimum,
            });
        }
        Ok(self)
    }

    /// Parses a budget from user input, accepting an optional leading `$`.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidBudget`] if the text is not a number
    /// or the number is not a valid budget.
    pub fn parse(input: &str) -> Result<Self, ForecastError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('$').unwrap_or(trimmed).trim();
        let value: f64 = digits.parse().map_err(|_| ForecastError::InvalidBudget {
            value: f64::NAN,
            reason: "not a number",
        })?;
        Self::new(value)
    }
}

impl TryFrom<f64> for Budget {
    type Error = ForecastError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::str::FromStr for Budget {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Campaign length in whole days. Always at least one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct CampaignDays(u32);

impl CampaignDays {
    /// Creates a duration, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidDuration`] if `days` is zero.
    pub fn new(days: u32) -> Result<Self, ForecastError> {
        if days == 0 {
            return Err(ForecastError::InvalidDuration(days.to_string()));
        }
        Ok(Self(days))
    }

    /// Creates a duration from a floating point day count.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidDuration`] for non-positive,
    /// fractional, non-finite or out-of-range values.
    pub fn from_f64(days: f64) -> Result<Self, ForecastError> {
        if !days.is_finite() || days.fract() != 0.0 || days < 1.0 || days > f64::from(u32::MAX) {
            return Err(ForecastError::InvalidDuration(days.to_string()));
        }
        Self::new(days as u32)
    }

    /// Returns the number of days.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for CampaignDays {
    fn default() -> Self {
        Self(DEFAULT_CAMPAIGN_DAYS)
    }
}

impl TryFrom<u32> for CampaignDays {
    type Error = ForecastError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        Self::new(days)
    }
}

impl TryFrom<f64> for CampaignDays {
    type Error = ForecastError;

    fn try_from(days: f64) -> Result<Self, Self::Error> {
        Self::from_f64(days)
    }
}
