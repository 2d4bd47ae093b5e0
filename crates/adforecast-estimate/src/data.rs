//! Baseline campaign profile that every projection scales from.

use std::sync::OnceLock;

use adforecast_types::{Currency, ForecastError, MetricRange, Percent, TimeSeries};
use serde::{Deserialize, Serialize};

/// Embedded JSON with the reference campaign profile.
const BASELINE_JSON: &str = include_str!("../data/baseline.json");

/// Static baseline instance.
static BASELINE: OnceLock<BaselineProfile> = OnceLock::new();

/// Reference campaign performance observed at the base budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineProfile {
    /// Daily budget the constants were measured at.
    pub base_budget: f64,
    /// Smallest daily budget the planner accepts.
    pub minimum_budget: f64,
    /// Currency used for cost figures.
    #[serde(default)]
    pub currency: Currency,
    /// Unique people reached at the base budget.
    pub reach: MetricRange,
    /// Impressions per day at the base budget.
    pub impressions_per_day: MetricRange,
    /// Clicks per day at the base budget.
    pub clicks_per_day: MetricRange,
    /// Conversion range at the base budget, multiplied by duration like the
    /// other per-day figures.
    pub conversions: MetricRange,
    /// Click-through rate shown for every budget.
    pub ctr_percent: f64,
    /// Conversion rate shown for every budget.
    pub conversion_rate_percent: f64,
    /// Daily forecast at the base budget.
    pub forecast: TimeSeries,
}

impl BaselineProfile {
    /// Returns the global baseline instance.
    ///
    /// This lazily initializes the profile from embedded JSON on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        BASELINE.get_or_init(|| {
            Self::from_json(BASELINE_JSON).expect("embedded baseline.json should be valid")
        })
    }

    /// Creates a profile from a JSON string and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the profile is inconsistent.
    pub fn from_json(json: &str) -> Result<Self, ForecastError> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Checks that the constants can be scaled meaningfully.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::Baseline`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ForecastError> {
        if !self.base_budget.is_finite() || self.base_budget <= 0.0 {
            return Err(ForecastError::Baseline(format!(
                "base budget must be positive, got {}",
                self.base_budget
            )));
        }
        if !self.minimum_budget.is_finite() || self.minimum_budget < 0.0 {
            return Err(ForecastError::Baseline(format!(
                "minimum budget must be non-negative, got {}",
                self.minimum_budget
            )));
        }
        for (name, range) in self.ranges() {
            if !range.is_ordered() {
                return Err(ForecastError::Baseline(format!(
                    "{name} range is inverted ({range})"
                )));
            }
        }
        if self.clicks_per_day.max == 0 || self.conversions.max == 0 {
            return Err(ForecastError::Baseline(
                "click and conversion maxima must be non-zero".to_string(),
            ));
        }
        for (name, rate) in [
            ("ctr", self.ctr_percent),
            ("conversion rate", self.conversion_rate_percent),
        ] {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ForecastError::Baseline(format!(
                    "{name} must be a non-negative percentage, got {rate}"
                )));
            }
        }
        Ok(())
    }

    /// Returns the click-through rate.
    #[must_use]
    pub const fn ctr(&self) -> Percent {
        Percent(self.ctr_percent)
    }

    /// Returns the conversion rate.
    #[must_use]
    pub const fn conversion_rate(&self) -> Percent {
        Percent(self.conversion_rate_percent)
    }

    fn ranges(&self) -> [(&'static str, MetricRange); 4] {
        [
            ("reach", self.reach),
            ("impressions", self.impressions_per_day),
            ("clicks", self.clicks_per_day),
            ("conversions", self.conversions),
        ]
    }
}

impl Default for BaselineProfile {
    fn default() -> Self {
        Self::global().clone()
    }
}
