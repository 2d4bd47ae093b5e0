//! Budget tiers and campaign goals.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::Budget;

/// Named band a daily budget falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    /// $10 - $20 per day.
    #[default]
    Limited,
    /// $21 - $50 per day.
    BasicReach,
    /// $51 and above.
    DoubleResults,
}

impl BudgetTier {
    /// Classifies a budget by its lower band edges. Anything below the
    /// basic reach band, including out-of-policy budgets, is `Limited`.
    #[must_use]
    pub fn classify(budget: Budget) -> Self {
        let value = budget.value();
        Self::all()
            .iter()
            .rev()
            .copied()
            .find(|tier| value >= tier.min_budget())
            .unwrap_or_default()
    }

    /// Lowest daily budget of the band.
    #[must_use]
    pub const fn min_budget(&self) -> f64 {
        match self {
            Self::Limited => 10.0,
            Self::BasicReach => 21.0,
            Self::DoubleResults => 51.0,
        }
    }

    /// Highest daily budget of the band, or None for the open top band.
    #[must_use]
    pub const fn max_budget(&self) -> Option<f64> {
        match self {
            Self::Limited => Some(20.0),
            Self::BasicReach => Some(50.0),
            Self::DoubleResults => None,
        }
    }

    /// English label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Limited => "Limited",
            Self::BasicReach => "Basic Reach",
            Self::DoubleResults => "2x+ Results",
        }
    }

    /// Turkish description.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Limited => "Sınırlı erişim",
            Self::BasicReach => "Temel erişim",
            Self::DoubleResults => "2x+ sonuç",
        }
    }

    /// Returns all tiers in ascending order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Limited, Self::BasicReach, Self::DoubleResults]
    }
}

impl std::fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What the campaign optimizes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CampaignGoal {
    /// Website visits.
    #[default]
    Traffic,
    /// Lead form submissions.
    Leads,
    /// Purchases.
    Sales,
}

impl CampaignGoal {
    /// Returns the goal identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Traffic => "Traffic",
            Self::Leads => "Leads",
            Self::Sales => "Sales",
        }
    }

    /// Turkish display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Traffic => "Web Sitesi Trafiği",
            Self::Leads => "Potansiyel Müşteri",
            Self::Sales => "Satış",
        }
    }

    /// Returns all goals.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Traffic, Self::Leads, Self::Sales]
    }
}

impl std::fmt::Display for CampaignGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CampaignGoal {
    type Err = GoalParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "traffic" => Ok(Self::Traffic),
            "leads" | "lead" => Ok(Self::Leads),
            "sales" | "sale" => Ok(Self::Sales),
            _ => Err(GoalParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid campaign goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalParseError(String);

impl std::fmt::Display for GoalParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid goal '{}', expected one of: traffic, leads, sales",
            self.0
        )
    }
}

impl std::error::Error for GoalParseError {}
