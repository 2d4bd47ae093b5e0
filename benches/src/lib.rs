//! Benchmark fixtures for adforecast.

use adforecast_lib::prelude::*;

/// A named budget and duration to benchmark.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkCase {
    /// Label shown in the report.
    pub name: &'static str,
    /// Request the case runs.
    pub request: ForecastRequest,
}

/// Returns one case per budget tier plus a long campaign.
///
/// # Panics
///
/// Panics if a fixture budget or duration is invalid.
#[must_use]
pub fn benchmark_cases() -> Vec<BenchmarkCase> {
    let case = |name, budget: f64, days: u32| BenchmarkCase {
        name,
        request: ForecastRequest::new(
            Budget::new(budget).expect("fixture budget"),
            CampaignDays::new(days).expect("fixture duration"),
        ),
    };

    vec![
        case("limited-14d", 15.0, 14),
        case("basic-14d", 30.0, 14),
        case("double-14d", 80.0, 14),
        case("basic-90d", 30.0, 90),
    ]
}

/// Returns `count` budgets spread across the tiers.
#[must_use]
pub fn budget_sweep(count: usize) -> Vec<Budget> {
    (0..count)
        .filter_map(|i| Budget::new(MINIMUM_DAILY_BUDGET + i as f64 * 0.5).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cases_cover_every_tier() {
        let tiers: Vec<_> = benchmark_cases()
            .iter()
            .map(|case| BudgetTier::classify(case.request.budget))
            .collect();

        for tier in BudgetTier::all() {
            assert!(tiers.contains(tier));
        }
    }

    #[test]
    fn test_budget_sweep() {
        let budgets = budget_sweep(100);
        assert_eq!(budgets.len(), 100);
        assert_eq!(budgets[0].value(), MINIMUM_DAILY_BUDGET);
    }
}
