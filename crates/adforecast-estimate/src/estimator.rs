//! Budget-driven forecast estimation.

use std::sync::OnceLock;

use adforecast_types::{
    Budget, BudgetTier, CampaignDays, ForecastError, MetricRange, Money, PerformanceMetrics,
    Result, TimeSeries,
};
use serde::Serialize;
use tracing::{debug, trace};

use crate::data::BaselineProfile;

/// Growth applied across the scaling window by the optimistic projection.
const SCALING_PROJECTION_GROWTH: f64 = 0.3;

/// Number of steps the scaling projection is spread over.
const SCALING_PROJECTION_STEPS: f64 = 7.0;

/// Static estimator instance.
static ESTIMATOR: OnceLock<ForecastEstimator<'static>> = OnceLock::new();

/// Rounds a projected count to the nearest integer, halves away from zero.
fn round_count(value: f64) -> u64 {
    value.round() as u64
}

/// Scales both bounds of a range by the same factor.
fn scale_range(base: MetricRange, factor: f64) -> MetricRange {
    MetricRange::new(
        round_count(base.min as f64 * factor),
        round_count(base.max as f64 * factor),
    )
}

/// Inputs for a single forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastRequest {
    /// Daily budget.
    pub budget: Budget,
    /// Campaign length.
    pub duration: CampaignDays,
}

impl ForecastRequest {
    /// Creates a request for the given budget and duration.
    #[must_use]
    pub const fn new(budget: Budget, duration: CampaignDays) -> Self {
        Self { budget, duration }
    }

    /// Creates a request for the default campaign length.
    #[must_use]
    pub fn with_budget(budget: Budget) -> Self {
        Self::new(budget, CampaignDays::default())
    }
}

/// Everything the presentation layer renders for one budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    /// The request the report was computed for.
    pub request: ForecastRequest,
    /// Budget band.
    pub tier: BudgetTier,
    /// Estimated daily reach.
    pub reach: MetricRange,
    /// Campaign performance projection.
    pub metrics: PerformanceMetrics,
    /// Daily forecast scaled to the budget.
    pub forecast: TimeSeries,
    /// Optimistic projection of the scaling window's primary series.
    pub projected_scaling: Vec<u64>,
}

/// Linear campaign forecast model.
///
/// Every projection is a baseline constant multiplied by
/// `budget / base_budget`. The estimator holds no mutable state and can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct ForecastEstimator<'a> {
    profile: &'a BaselineProfile,
}

impl<'a> ForecastEstimator<'a> {
    /// Creates an estimator over the given baseline.
    #[must_use]
    pub const fn new(profile: &'a BaselineProfile) -> Self {
        Self { profile }
    }

    /// Returns the baseline profile.
    #[must_use]
    pub const fn profile(&self) -> &'a BaselineProfile {
        self.profile
    }

    /// Returns `budget / base_budget`.
    #[must_use]
    pub fn scale(&self, budget: Budget) -> f64 {
        budget.value() / self.profile.base_budget
    }

    /// Scales every point of both series by the budget ratio.
    ///
    /// Labels and length are preserved. A zero budget yields an all-zero series.
    #[must_use]
    pub fn scale_time_series(&self, base: &TimeSeries, budget: Budget) -> TimeSeries {
        let scale = self.scale(budget);
        trace!(points = base.len(), scale, "scaling time series");
        base.map_values(|value| round_count(value as f64 * scale))
    }

    /// Scales the baseline's reference forecast to the budget.
    #[must_use]
    pub fn scaled_forecast(&self, budget: Budget) -> TimeSeries {
        self.scale_time_series(&self.profile.forecast, budget)
    }

    /// Estimates the daily reach range for a budget.
    #[must_use]
    pub fn estimate_reach(&self, budget: Budget) -> MetricRange {
        scale_range(self.profile.reach, self.scale(budget))
    }

    /// Projects campaign performance for a budget over `duration` days.
    ///
    /// Reach does not depend on `duration`; impressions, clicks and
    /// conversions do. Click-through and conversion rates are the baseline's
    /// fixed figures rather than ratios of the projected counts.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidBudget`] for a zero budget, since cost
    /// per click and cost per conversion would divide by zero, and for
    /// budgets so small or so large that the ratio or the projected counts
    /// leave the representable range.
    pub fn generate_performance_metrics(
        &self,
        budget: Budget,
        duration: CampaignDays,
    ) -> Result<PerformanceMetrics> {
        if budget.is_zero() {
            return Err(ForecastError::InvalidBudget {
                value: budget.value(),
                reason: "cost per click is undefined for a zero budget",
            });
        }

        let profile = self.profile;
        let daily_budget = budget.value();
        let days = f64::from(duration.get());
        let scale = self.scale(budget);

        // Subnormal budgets underflow to a zero ratio.
        if scale <= 0.0 {
            return Err(ForecastError::InvalidBudget {
                value: daily_budget,
                reason: "budget is too small to scale",
            });
        }

        let largest_count = [
            profile.reach.max as f64 * scale,
            profile.impressions_per_day.max as f64 * scale * days,
            profile.clicks_per_day.max as f64 * scale * days,
            profile.conversions.max as f64 * scale * days,
        ]
        .into_iter()
        .fold(0.0, f64::max);
        if !largest_count.is_finite() || largest_count >= u64::MAX as f64 {
            return Err(ForecastError::InvalidBudget {
                value: daily_budget,
                reason: "projected counts exceed the representable range",
            });
        }

        // Divide by the ratio first so the spend terms cannot overflow.
        let base_spend = daily_budget / scale;
        let cpc = base_spend / profile.clicks_per_day.max as f64;
        let cost_per_conversion = base_spend * days / profile.conversions.max as f64;
        if !cpc.is_finite() || !cost_per_conversion.is_finite() {
            return Err(ForecastError::InvalidBudget {
                value: daily_budget,
                reason: "cost per click is not a finite amount",
            });
        }

        debug!(
            budget = daily_budget,
            days = duration.get(),
            scale,
            "generating performance metrics"
        );

        Ok(PerformanceMetrics {
            reach: scale_range(profile.reach, scale),
            impressions: scale_range(profile.impressions_per_day, scale * days),
            clicks: scale_range(profile.clicks_per_day, scale * days),
            ctr: profile.ctr(),
            cpc: Money::new(cpc, profile.currency),
            conversions: scale_range(profile.conversions, scale * days),
            conversion_rate: profile.conversion_rate(),
            cost_per_conversion: Money::new(cost_per_conversion, profile.currency),
        })
    }

    /// Applies the optimistic growth curve to the primary series of a
    /// scaling window: point `i` grows by `30% * (i + 1) / 7`.
    #[must_use]
    pub fn project_scaling(scaling: &TimeSeries) -> Vec<u64> {
        scaling
            .series_a()
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let value = value as f64;
                let growth = value * SCALING_PROJECTION_GROWTH * (index as f64 + 1.0)
                    / SCALING_PROJECTION_STEPS;
                round_count(value + growth)
            })
            .collect()
    }

    /// Computes the full report for one request.
    ///
    /// # Errors
    ///
    /// Returns an error if the performance metrics cannot be computed.
    pub fn estimate(&self, request: ForecastRequest) -> Result<ForecastReport> {
        let metrics = self.generate_performance_metrics(request.budget, request.duration)?;
        let forecast = self.scaled_forecast(request.budget);
        let (_, scaling) = forecast.phases();
        let projected_scaling = Self::project_scaling(&scaling);

        Ok(ForecastReport {
            request,
            tier: BudgetTier::classify(request.budget),
            reach: metrics.reach,
            metrics,
            forecast,
            projected_scaling,
        })
    }

    /// Formats a report as a human-readable summary.
    #[must_use]
    pub fn format_report(report: &ForecastReport) -> String {
        let metrics = &report.metrics;
        format!(
            "Budget: {}/day for {} days ({})\n\
             Reach: {} - {}\n\
             Impressions: {} - {}\n\
             Clicks: {} - {} (CTR {}, CPC {})\n\
             Conversions: {} - {} (rate {}, {} each)",
            Money::new(report.request.budget.value(), metrics.cpc.currency),
            report.request.duration,
            report.tier,
            Self::format_compact(metrics.reach.min),
            Self::format_compact(metrics.reach.max),
            Self::format_compact(metrics.impressions.min),
            Self::format_compact(metrics.impressions.max),
            Self::format_compact(metrics.clicks.min),
            Self::format_compact(metrics.clicks.max),
            metrics.ctr,
            metrics.cpc,
            Self::format_compact(metrics.conversions.min),
            Self::format_compact(metrics.conversions.max),
            metrics.conversion_rate,
            metrics.cost_per_conversion,
        )
    }

    /// Formats a count in compact form with no decimals (e.g. "977K", "1M").
    #[must_use]
    pub fn format_compact(count: u64) -> String {
        Self::format_compact_with(count, 0)
    }

    /// Formats a count in compact form with `decimals` fractional digits
    /// (e.g. "976.9K" with one decimal). Counts below 1000 are printed
    /// unchanged. Halves round away from zero.
    #[must_use]
    pub fn format_compact_with(count: u64, decimals: usize) -> String {
        fn scaled(count: u64, unit: f64, suffix: &str, decimals: usize) -> String {
            let factor = 10_f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
            let value = (count as f64 / unit * factor).round() / factor;
            format!("{value:.decimals$}{suffix}")
        }

        if count >= 1_000_000 {
            scaled(count, 1_000_000.0, "M", decimals)
        } else if count >= 1_000 {
            scaled(count, 1_000.0, "K", decimals)
        } else {
            count.to_string()
        }
    }
}

impl ForecastEstimator<'static> {
    /// Returns the global estimator over the embedded baseline.
    #[must_use]
    pub fn global() -> &'static Self {
        ESTIMATOR.get_or_init(|| Self::new(BaselineProfile::global()))
    }
}

impl Default for ForecastEstimator<'static> {
    fn default() -> Self {
        *Self::global()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn budget(value: f64) -> Budget {
        Budget::new(value).unwrap()
    }

    fn days(value: u32) -> CampaignDays {
        CampaignDays::new(value).unwrap()
    }

    #[test]
    fn test_scale_identity_at_base_budget() {
        let estimator = ForecastEstimator::global();
        let baseline = &estimator.profile().forecast;

        let scaled = estimator.scale_time_series(baseline, budget(30.0));

        assert_eq!(&scaled, baseline);
    }

    #[test]
    fn test_scale_half_budget() {
        let estimator = ForecastEstimator::global();

        let scaled = estimator.scaled_forecast(budget(15.0));

        assert_eq!(scaled.series_a()[0], 410);
        assert_eq!(scaled.series_b()[0], 325);
        assert_eq!(scaled.labels(), estimator.profile().forecast.labels());
    }

    #[test]
    fn test_scale_zero_budget() {
        let scaled = ForecastEstimator::global().scaled_forecast(budget(0.0));

        assert_eq!(scaled.len(), 14);
        assert!(scaled.series_a().iter().all(|&v| v == 0));
        assert!(scaled.series_b().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_scale_rounds_half_away_from_zero() {
        let series = TimeSeries::new(vec!["d1".into()], vec![1], vec![3]).unwrap();

        let scaled = ForecastEstimator::global().scale_time_series(&series, budget(15.0));

        // 0.5 -> 1, 1.5 -> 2
        assert_eq!(scaled.series_a(), &[1]);
        assert_eq!(scaled.series_b(), &[2]);
    }

    #[test]
    fn test_reach_at_base_budget() {
        let reach = ForecastEstimator::global().estimate_reach(budget(30.0));
        assert_eq!(reach, MetricRange::new(976_900, 1_465_400));
    }

    #[test]
    fn test_reach_and_series_monotonic() {
        let estimator = ForecastEstimator::global();
        let mut previous_reach = estimator.estimate_reach(budget(1.0));
        let mut previous_series = estimator.scaled_forecast(budget(1.0));

        for step in 2..=400 {
            let current = budget(f64::from(step) * 0.5);
            let reach = estimator.estimate_reach(current);
            let series = estimator.scaled_forecast(current);

            assert!(reach.min <= reach.max);
            assert!(reach.min >= previous_reach.min);
            assert!(reach.max >= previous_reach.max);
            for (now, before) in series.series_a().iter().zip(previous_series.series_a()) {
                assert!(now >= before);
            }
            for (now, before) in series.series_b().iter().zip(previous_series.series_b()) {
                assert!(now >= before);
            }

            previous_reach = reach;
            previous_series = series;
        }
    }

    #[test]
    fn test_metrics_at_base_budget() {
        let metrics = ForecastEstimator::global()
            .generate_performance_metrics(budget(30.0), CampaignDays::default())
            .unwrap();

        assert_eq!(metrics.reach, MetricRange::new(976_900, 1_465_400));
        assert_eq!(metrics.impressions, MetricRange::new(175_000, 262_500));
        assert_eq!(metrics.clicks, MetricRange::new(5_250, 7_868));
        assert_eq!(metrics.conversions, MetricRange::new(210, 392));
        assert_eq!(metrics.ctr.to_string(), "3.0%");
        assert_eq!(metrics.conversion_rate.to_string(), "4.5%");
        assert_eq!(metrics.cpc.to_string(), "$0.05");
        assert_eq!(metrics.cost_per_conversion.to_string(), "$15.00");
        assert_relative_eq!(metrics.cpc.amount, 30.0 / 562.0, epsilon = 1e-12);
    }

    #[test]
    fn test_metrics_double_budget() {
        let metrics = ForecastEstimator::global()
            .generate_performance_metrics(budget(60.0), days(14))
            .unwrap();

        assert_eq!(metrics.impressions.min, 350_000);
        assert_eq!(metrics.reach, MetricRange::new(1_953_800, 2_930_800));
    }

    #[test]
    fn test_metrics_reach_ignores_duration() {
        let estimator = ForecastEstimator::global();
        let short = estimator
            .generate_performance_metrics(budget(30.0), days(7))
            .unwrap();
        let long = estimator
            .generate_performance_metrics(budget(30.0), days(28))
            .unwrap();

        assert_eq!(short.reach, long.reach);
        assert_eq!(short.impressions.min * 4, long.impressions.min);
        assert_eq!(long.cost_per_conversion.to_string(), "$30.00");
    }

    #[test]
    fn test_metrics_ranges_ordered() {
        let estimator = ForecastEstimator::global();
        for value in [0.01, 1.0, 10.0, 17.3, 30.0, 99.9, 200.0] {
            let metrics = estimator
                .generate_performance_metrics(budget(value), days(9))
                .unwrap();
            for (name, range) in metrics.ranges() {
                assert!(range.is_ordered(), "{name} inverted at budget {value}");
            }
        }
    }

    #[test]
    fn test_metrics_zero_budget_rejected() {
        let result = ForecastEstimator::global()
            .generate_performance_metrics(budget(0.0), CampaignDays::default());

        assert!(matches!(result, Err(ForecastError::InvalidBudget { .. })));
    }

    #[test]
    fn test_metrics_subnormal_budget_rejected() {
        let result = ForecastEstimator::global()
            .generate_performance_metrics(budget(f64::from_bits(1)), CampaignDays::default());

        assert!(matches!(result, Err(ForecastError::InvalidBudget { .. })));
    }

    #[test]
    fn test_metrics_huge_budget_rejected() {
        let result = ForecastEstimator::global()
            .generate_performance_metrics(budget(1e308), CampaignDays::default());

        assert!(matches!(result, Err(ForecastError::InvalidBudget { .. })));
    }

    #[test]
    fn test_metrics_large_budget_stays_finite() {
        let metrics = ForecastEstimator::global()
            .generate_performance_metrics(budget(1e12), CampaignDays::default())
            .unwrap();

        assert!(metrics.cpc.amount.is_finite());
        assert_eq!(metrics.cpc.to_string(), "$0.05");
        assert_eq!(metrics.cost_per_conversion.to_string(), "$15.00");
        assert!(metrics.impressions.is_ordered());
    }

    #[test]
    fn test_project_scaling() {
        let series = TimeSeries::new(
            vec!["a".into(), "b".into()],
            vec![7000, 7000],
            vec![0, 0],
        )
        .unwrap();

        let projected = ForecastEstimator::project_scaling(&series);

        // 7000 + 7000 * 0.3 * 1 / 7 = 7300; second step doubles the growth
        assert_eq!(projected, vec![7300, 7600]);
    }

    #[test]
    fn test_estimate_report() {
        let request = ForecastRequest::with_budget(budget(60.0));

        let report = ForecastEstimator::global().estimate(request).unwrap();

        assert_eq!(report.tier, BudgetTier::DoubleResults);
        assert_eq!(report.reach, report.metrics.reach);
        assert_eq!(report.forecast.len(), 14);
        assert_eq!(report.projected_scaling.len(), 7);
        // seriesA[7] at 2x = 8800, first projection step adds 30% / 7
        assert_eq!(report.projected_scaling[0], 9177);
    }

    #[test]
    fn test_estimate_zero_budget() {
        let request = ForecastRequest::with_budget(budget(0.0));
        assert!(ForecastEstimator::global().estimate(request).is_err());
    }

    #[test]
    fn test_format_compact() {
        assert_eq!(ForecastEstimator::format_compact(976_900), "977K");
        assert_eq!(ForecastEstimator::format_compact(1_465_400), "1M");
        assert_eq!(ForecastEstimator::format_compact(2_000_000), "2M");
        assert_eq!(ForecastEstimator::format_compact(5_000), "5K");
        assert_eq!(ForecastEstimator::format_compact(2_500), "3K");
        assert_eq!(ForecastEstimator::format_compact(999), "999");
    }

    #[test]
    fn test_format_compact_with_decimals() {
        assert_eq!(ForecastEstimator::format_compact_with(976_900, 1), "976.9K");
        assert_eq!(ForecastEstimator::format_compact_with(1_465_400, 1), "1.5M");
        assert_eq!(ForecastEstimator::format_compact_with(2_000_000, 1), "2.0M");
        assert_eq!(ForecastEstimator::format_compact_with(1_465_400, 2), "1.47M");
        assert_eq!(ForecastEstimator::format_compact_with(42, 2), "42");
    }

    #[test]
    fn test_format_report() {
        let report = ForecastEstimator::global()
            .estimate(ForecastRequest::with_budget(budget(30.0)))
            .unwrap();

        let text = ForecastEstimator::format_report(&report);

        assert!(text.contains("Budget: $30.00/day for 14 days (Basic Reach)"));
        assert!(text.contains("Reach: 977K - 1M"));
        assert!(text.contains("CPC $0.05"));
    }

    #[test]
    fn test_custom_profile() {
        let mut profile = BaselineProfile::global().clone();
        profile.base_budget = 60.0;
        let estimator = ForecastEstimator::new(&profile);

        let reach = estimator.estimate_reach(budget(30.0));

        assert_eq!(reach, MetricRange::new(488_450, 732_700));
    }
}
