//! Performance metric bundle and its building blocks.

use serde::{Deserialize, Serialize, Serializer};

/// Inclusive `{min, max}` range of a projected count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MetricRange {
    /// Lower bound.
    pub min: u64,
    /// Upper bound.
    pub max: u64,
}

impl MetricRange {
    /// Creates a range.
    #[must_use]
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Returns true if `min <= max`.
    #[must_use]
    pub const fn is_ordered(&self) -> bool {
        self.min <= self.max
    }

    /// Returns true if the value lies within the range.
    #[must_use]
    pub const fn contains(&self, value: u64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl std::fmt::Display for MetricRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

/// Currency used to display monetary amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US dollar.
    #[default]
    Usd,
    /// Turkish lira.
    Try,
    /// Euro.
    Eur,
}

impl Currency {
    /// Returns the currency symbol used as a prefix.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Try => "₺",
            Self::Eur => "€",
        }
    }

    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Try => "TRY",
            Self::Eur => "EUR",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = CurrencyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" | "$" => Ok(Self::Usd),
            "TRY" | "₺" => Ok(Self::Try),
            "EUR" | "€" => Ok(Self::Eur),
            _ => Err(CurrencyParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an unknown currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyParseError(String);

impl std::fmt::Display for CurrencyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown currency '{}', expected one of: USD, TRY, EUR",
            self.0
        )
    }
}

impl std::error::Error for CurrencyParseError {}

/// A monetary amount, displayed with its currency symbol and two decimals.
///
/// Serializes as its display string (e.g. `"$0.05"`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Money {
    /// Amount in whole currency units.
    pub amount: f64,
    /// Display currency.
    pub currency: Currency,
}

impl Money {
    /// Creates an amount in the given currency.
    #[must_use]
    pub const fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a US dollar amount.
    #[must_use]
    pub const fn usd(amount: f64) -> Self {
        Self::new(amount, Currency::Usd)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:.2}", self.currency.symbol(), self.amount)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A percentage, displayed with one decimal (e.g. `3.0%`).
///
/// Serializes as its display string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percent(pub f64);

impl Percent {
    /// Returns the value as a fraction (3.0% -> 0.03).
    #[must_use]
    pub fn as_fraction(self) -> f64 {
        self.0 / 100.0
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

impl Serialize for Percent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Projected campaign performance for one budget and duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    /// Unique people reached.
    pub reach: MetricRange,
    /// Total ad impressions over the campaign.
    pub impressions: MetricRange,
    /// Total clicks over the campaign.
    pub clicks: MetricRange,
    /// Click-through rate.
    pub ctr: Percent,
    /// Cost per click.
    pub cpc: Money,
    /// Total conversions over the campaign.
    pub conversions: MetricRange,
    /// Conversion rate.
    pub conversion_rate: Percent,
    /// Cost per conversion over the whole campaign.
    pub cost_per_conversion: Money,
}

impl PerformanceMetrics {
    /// Returns the named count ranges in display order.
    #[must_use]
    pub const fn ranges(&self) -> [(&'static str, MetricRange); 4] {
        [
            ("reach", self.reach),
            ("impressions", self.impressions),
            ("clicks", self.clicks),
            ("conversions", self.conversions),
        ]
    }
}
