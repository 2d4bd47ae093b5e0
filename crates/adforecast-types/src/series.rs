//! Two-series daily forecast data.

use serde::{Deserialize, Serialize};

use crate::ForecastError;

/// Number of leading points that make up the discovery phase.
pub const DISCOVERY_DAYS: usize = 7;

/// Display phase a forecast point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// The first [`DISCOVERY_DAYS`] points, while delivery is being learned.
    Discovery,
    /// Every point after the discovery window.
    Scaling,
}

impl Phase {
    /// Returns the phase for a zero-based point index.
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        if index < DISCOVERY_DAYS {
            Self::Discovery
        } else {
            Self::Scaling
        }
    }

    /// Returns the phase as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Discovery => "discovery",
            Self::Scaling => "scaling",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single labelled point of a [`TimeSeries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForecastPoint<'a> {
    /// Day label (e.g. `09-04`).
    pub label: &'a str,
    /// Primary series value.
    pub series_a: u64,
    /// Secondary series value.
    pub series_b: u64,
    /// Phase derived from the point's position in its source series.
    pub phase: Phase,
}

/// Ordered daily forecast with two value series sharing one set of labels.
///
/// Serialized as parallel arrays: `{"labels": [...], "seriesA": [...], "seriesB": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTimeSeries")]
pub struct TimeSeries {
    labels: Vec<String>,
    series_a: Vec<u64>,
    series_b: Vec<u64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTimeSeries {
    labels: Vec<String>,
    series_a: Vec<u64>,
    series_b: Vec<u64>,
}

impl TryFrom<RawTimeSeries> for TimeSeries {
    type Error = ForecastError;

    fn try_from(raw: RawTimeSeries) -> Result<Self, Self::Error> {
        Self::new(raw.labels, raw.series_a, raw.series_b)
    }
}

impl TimeSeries {
    /// Creates a series from parallel arrays.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::MismatchedSeries`] if the arrays differ in length.
    pub fn new(
        labels: Vec<String>,
        series_a: Vec<u64>,
        series_b: Vec<u64>,
    ) -> Result<Self, ForecastError> {
        if labels.len() != series_a.len() || labels.len() != series_b.len() {
            return Err(ForecastError::MismatchedSeries {
                labels: labels.len(),
                series_a: series_a.len(),
                series_b: series_b.len(),
            });
        }
        Ok(Self {
            labels,
            series_a,
            series_b,
        })
    }

    /// Returns the point labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the primary series.
    #[must_use]
    pub fn series_a(&self) -> &[u64] {
        &self.series_a
    }

    /// Returns the secondary series.
    #[must_use]
    pub fn series_b(&self) -> &[u64] {
        &self.series_b
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if the series has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns a copy with both series transformed by `f`, keeping the labels.
    #[must_use]
    pub fn map_values(&self, mut f: impl FnMut(u64) -> u64) -> Self {
        Self {
            labels: self.labels.clone(),
            series_a: self.series_a.iter().map(|&v| f(v)).collect(),
            series_b: self.series_b.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Returns an iterator over the points in chronological order.
    pub fn points(&self) -> impl Iterator<Item = ForecastPoint<'_>> {
        self.labels
            .iter()
            .zip(&self.series_a)
            .zip(&self.series_b)
            .enumerate()
            .map(|(index, ((label, &series_a), &series_b))| ForecastPoint {
                label,
                series_a,
                series_b,
                phase: Phase::for_index(index),
            })
    }

    /// Splits the series into two at `index`. Indices past the end yield an
    /// empty second half.
    #[must_use]
    pub fn split_at(&self, index: usize) -> (Self, Self) {
        let index = index.min(self.len());
        let head = Self {
            labels: self.labels[..index].to_vec(),
            series_a: self.series_a[..index].to_vec(),
            series_b: self.series_b[..index].to_vec(),
        };
        let tail = Self {
            labels: self.labels[index..].to_vec(),
            series_a: self.series_a[index..].to_vec(),
            series_b: self.series_b[index..].to_vec(),
        };
        (head, tail)
    }

    /// Splits the series into its discovery and scaling windows.
    #[must_use]
    pub fn phases(&self) -> (Self, Self) {
        self.split_at(DISCOVERY_DAYS)
    }
}
