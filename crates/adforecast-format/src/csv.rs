//! CSV output format.

use adforecast_types::{PerformanceMetrics, TimeSeries};
use std::io::Write;

use crate::{FormatError, Formatter};

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for CsvFormatter {
    fn write_series<W: Write>(&self, series: &TimeSeries, mut writer: W) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "label{d}series_a{d}series_b{d}phase")?;
        }

        for point in series.points() {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}",
                point.label, point.series_a, point.series_b, point.phase
            )?;
        }

        Ok(())
    }

    fn write_metrics<W: Write>(
        &self,
        metrics: &PerformanceMetrics,
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(writer, "metric{d}min{d}max")?;
        }

        for (name, range) in metrics.ranges() {
            writeln!(writer, "{name}{d}{}{d}{}", range.min, range.max)?;
        }

        // Scalars repeat in both columns so every row has the same shape
        for (name, value) in [
            ("ctr", metrics.ctr.to_string()),
            ("cpc", metrics.cpc.to_string()),
            ("conversion_rate", metrics.conversion_rate.to_string()),
            ("cost_per_conversion", metrics.cost_per_conversion.to_string()),
        ] {
            writeln!(writer, "{name}{d}{value}{d}{value}")?;
        }

        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adforecast_types::{MetricRange, Money, Percent};
    use std::io::Cursor;

    fn create_test_series() -> TimeSeries {
        let labels = (4..=11).map(|day| format!("09-{day:02}")).collect();
        TimeSeries::new(labels, (1..=8).collect(), (11..=18).collect()).unwrap()
    }

    fn create_test_metrics() -> PerformanceMetrics {
        PerformanceMetrics {
            reach: MetricRange::new(976_900, 1_465_400),
            impressions: MetricRange::new(175_000, 262_500),
            clicks: MetricRange::new(5_250, 7_868),
            ctr: Percent(3.0),
            cpc: Money::usd(30.0 / 562.0),
            conversions: MetricRange::new(210, 392),
            conversion_rate: Percent(4.5),
            cost_per_conversion: Money::usd(15.0),
        }
    }

    #[test]
    fn test_csv_series() {
        let formatter = CsvFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_series(&create_test_series(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines[0], "label,series_a,series_b,phase");
        assert_eq!(lines[1], "09-04,1,11,discovery");
        assert_eq!(lines[8], "09-11,8,18,scaling");
        assert_eq!(lines.len(), 9);
    }

    #[test]
    fn test_csv_metrics() {
        let formatter = CsvFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_metrics(&create_test_metrics(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with("metric,min,max\n"));
        assert!(result.contains("reach,976900,1465400\n"));
        assert!(result.contains("cpc,$0.05,$0.05\n"));
        assert!(result.contains("conversion_rate,4.5%,4.5%\n"));
    }

    #[test]
    fn test_csv_no_header() {
        let formatter = CsvFormatter::new().with_header(false);
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_series(&create_test_series(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(!result.contains("label,series_a"));
    }

    #[test]
    fn test_tsv() {
        let formatter = CsvFormatter::tsv();
        let mut output = Cursor::new(Vec::new());

        formatter
            .write_series(&create_test_series(), &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("label\tseries_a\tseries_b"));
        assert_eq!(formatter.extension(), "tsv");
    }
}
