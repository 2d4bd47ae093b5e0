//! JSON output format.

use adforecast_types::{PerformanceMetrics, TimeSeries};
use serde::Serialize;
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// One JSON document.
    #[default]
    Document,
    /// Newline-delimited JSON (NDJSON/JSONL), one line per series point.
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (document style only).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (document style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Document,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (document style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    /// Writes any serializable value as one JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_value<T: Serialize + ?Sized, W: Write>(
        &self,
        value: &T,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.pretty && self.style == JsonStyle::Document {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_series<W: Write>(&self, series: &TimeSeries, mut writer: W) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Document => self.write_value(series, writer),
            JsonStyle::Ndjson => {
                for point in series.points() {
                    serde_json::to_writer(&mut writer, &point)?;
                    writeln!(writer)?;
                }
                Ok(())
            }
        }
    }

    fn write_metrics<W: Write>(
        &self,
        metrics: &PerformanceMetrics,
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_value(metrics, writer)
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Document => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}
