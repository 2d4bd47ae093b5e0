//! Output formatters for adforecast.
//!
//! This crate provides formatters for writing forecast series and
//! performance metrics to various output formats:
//!
//! - [`CsvFormatter`] - CSV or TSV format
//! - [`JsonFormatter`] - JSON document or NDJSON format

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/adforecast/adforecast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
