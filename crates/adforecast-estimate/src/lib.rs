//! Budget-driven forecasts for adforecast.
//!
//! This crate scales a fixed baseline campaign profile linearly by the ratio
//! of a requested daily budget to the baseline budget:
//!
//! - [`BaselineProfile`] - Reference constants and daily series, embedded as JSON
//! - [`ForecastEstimator`] - Scales series, estimates reach and performance metrics
//! - [`ForecastRequest`] - Budget and duration for one forecast
//! - [`ForecastReport`] - Everything computed for one request

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/adforecast/adforecast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod data;
mod estimator;

pub use data::BaselineProfile;
pub use estimator::{ForecastEstimator, ForecastReport, ForecastRequest};
