//! CLI command implementations.

pub(crate) mod forecast;
pub(crate) mod metrics;
pub(crate) mod plan;
pub(crate) mod reach;
pub(crate) mod state;
pub(crate) mod tiers;
