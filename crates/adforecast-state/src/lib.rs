//! Campaign settings and persistence for adforecast.
//!
//! This crate holds the campaign the user is configuring and the storage
//! it is persisted through:
//!
//! - [`CampaignState`] - Explicit campaign configuration passed to callers
//! - [`StateIssue`] - Policy violations found by [`CampaignState::validate`]
//! - [`StateStore`] - Load/save/reset interface injected into callers
//! - [`FileStore`] - JSON file in the platform data directory
//! - [`MemoryStore`] - In-process store

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/adforecast/adforecast/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod campaign;
mod store;

pub use campaign::{
    CampaignState, DEFAULT_ASSETS_COUNT, DEFAULT_BUDGET, DEFAULT_CTA, DEFAULT_PROJECT_NAME,
    StateIssue,
};
pub use store::{FileStore, MemoryStore, Result, StateError, StateStore};
