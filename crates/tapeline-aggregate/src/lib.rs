//! OHLCV bar resampling for tapeline.
//!
//! This crate turns tick rows (or finer bars) into coarser OHLCV bars:
//!
//! - [`Bar`] - Aggregated bar keyed by its bucket start
//! - [`bucket_start`] - Bucket key of a timestamp for a timeframe
//! - [`resample`] / [`resample_str`] - Batch resampling of a row sequence
//! - [`BarAggregator`] - Streaming aggregator for ascending feeds
//! - [`select_rows`] - Window, limit and resample rows for a [`MarketQuery`]
//!
//! [`MarketQuery`]: tapeline_types::MarketQuery

#![doc(issue_tracker_base_url = "https://github.com/tapeline-rs/tapeline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod bar;
mod bucket;
mod resample;

pub use aggregator::BarAggregator;
pub use bar::Bar;
pub use bucket::bucket_start;
pub use resample::{resample, resample_str, select_rows};
