//! Core types for the tapeline market-data resampler.
//!
//! This crate provides the fundamental data structures used throughout tapeline:
//!
//! - [`MarketRow`] - A tick or bar row with OHLCV, trade count and VWAP
//! - [`Timestamped`] - Anything that carries a UTC timestamp
//! - [`Timeframe`] - Resampling bucket size
//! - [`TimeWindow`] - Inclusive UTC time window for row selection
//! - [`MarketQuery`] - Symbol, window, mode and bar size of a data request

#![doc(issue_tracker_base_url = "https://github.com/tapeline-rs/tapeline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod query;
mod row;
mod timeframe;
mod window;

pub use error::{Result, TapelineError, WindowError};
pub use query::{DEFAULT_LIMIT, MarketQuery, Mode, ModeParseError};
pub use row::{MarketRow, Timestamped};
pub use timeframe::{Timeframe, TimeframeParseError};
pub use window::{MonthIterator, TimeWindow};
