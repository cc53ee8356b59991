//! Paced real-time replay of market data rows for tapeline.
//!
//! This crate replays a time-ordered row sequence as an async stream whose
//! emissions are spaced by the gaps between the rows' timestamps:
//!
//! - [`ReplayConfig`] - Speed multiplier and optional gap cap
//! - [`paced_replay`] - Builds a [`Replay`] stream from rows and a speed
//! - [`ReplayHandle`] - Per-stream cancellation
//! - [`pacing_delay`] - The wait inserted between two timestamps

#![doc(issue_tracker_base_url = "https://github.com/tapeline-rs/tapeline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod handle;
mod stream;

pub use config::ReplayConfig;
pub use handle::ReplayHandle;
pub use stream::{Replay, paced_replay, pacing_delay};
