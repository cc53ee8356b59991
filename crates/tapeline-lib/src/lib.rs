//! OHLCV bar resampling and paced replay of market data rows.
//!
//! This is a facade crate that re-exports functionality from the tapeline
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use tapeline_lib::prelude::*;
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let rows = read_rows(std::path::Path::new("ticks.csv"))?;
//!     let bars = resample_str(&rows, "5m")?;
//!
//!     let mut replay = paced_replay(bars, 10.0)?;
//!     while let Some(bar) = replay.next().await {
//!         println!("{} close={}", bar.bar, bar.close);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![doc(issue_tracker_base_url = "https://github.com/tapeline-rs/tapeline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use tapeline_types::*;

// Re-export resampling
#[cfg(feature = "aggregate")]
pub use tapeline_aggregate::{Bar, BarAggregator, bucket_start, resample, resample_str, select_rows};

// Re-export replay
#[cfg(feature = "replay")]
pub use tapeline_replay::{Replay, ReplayConfig, ReplayHandle, paced_replay, pacing_delay};

// Re-export formats
#[cfg(feature = "format")]
pub use tapeline_format::{
    CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, MarketResponse, OutputFormat,
    load_partitions, partition_path, read_csv_rows, read_json_rows, read_ndjson_rows, read_rows,
};

#[cfg(all(feature = "format", feature = "parquet"))]
pub use tapeline_format::ParquetFormatter;

/// Prelude module for convenient imports.
///
/// ```
/// use tapeline_lib::prelude::*;
/// ```
pub mod prelude {
    pub use tapeline_types::{
        MarketQuery, MarketRow, Mode, Result, TapelineError, TimeWindow, Timeframe, Timestamped,
    };

    #[cfg(feature = "aggregate")]
    pub use tapeline_aggregate::{Bar, BarAggregator, resample, resample_str, select_rows};

    #[cfg(feature = "replay")]
    pub use tapeline_replay::{Replay, ReplayConfig, ReplayHandle, paced_replay};

    #[cfg(feature = "format")]
    pub use tapeline_format::{
        CsvFormatter, Formatter, JsonFormatter, MarketResponse, OutputFormat, read_rows,
    };

    #[cfg(all(feature = "format", feature = "parquet"))]
    pub use tapeline_format::ParquetFormatter;
}
