//! Wire formats for tapeline market data rows and bars.
//!
//! This crate reads and writes the `timestamp, open, high, low, close,
//! volume, trade_count, vwap` record layout:
//!
//! - [`CsvFormatter`] - CSV / TSV format
//! - [`JsonFormatter`] - JSON array or NDJSON format
//! - [`ParquetFormatter`] - Apache Parquet columnar format
//! - [`read_rows`] - Load rows from a CSV, NDJSON or JSON file
//! - [`load_partitions`] - Load a query's rows from month partitions
//! - [`MarketResponse`] - Response envelope for a [`MarketQuery`]
//!
//! [`MarketQuery`]: tapeline_types::MarketQuery

#![doc(issue_tracker_base_url = "https://github.com/tapeline-rs/tapeline/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;
mod partition;
mod reader;
mod response;

#[cfg(feature = "parquet")]
mod parquet;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
pub use partition::{load_partitions, partition_path};
pub use reader::{read_csv_rows, read_json_rows, read_ndjson_rows, read_rows};
pub use response::MarketResponse;

#[cfg(feature = "parquet")]
pub use crate::parquet::ParquetFormatter;
