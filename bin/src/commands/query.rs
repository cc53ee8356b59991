//! Query command implementation.
//!
//! This module loads a symbol's month partitions for a time window, applies
//! the query and prints the JSON response envelope.

use crate::display::{Format, parse_time};
use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;
use tapeline_lib::prelude::*;
use tapeline_lib::load_partitions;

/// Run a market query against partitioned storage under `root`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn query(
    root: &Path,
    symbol: &str,
    start_str: &str,
    end_str: &str,
    mode_str: &str,
    bar_size_str: Option<&str>,
    limit: usize,
    partition_format: Format,
    pretty: bool,
) -> Result<()> {
    let window = TimeWindow::new(parse_time(start_str)?, parse_time(end_str)?)?;
    let mode: Mode = mode_str.parse()?;

    let mut query = MarketQuery::new(symbol, window)
        .with_mode(mode)
        .with_limit(limit);
    if let Some(size) = bar_size_str {
        let size: Timeframe = size.parse()?;
        query = query.with_bar_size(size);
    }

    let rows = load_partitions(root, &query, partition_format.output_format())
        .with_context(|| format!("Failed to load partitions for {symbol}"))?;
    let bars = select_rows(&rows, &query)?;
    let response = MarketResponse::new(&query, &bars);

    let mut stdout = io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut stdout, &response)?;
    } else {
        serde_json::to_writer(&mut stdout, &response)?;
    }
    writeln!(stdout)?;

    Ok(())
}
