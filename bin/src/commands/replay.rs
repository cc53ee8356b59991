//! Replay command implementation.
//!
//! This module replays a row file as NDJSON on stdout, one line per row,
//! paced by the gaps between row timestamps. Ctrl-C cancels the replay.

use crate::display::{check_input, parse_time};
use anyhow::{Context, Result};
use futures::StreamExt;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;
use tapeline_lib::prelude::*;
use tracing::info;

/// Replay the rows in `input` at `speed` times real time.
pub(crate) async fn replay(
    input: &Path,
    timeframe_str: Option<&str>,
    speed: f64,
    start_str: Option<&str>,
    end_str: Option<&str>,
    max_delay_ms: Option<u64>,
) -> Result<()> {
    check_input(input)?;

    let start = start_str.map(parse_time).transpose()?;
    let end = end_str.map(parse_time).transpose()?;

    let rows: Vec<MarketRow> = read_rows(input)
        .with_context(|| format!("Failed to read {}", input.display()))?
        .into_iter()
        .filter(|row| start.is_none_or(|s| row.timestamp >= s))
        .filter(|row| end.is_none_or(|e| row.timestamp <= e))
        .collect();

    // Without a timeframe rows replay as-is, in timestamp order
    let bars = match timeframe_str {
        Some(tf) => resample_str(&rows, tf)?,
        None => resample(&rows, Timeframe::Minute1),
    };

    let mut config = ReplayConfig::new(speed)?;
    if let Some(ms) = max_delay_ms {
        config = config.with_max_delay(Duration::from_millis(ms));
    }

    let mut replay = Replay::new(bars, config)?;
    let handle = replay.handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("interrupted, cancelling replay");
            handle.cancel();
        }
    });

    let mut stdout = io::stdout();
    let mut emitted = 0usize;
    while let Some(bar) = replay.next().await {
        JsonFormatter::write_line(&bar, &mut stdout)?;
        stdout.flush()?;
        emitted += 1;
    }

    info!(emitted, "replay finished");
    Ok(())
}
