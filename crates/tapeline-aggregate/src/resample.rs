//! Batch resampling of row sequences.

use tapeline_types::{MarketQuery, MarketRow, Result, Timeframe};
use tracing::debug;

use crate::Bar;

/// Resamples rows into one bar per bucket, sorted ascending by bucket key.
///
/// Rows are stable-sorted by timestamp first, so `open` and `close` always
/// come from the chronologically first and last row of a bucket whatever
/// order the storage layer returned them in. `1m` only re-keys and sorts.
///
/// An empty input yields an empty output.
#[must_use]
pub fn resample(rows: &[MarketRow], timeframe: Timeframe) -> Vec<Bar> {
    let mut sorted = rows.to_vec();
    sorted.sort_by_key(|row| row.timestamp);

    let bars = if timeframe.is_passthrough() {
        sorted.into_iter().map(Bar::from).collect()
    } else {
        aggregate_sorted(&sorted, timeframe)
    };

    debug!(
        timeframe = %timeframe,
        rows = rows.len(),
        bars = bars.len(),
        "resampled rows"
    );
    bars
}

/// Resamples rows with a timeframe given as a string such as `"15m"`.
///
/// # Errors
///
/// Returns [`TapelineError::InvalidTimeframe`] for an unrecognized timeframe.
///
/// [`TapelineError::InvalidTimeframe`]: tapeline_types::TapelineError::InvalidTimeframe
pub fn resample_str(rows: &[MarketRow], timeframe: &str) -> Result<Vec<Bar>> {
    let timeframe = timeframe.parse::<Timeframe>()?;
    Ok(resample(rows, timeframe))
}

/// Applies a query to rows loaded from storage.
///
/// Keeps rows inside the query window, sorts them ascending, keeps the newest
/// `limit` of them and resamples them in bars mode. In ticks mode every row is
/// returned as a bar keyed by its own timestamp.
///
/// # Errors
///
/// Returns [`TapelineError::MissingBarSize`] in bars mode without a bar size.
///
/// [`TapelineError::MissingBarSize`]: tapeline_types::TapelineError::MissingBarSize
pub fn select_rows(rows: &[MarketRow], query: &MarketQuery) -> Result<Vec<Bar>> {
    let timeframe = query.resample_timeframe()?;

    let mut selected: Vec<MarketRow> = rows
        .iter()
        .filter(|row| query.window.contains(row.timestamp))
        .copied()
        .collect();
    selected.sort_by_key(|row| row.timestamp);
    let excess = selected.len().saturating_sub(query.limit);
    selected.drain(..excess);

    debug!(
        symbol = %query.symbol,
        window = %query.window,
        loaded = rows.len(),
        selected = selected.len(),
        "selected rows"
    );

    Ok(match timeframe {
        Some(tf) => resample(&selected, tf),
        None => selected.into_iter().map(Bar::from).collect(),
    })
}

#[cfg(not(feature = "parallel"))]
fn aggregate_sorted(sorted: &[MarketRow], timeframe: Timeframe) -> Vec<Bar> {
    let mut aggregator = crate::BarAggregator::new(timeframe);
    let mut bars: Vec<Bar> = sorted.iter().filter_map(|row| aggregator.push(row)).collect();
    bars.extend(aggregator.finish());
    bars
}

/// Aggregates buckets on the rayon pool. Buckets are contiguous runs of the
/// sorted input, so each one keeps its rows in timestamp order.
#[cfg(feature = "parallel")]
fn aggregate_sorted(sorted: &[MarketRow], timeframe: Timeframe) -> Vec<Bar> {
    use crate::aggregator::BarBuilder;
    use rayon::prelude::*;

    let buckets: Vec<&[MarketRow]> = sorted
        .chunk_by(|a, b| {
            crate::bucket_start(a.timestamp, timeframe) == crate::bucket_start(b.timestamp, timeframe)
        })
        .collect();

    buckets
        .into_par_iter()
        .filter_map(|bucket| {
            let (first, rest) = bucket.split_first()?;
            let key = crate::bucket_start(first.timestamp, timeframe);
            let mut builder = BarBuilder::new(key, first);
            for row in rest {
                builder.update(row);
            }
            Some(builder.finish())
        })
        .collect()
}
