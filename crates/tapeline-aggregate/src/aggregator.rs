//! Streaming row-to-bar aggregation.

use chrono::{DateTime, Utc};
use tapeline_types::{MarketRow, Timeframe};

use crate::{Bar, bucket_start};

/// Streaming bar aggregator.
///
/// Rows must arrive in ascending timestamp order; a bar is emitted as soon
/// as a row from a later bucket shows up. For `1m` every row passes through
/// on its own.
#[derive(Debug)]
pub struct BarAggregator {
    timeframe: Timeframe,
    current_bar: Option<BarBuilder>,
}

impl BarAggregator {
    /// Creates a new aggregator for the given timeframe.
    #[must_use]
    pub const fn new(timeframe: Timeframe) -> Self {
        Self {
            timeframe,
            current_bar: None,
        }
    }

    /// Returns the timeframe being aggregated to.
    #[must_use]
    pub const fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    /// Processes a row, potentially emitting a completed bar.
    ///
    /// Returns `Some(bar)` when a bar is completed by this row,
    /// `None` otherwise.
    pub fn push(&mut self, row: &MarketRow) -> Option<Bar> {
        if self.timeframe.is_passthrough() {
            return Some(Bar::from(*row));
        }

        let key = bucket_start(row.timestamp, self.timeframe);

        match self.current_bar.take() {
            Some(mut builder) if builder.key == key => {
                builder.update(row);
                self.current_bar = Some(builder);
                None
            }
            Some(builder) => {
                self.current_bar = Some(BarBuilder::new(key, row));
                Some(builder.finish())
            }
            None => {
                self.current_bar = Some(BarBuilder::new(key, row));
                None
            }
        }
    }

    /// Finishes aggregation, returning any remaining partial bar.
    #[must_use]
    pub fn finish(self) -> Option<Bar> {
        self.current_bar.map(BarBuilder::finish)
    }
}

/// Accumulator for one bucket.
#[derive(Debug)]
pub(crate) struct BarBuilder {
    key: DateTime<Utc>,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
    trade_count: u64,
    notional: f64,
    vwap_sum: f64,
    rows: u32,
}

impl BarBuilder {
    /// Starts a bucket from its chronologically first row.
    pub(crate) fn new(key: DateTime<Utc>, row: &MarketRow) -> Self {
        Self {
            key,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
            trade_count: row.trade_count,
            notional: row.notional(),
            vwap_sum: row.vwap,
            rows: 1,
        }
    }

    /// Folds a later row of the same bucket in.
    pub(crate) fn update(&mut self, row: &MarketRow) {
        self.high = self.high.max(row.high);
        self.low = self.low.min(row.low);
        self.close = row.close;
        self.volume += row.volume;
        self.trade_count += row.trade_count;
        self.notional += row.notional();
        self.vwap_sum += row.vwap;
        self.rows += 1;
    }

    /// Finishes building and returns the bar.
    ///
    /// A bucket without volume has no weights, so its VWAP falls back to the
    /// arithmetic mean of the rows' VWAPs.
    pub(crate) fn finish(self) -> Bar {
        let vwap = if self.volume > 0.0 {
            self.notional / self.volume
        } else {
            self.vwap_sum / f64::from(self.rows)
        };

        Bar::new(
            self.key,
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
            self.trade_count,
            vwap,
        )
    }
}
