//! Tick and bar row representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Something positioned in time.
///
/// Replay paces emissions by the gap between consecutive timestamps, so any
/// row type that can be replayed implements this.
pub trait Timestamped {
    /// Returns the UTC instant of this item.
    fn timestamp(&self) -> DateTime<Utc>;
}

/// A single market data row.
///
/// A row is either a raw trade-derived sample or an already-aggregated bar
/// coming from storage. The serialized field names are the wire format:
/// `timestamp, open, high, low, close, volume, trade_count, vwap`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketRow {
    /// Timestamp of the row (UTC).
    pub timestamp: DateTime<Utc>,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume (non-negative).
    pub volume: f64,
    /// Number of trades.
    pub trade_count: u64,
    /// Volume-weighted average price.
    pub vwap: f64,
}

impl MarketRow {
    /// Creates a new row.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        trade_count: u64,
        vwap: f64,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
            trade_count,
            vwap,
        }
    }

    /// Creates a single-trade row where every price equals `price`.
    #[must_use]
    pub const fn trade(timestamp: DateTime<Utc>, price: f64, volume: f64) -> Self {
        Self::new(timestamp, price, price, price, price, volume, 1, price)
    }

    /// Returns the traded notional (`vwap * volume`).
    #[must_use]
    pub fn notional(&self) -> f64 {
        self.vwap * self.volume
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}

impl Timestamped for MarketRow {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
