//! Aggregated OHLCV bar.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tapeline_types::{MarketRow, Timestamped};

/// OHLCV bar for one time bucket.
///
/// The bucket key is `bar`. On the wire it is written as `timestamp` so bars
/// and raw rows share one record layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Bucket start (UTC). Calendar buckets start at midnight.
    #[serde(rename = "timestamp", alias = "bar")]
    pub bar: DateTime<Utc>,
    /// Open of the chronologically first row.
    pub open: f64,
    /// Highest high in the bucket.
    pub high: f64,
    /// Lowest low in the bucket.
    pub low: f64,
    /// Close of the chronologically last row.
    pub close: f64,
    /// Summed volume.
    pub volume: f64,
    /// Summed trade count.
    pub trade_count: u64,
    /// Volume-weighted average price.
    pub vwap: f64,
}

impl Bar {
    /// Creates a new bar.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        bar: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        trade_count: u64,
        vwap: f64,
    ) -> Self {
        Self {
            bar,
            open,
            high,
            low,
            close,
            volume,
            trade_count,
            vwap,
        }
    }

    /// Returns the bucket key. Alias of [`Bar::bar`] for row-shaped consumers.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.bar
    }

    /// Converts the bar into a wire row with `timestamp = bar`.
    #[must_use]
    pub const fn to_row(&self) -> MarketRow {
        MarketRow::new(
            self.bar,
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
            self.trade_count,
            self.vwap,
        )
    }
}

impl From<MarketRow> for Bar {
    /// Re-keys a row as a bar without aggregating it.
    fn from(row: MarketRow) -> Self {
        Self::new(
            row.timestamp,
            row.open,
            row.high,
            row.low,
            row.close,
            row.volume,
            row.trade_count,
            row.vwap,
        )
    }
}

impl Timestamped for Bar {
    fn timestamp(&self) -> DateTime<Utc> {
        self.bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_row() -> MarketRow {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        MarketRow::new(timestamp, 1.1000, 1.1050, 1.0980, 1.1020, 1000.0, 500, 1.1011)
    }

    #[test]
    fn test_from_row_keeps_fields() {
        let row = create_test_row();
        let bar = Bar::from(row);
        assert_eq!(bar.bar, row.timestamp);
        assert_eq!(bar.timestamp(), row.timestamp);
        assert_eq!(bar.to_row(), row);
    }

    #[test]
    fn test_serializes_bucket_as_timestamp() {
        let bar = Bar::from(create_test_row());
        let value = serde_json::to_value(bar).unwrap();
        assert_eq!(value["timestamp"], "2024-01-01T12:00:00Z");
        assert!(value.get("bar").is_none());
    }

    #[test]
    fn test_deserializes_bar_alias() {
        let json = r#"{"bar":"2024-01-01T12:00:00Z","open":1.0,"high":2.0,"low":0.5,
            "close":1.5,"volume":10.0,"trade_count":4,"vwap":1.2}"#;
        let bar: Bar = serde_json::from_str(json).unwrap();
        assert_eq!(bar.trade_count, 4);
        assert_eq!(bar.bar, Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap());
    }
}
