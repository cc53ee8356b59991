//! Response envelope for market data queries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tapeline_aggregate::Bar;
use tapeline_types::{MarketQuery, MarketRow, Mode, Timeframe};

/// Rows answering a [`MarketQuery`], with the query echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketResponse {
    /// Instrument symbol.
    pub symbol: String,
    /// Query mode.
    pub mode: Mode,
    /// Bar size used for resampling, if any.
    pub bar_size: Option<Timeframe>,
    /// Window start.
    pub start_time: DateTime<Utc>,
    /// Window end.
    pub end_time: DateTime<Utc>,
    /// Rows in wire layout; bars carry their bucket key as `timestamp`.
    pub rows: Vec<MarketRow>,
    /// Number of rows.
    pub count: usize,
}

impl MarketResponse {
    /// Builds the response for `query` from selected bars.
    #[must_use]
    pub fn new(query: &MarketQuery, bars: &[Bar]) -> Self {
        let rows: Vec<MarketRow> = bars.iter().map(Bar::to_row).collect();
        Self {
            symbol: query.symbol.clone(),
            mode: query.mode,
            bar_size: query.bar_size,
            start_time: query.window.start,
            end_time: query.window.end,
            count: rows.len(),
            rows,
        }
    }
}
