//! Market data request description.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{Result, TapelineError, Timeframe, TimeWindow};

/// Default cap on the number of rows a query loads.
pub const DEFAULT_LIMIT: usize = 100_000;

/// Whether a query returns raw rows or resampled bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Rows as stored.
    #[default]
    Ticks,
    /// Rows resampled to the query's bar size.
    Bars,
}

impl Mode {
    /// Returns the mode as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ticks => "ticks",
            Self::Bars => "bars",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ticks" | "tick" => Ok(Self::Ticks),
            "bars" | "bar" => Ok(Self::Bars),
            _ => Err(ModeParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid mode string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeParseError(String);

impl std::fmt::Display for ModeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid mode '{}', expected one of: ticks, bars", self.0)
    }
}

impl std::error::Error for ModeParseError {}

/// A request for one symbol's rows over a time window.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketQuery {
    /// Instrument symbol.
    pub symbol: String,
    /// Inclusive time window.
    pub window: TimeWindow,
    /// Raw rows or resampled bars.
    pub mode: Mode,
    /// Bar size, required in [`Mode::Bars`].
    pub bar_size: Option<Timeframe>,
    /// Maximum number of rows loaded before resampling.
    pub limit: usize,
}

impl MarketQuery {
    /// Creates a tick query with the default limit.
    #[must_use]
    pub fn new(symbol: impl Into<String>, window: TimeWindow) -> Self {
        Self {
            symbol: symbol.into(),
            window,
            mode: Mode::Ticks,
            bar_size: None,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Sets the mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the bar size.
    #[must_use]
    pub const fn with_bar_size(mut self, bar_size: Timeframe) -> Self {
        self.bar_size = Some(bar_size);
        self
    }

    /// Sets the row limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Returns the timeframe to resample to, or None for tick mode.
    ///
    /// # Errors
    ///
    /// Returns [`TapelineError::MissingBarSize`] in bars mode without a bar size.
    pub fn resample_timeframe(&self) -> Result<Option<Timeframe>> {
        match (self.mode, self.bar_size) {
            (Mode::Ticks, _) => Ok(None),
            (Mode::Bars, Some(tf)) => Ok(Some(tf)),
            (Mode::Bars, None) => Err(TapelineError::MissingBarSize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn window() -> TimeWindow {
        TimeWindow::new(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!("bars".parse::<Mode>().unwrap(), Mode::Bars);
        assert_eq!("TICKS".parse::<Mode>().unwrap(), Mode::Ticks);
        assert!("candles".parse::<Mode>().is_err());
    }

    #[test]
    fn test_query_defaults() {
        let query = MarketQuery::new("AAPL", window());
        assert_eq!(query.mode, Mode::Ticks);
        assert_eq!(query.limit, DEFAULT_LIMIT);
        assert_eq!(query.resample_timeframe().unwrap(), None);
    }

    #[test]
    fn test_bars_require_bar_size() {
        let query = MarketQuery::new("AAPL", window()).with_mode(Mode::Bars);
        assert_eq!(
            query.resample_timeframe().unwrap_err(),
            TapelineError::MissingBarSize
        );

        let query = query.with_bar_size(Timeframe::Hour1);
        assert_eq!(query.resample_timeframe().unwrap(), Some(Timeframe::Hour1));
    }
}
