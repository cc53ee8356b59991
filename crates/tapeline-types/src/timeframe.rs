//! Resampling timeframe definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Resampling bucket size.
///
/// Intraday timeframes truncate on epoch-aligned boundaries; daily, weekly
/// and monthly timeframes bucket on the UTC calendar (weeks start Monday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Timeframe {
    /// 1-minute bars. Input is already minute bars, so rows pass through.
    #[serde(rename = "1m")]
    Minute1,
    /// 5-minute bars.
    #[serde(rename = "5m")]
    Minute5,
    /// 15-minute bars.
    #[serde(rename = "15m")]
    Minute15,
    /// 1-hour bars.
    #[serde(rename = "1h")]
    Hour1,
    /// Daily bars (UTC calendar date).
    #[serde(rename = "1d")]
    Day1,
    /// Weekly bars starting Monday 00:00 UTC.
    #[serde(rename = "1w")]
    Week1,
    /// Monthly bars starting on the first day of the month.
    #[serde(rename = "1mo")]
    Month1,
}

impl Timeframe {
    /// Returns the epoch-aligned bucket width in seconds for intraday
    /// timeframes, or None for calendar timeframes.
    #[must_use]
    pub const fn intraday_seconds(&self) -> Option<i64> {
        match self {
            Self::Minute1 => Some(60),
            Self::Minute5 => Some(300),
            Self::Minute15 => Some(900),
            Self::Hour1 => Some(3600),
            Self::Day1 | Self::Week1 | Self::Month1 => None,
        }
    }

    /// Returns true if rows pass through without aggregation.
    #[must_use]
    pub const fn is_passthrough(&self) -> bool {
        matches!(self, Self::Minute1)
    }

    /// Returns true if buckets follow the UTC calendar.
    #[must_use]
    pub const fn is_calendar(&self) -> bool {
        matches!(self, Self::Day1 | Self::Week1 | Self::Month1)
    }

    /// Returns the timeframe as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "1m",
            Self::Minute5 => "5m",
            Self::Minute15 => "15m",
            Self::Hour1 => "1h",
            Self::Day1 => "1d",
            Self::Week1 => "1w",
            Self::Month1 => "1mo",
        }
    }

    /// Returns all available timeframes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Minute1,
            Self::Minute5,
            Self::Minute15,
            Self::Hour1,
            Self::Day1,
            Self::Week1,
            Self::Month1,
        ]
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Case-sensitive on purpose: "1M" is ambiguous between minute and month.
        match s.trim() {
            "1m" | "m1" | "minute" => Ok(Self::Minute1),
            "5m" | "m5" => Ok(Self::Minute5),
            "15m" | "m15" => Ok(Self::Minute15),
            "1h" | "h1" | "hour" => Ok(Self::Hour1),
            "1d" | "d1" | "day" | "daily" => Ok(Self::Day1),
            "1w" | "w1" | "week" | "weekly" => Ok(Self::Week1),
            "1mo" | "mo1" | "month" | "monthly" => Ok(Self::Month1),
            _ => Err(TimeframeParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid timeframe string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeframeParseError(String);

impl TimeframeParseError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TimeframeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid timeframe '{}', expected one of: 1m, 5m, 15m, 1h, 1d, 1w, 1mo",
            self.0
        )
    }
}

impl std::error::Error for TimeframeParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeframe_seconds() {
        assert_eq!(Timeframe::Minute5.intraday_seconds(), Some(300));
        assert_eq!(Timeframe::Hour1.intraday_seconds(), Some(3600));
        assert_eq!(Timeframe::Day1.intraday_seconds(), None);
        assert_eq!(Timeframe::Month1.intraday_seconds(), None);
    }

    #[test]
    fn test_timeframe_parse() {
        assert_eq!("1m".parse::<Timeframe>().unwrap(), Timeframe::Minute1);
        assert_eq!("15m".parse::<Timeframe>().unwrap(), Timeframe::Minute15);
        assert_eq!("1w".parse::<Timeframe>().unwrap(), Timeframe::Week1);
        assert_eq!("1mo".parse::<Timeframe>().unwrap(), Timeframe::Month1);
        assert!("1s".parse::<Timeframe>().is_err());
        assert!("4h".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for tf in Timeframe::all() {
            assert_eq!(tf.to_string().parse::<Timeframe>().unwrap(), *tf);
        }
    }

    #[test]
    fn test_parse_error_message() {
        let err = "2y".parse::<Timeframe>().unwrap_err();
        assert_eq!(err.input(), "2y");
        assert!(err.to_string().contains("1mo"));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Timeframe::Month1).unwrap();
        assert_eq!(json, "\"1mo\"");
        let tf: Timeframe = serde_json::from_str("\"15m\"").unwrap();
        assert_eq!(tf, Timeframe::Minute15);
    }
}
