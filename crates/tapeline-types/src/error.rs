//! Error types for tapeline.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::{ModeParseError, TimeframeParseError};

/// Result type alias for tapeline operations.
pub type Result<T> = std::result::Result<T, TapelineError>;

/// Errors raised by resampling and replay.
///
/// Every variant is a caller-input problem; none of them is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TapelineError {
    /// Unrecognized timeframe string.
    #[error(transparent)]
    InvalidTimeframe(#[from] TimeframeParseError),

    /// Unrecognized query mode string.
    #[error(transparent)]
    InvalidMode(#[from] ModeParseError),

    /// Replay speed that is zero, negative or NaN.
    #[error("Invalid replay speed {0}, expected a value greater than zero")]
    InvalidSpeed(f64),

    /// Bars were requested without a bar size.
    #[error("bar_size is required in bars mode")]
    MissingBarSize,

    /// Invalid time window.
    #[error(transparent)]
    Window(#[from] WindowError),
}

/// Error for invalid time windows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// Start instant is after end instant.
    #[error("Invalid time window: {start} > {end}")]
    InvalidWindow {
        /// The start instant.
        start: DateTime<Utc>,
        /// The end instant.
        end: DateTime<Utc>,
    },
}
