//! Replay configuration.

use std::time::Duration;
use tapeline_types::{Result, TapelineError};

/// Configuration for a paced replay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplayConfig {
    /// Replay speed relative to real time (`2.0` plays twice as fast).
    pub speed: f64,
    /// Upper bound on any single wait, e.g. to skip overnight gaps.
    /// `None` replays every gap in full.
    pub max_delay: Option<Duration>,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            max_delay: None,
        }
    }
}

impl ReplayConfig {
    /// Creates a configuration with the given speed and no gap cap.
    ///
    /// # Errors
    ///
    /// Returns [`TapelineError::InvalidSpeed`] if `speed` is not greater than zero.
    pub fn new(speed: f64) -> Result<Self> {
        Self::default().with_speed(speed).validated()
    }

    /// Sets the speed multiplier.
    #[must_use]
    pub const fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Sets the cap on a single wait.
    #[must_use]
    pub const fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = Some(max_delay);
        self
    }

    /// Checks the speed, returning the configuration unchanged when valid.
    ///
    /// Zero, negative and NaN speeds are rejected. Infinite speed is allowed
    /// and replays without waiting.
    ///
    /// # Errors
    ///
    /// Returns [`TapelineError::InvalidSpeed`] if `speed` is not greater than zero.
    pub fn validated(self) -> Result<Self> {
        // NaN fails this comparison as well.
        if self.speed > 0.0 {
            Ok(self)
        } else {
            Err(TapelineError::InvalidSpeed(self.speed))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_real_time() {
        let config = ReplayConfig::default();
        assert!((config.speed - 1.0).abs() < f64::EPSILON);
        assert!(config.max_delay.is_none());
        assert!(config.validated().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_speed() {
        for speed in [0.0, -0.0, -1.5, f64::NAN, f64::NEG_INFINITY] {
            let err = ReplayConfig::new(speed).unwrap_err();
            assert!(matches!(err, TapelineError::InvalidSpeed(_)), "{speed}");
        }
    }

    #[test]
    fn test_accepts_fractional_and_infinite_speed() {
        assert!(ReplayConfig::new(0.25).is_ok());
        assert!(ReplayConfig::new(f64::INFINITY).is_ok());
    }
}
