//! Benchmark fixtures for tapeline.
//!
//! Provides deterministic synthetic tick rows so benchmark runs are
//! comparable across machines and commits.

#![forbid(unsafe_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use tapeline_lib::MarketRow;

/// Shape of a synthetic tick series.
#[derive(Debug, Clone)]
pub struct SeriesConfig {
    /// First tick timestamp.
    pub start: DateTime<Utc>,
    /// Number of ticks.
    pub rows: usize,
    /// Spacing between consecutive ticks in milliseconds.
    pub step_ms: i64,
    /// Seed for the price walk.
    pub seed: u64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            start: Utc
                .with_ymd_and_hms(2024, 1, 2, 9, 30, 0)
                .single()
                .unwrap_or(DateTime::UNIX_EPOCH),
            rows: 100_000,
            step_ms: 250,
            seed: 0x5eed,
        }
    }
}

impl SeriesConfig {
    /// Sets the number of ticks.
    #[must_use]
    pub const fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the tick spacing in milliseconds.
    #[must_use]
    pub const fn with_step_ms(mut self, step_ms: i64) -> Self {
        self.step_ms = step_ms;
        self
    }
}

/// Generates an ascending tick series with a bounded random-walk price.
#[must_use]
pub fn synthetic_ticks(config: &SeriesConfig) -> Vec<MarketRow> {
    let mut state = config.seed;
    let mut price = 100.0_f64;

    (0..config.rows)
        .map(|i| {
            // Numerical Recipes LCG
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223) & 0xffff_ffff;
            let unit = (state as f64) / f64::from(u32::MAX);
            price = (price + (unit - 0.5) * 0.1).max(1.0);
            let volume = 1.0 + (unit * 500.0).floor();

            let offset = Duration::milliseconds(config.step_ms.saturating_mul(i as i64));
            MarketRow::trade(config.start + offset, price, volume)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthetic_ticks_are_ascending_and_deterministic() {
        let config = SeriesConfig::default().with_rows(1_000).with_step_ms(1_000);
        let first = synthetic_ticks(&config);
        let second = synthetic_ticks(&config);

        assert_eq!(first, second);
        assert_eq!(first.len(), 1_000);
        assert!(first.windows(2).all(|w| w[0].timestamp < w[1].timestamp));
        assert!(first.iter().all(|r| r.volume >= 1.0 && r.low > 0.0));
    }
}
