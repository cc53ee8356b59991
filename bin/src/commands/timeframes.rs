//! Timeframes command implementation.

use tapeline_lib::prelude::*;

/// List supported timeframes with their bucketing rule.
pub(crate) fn list_timeframes() {
    println!("{:<6} {:<12} {:<10}", "NAME", "KIND", "SECONDS");
    println!("{}", "-".repeat(30));

    for timeframe in Timeframe::all() {
        let kind = if timeframe.is_passthrough() {
            "passthrough"
        } else if timeframe.is_calendar() {
            "calendar"
        } else {
            "intraday"
        };
        let seconds = timeframe
            .intraday_seconds()
            .map_or_else(|| "-".to_string(), |s| s.to_string());
        println!("{:<6} {:<12} {:<10}", timeframe.as_str(), kind, seconds);
    }

    println!("\nTotal: {} timeframes", Timeframe::all().len());
}
