//! Bucket keys for each timeframe.

use chrono::{DateTime, Datelike, Days, NaiveTime, TimeDelta, Utc};
use tapeline_types::Timeframe;

/// Returns the bucket key of `timestamp` for `timeframe`.
///
/// - `1m` keeps the timestamp as is (input rows are already minute bars).
/// - `5m`, `15m`, `1h` truncate down to a multiple of the width counted
///   from the Unix epoch.
/// - `1d` is the UTC calendar date at 00:00.
/// - `1w` is Monday 00:00 UTC of the ISO week.
/// - `1mo` is the first day of the month at 00:00 UTC.
#[must_use]
pub fn bucket_start(timestamp: DateTime<Utc>, timeframe: Timeframe) -> DateTime<Utc> {
    match timeframe {
        Timeframe::Minute1 => timestamp,
        Timeframe::Minute5 | Timeframe::Minute15 | Timeframe::Hour1 => timeframe
            .intraday_seconds()
            .map_or(timestamp, |seconds| truncate_to_epoch_multiple(timestamp, seconds)),
        Timeframe::Day1 => truncate_to_day(timestamp),
        Timeframe::Week1 => truncate_to_week(timestamp),
        Timeframe::Month1 => truncate_to_month(timestamp),
    }
}

/// Truncates a timestamp to a multiple of `seconds` since the epoch.
fn truncate_to_epoch_multiple(dt: DateTime<Utc>, seconds: i64) -> DateTime<Utc> {
    let offset = dt.timestamp().rem_euclid(seconds);
    let nanos = i64::from(dt.timestamp_subsec_nanos());
    dt - TimeDelta::seconds(offset) - TimeDelta::nanoseconds(nanos)
}

/// Truncates a timestamp to the start of the day.
fn truncate_to_day(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Truncates a timestamp to Monday 00:00 of its week.
fn truncate_to_week(dt: DateTime<Utc>) -> DateTime<Utc> {
    let back = u64::from(dt.weekday().num_days_from_monday());
    (dt.date_naive() - Days::new(back))
        .and_time(NaiveTime::MIN)
        .and_utc()
}

/// Truncates a timestamp to the first day of its month.
fn truncate_to_month(dt: DateTime<Utc>) -> DateTime<Utc> {
    let back = u64::from(dt.day0());
    (dt.date_naive() - Days::new(back))
        .and_time(NaiveTime::MIN)
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike, Weekday};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_truncate_functions() {
        let dt = at(2024, 1, 17, 14, 37, 45);

        assert_eq!(bucket_start(dt, Timeframe::Minute1), dt);
        assert_eq!(bucket_start(dt, Timeframe::Minute5).minute(), 35);
        assert_eq!(bucket_start(dt, Timeframe::Minute15).minute(), 30);
        assert_eq!(bucket_start(dt, Timeframe::Hour1), at(2024, 1, 17, 14, 0, 0));
        assert_eq!(bucket_start(dt, Timeframe::Day1), at(2024, 1, 17, 0, 0, 0));
        assert_eq!(bucket_start(dt, Timeframe::Month1), at(2024, 1, 1, 0, 0, 0));
    }

    #[test]
    fn test_intraday_keys_are_multiples_of_width() {
        let dt = at(2024, 3, 5, 23, 59, 59) + TimeDelta::milliseconds(500);
        for tf in [Timeframe::Minute5, Timeframe::Minute15, Timeframe::Hour1] {
            let width = tf.intraday_seconds().unwrap();
            let key = bucket_start(dt, tf);
            assert_eq!(key.timestamp().rem_euclid(width), 0, "{tf}");
            assert!(dt - key < TimeDelta::seconds(width), "{tf}");
        }
    }

    #[test]
    fn test_subsecond_precision_is_dropped() {
        let dt = at(2024, 1, 17, 9, 34, 59) + TimeDelta::milliseconds(999);
        assert_eq!(bucket_start(dt, Timeframe::Minute5), at(2024, 1, 17, 9, 30, 0));
    }

    #[test]
    fn test_week_starts_monday() {
        // 2024-01-17 is a Wednesday, 2024-01-21 a Sunday.
        let wednesday = at(2024, 1, 17, 14, 37, 45);
        let sunday = at(2024, 1, 21, 23, 59, 59);
        let monday = at(2024, 1, 15, 0, 0, 0);

        assert_eq!(bucket_start(wednesday, Timeframe::Week1), monday);
        assert_eq!(bucket_start(sunday, Timeframe::Week1), monday);
        assert_eq!(bucket_start(monday, Timeframe::Week1), monday);
        assert_eq!(monday.weekday(), Weekday::Mon);
    }

    #[test]
    fn test_week_crosses_month_boundary() {
        // Friday 2024-03-01 belongs to the week of Monday 2024-02-26.
        let friday = at(2024, 3, 1, 8, 0, 0);
        assert_eq!(bucket_start(friday, Timeframe::Week1), at(2024, 2, 26, 0, 0, 0));
    }

    #[test]
    fn test_pre_epoch_truncation_rounds_down() {
        let dt = at(1969, 12, 31, 23, 58, 30);
        assert_eq!(bucket_start(dt, Timeframe::Minute5), at(1969, 12, 31, 23, 55, 0));
    }

    #[test]
    fn test_month_of_leap_day() {
        let dt = at(2024, 2, 29, 23, 59, 59);
        assert_eq!(bucket_start(dt, Timeframe::Month1), at(2024, 2, 1, 0, 0, 0));
    }
}
