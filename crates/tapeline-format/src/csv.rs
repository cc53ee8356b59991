//! CSV output format.

use chrono::{DateTime, SecondsFormat, Utc};
use std::io::Write;
use tapeline_aggregate::Bar;
use tapeline_types::MarketRow;

use crate::{FormatError, Formatter};

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Column header shared by rows and bars.
    pub const COLUMNS: [&'static str; 8] = [
        "timestamp",
        "open",
        "high",
        "low",
        "close",
        "volume",
        "trade_count",
        "vwap",
    ];

    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self {
            delimiter: '\t',
            include_header: true,
        }
    }

    fn write_header<W: Write>(&self, writer: &mut W) -> Result<(), FormatError> {
        if self.include_header {
            let header = Self::COLUMNS.join(&self.delimiter.to_string());
            writeln!(writer, "{header}")?;
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn write_record<W: Write>(
        &self,
        writer: &mut W,
        timestamp: DateTime<Utc>,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        trade_count: u64,
        vwap: f64,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;
        writeln!(
            writer,
            "{}{d}{open}{d}{high}{d}{low}{d}{close}{d}{volume}{d}{trade_count}{d}{vwap}",
            timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        )?;
        Ok(())
    }
}

impl Formatter for CsvFormatter {
    fn write_rows<W: Write + Send>(
        &self,
        rows: &[MarketRow],
        mut writer: W,
    ) -> Result<(), FormatError> {
        self.write_header(&mut writer)?;
        for row in rows {
            self.write_record(
                &mut writer,
                row.timestamp,
                row.open,
                row.high,
                row.low,
                row.close,
                row.volume,
                row.trade_count,
                row.vwap,
            )?;
        }
        Ok(())
    }

    fn write_bars<W: Write + Send>(&self, bars: &[Bar], mut writer: W) -> Result<(), FormatError> {
        self.write_header(&mut writer)?;
        for bar in bars {
            self.write_record(
                &mut writer,
                bar.bar,
                bar.open,
                bar.high,
                bar.low,
                bar.close,
                bar.volume,
                bar.trade_count,
                bar.vwap,
            )?;
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Cursor;

    fn create_test_row() -> MarketRow {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 45).unwrap();
        MarketRow::new(timestamp, 10.0, 10.5, 9.8, 10.2, 100.0, 4, 10.1)
    }

    #[test]
    fn test_csv_rows() {
        let formatter = CsvFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter.write_rows(&[create_test_row()], &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let mut lines = result.lines();
        assert_eq!(
            lines.next().unwrap(),
            "timestamp,open,high,low,close,volume,trade_count,vwap"
        );
        assert_eq!(
            lines.next().unwrap(),
            "2024-01-15T12:30:45Z,10,10.5,9.8,10.2,100,4,10.1"
        );
    }

    #[test]
    fn test_csv_bars_use_bucket_key() {
        let formatter = CsvFormatter::new().with_header(false);
        let bar = Bar::from(create_test_row());
        let mut output = Cursor::new(Vec::new());

        formatter.write_bars(&[bar], &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with("2024-01-15T12:30:45Z,"));
        assert!(!result.contains("timestamp,open"));
    }

    #[test]
    fn test_csv_keeps_subsecond_precision() {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 0).unwrap()
            + chrono::TimeDelta::microseconds(100);
        let row = MarketRow::trade(timestamp, 10.0, 1.0);
        let mut output = Cursor::new(Vec::new());

        CsvFormatter::new().with_header(false).write_rows(&[row], &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with("2024-01-15T12:30:00.000100Z,"));
    }

    #[test]
    fn test_tsv() {
        let formatter = CsvFormatter::tsv();
        let mut output = Cursor::new(Vec::new());

        formatter.write_rows(&[create_test_row()], &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains("timestamp\topen\thigh"));
        assert_eq!(formatter.extension(), "tsv");
    }
}
