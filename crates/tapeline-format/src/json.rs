//! JSON output format.

use serde::Serialize;
use std::io::Write;
use tapeline_aggregate::Bar;
use tapeline_types::MarketRow;

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets the output style.
    #[must_use]
    pub const fn with_style(mut self, style: JsonStyle) -> Self {
        self.style = style;
        self
    }

    /// Writes a single record as one NDJSON line.
    ///
    /// Used by streaming consumers that push records as they are produced.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_line<T: Serialize, W: Write>(record: &T, mut writer: W) -> Result<(), FormatError> {
        serde_json::to_writer(&mut writer, record)?;
        writeln!(writer)?;
        Ok(())
    }

    fn write_records<T: Serialize, W: Write>(&self, records: &[T], mut writer: W) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, records)?;
                } else {
                    serde_json::to_writer(&mut writer, records)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for record in records {
                    Self::write_line(record, &mut writer)?;
                }
            }
        }
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_rows<W: Write + Send>(&self, rows: &[MarketRow], writer: W) -> Result<(), FormatError> {
        self.write_records(rows, writer)
    }

    fn write_bars<W: Write + Send>(&self, bars: &[Bar], writer: W) -> Result<(), FormatError> {
        self.write_records(bars, writer)
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Cursor;

    fn create_test_row() -> MarketRow {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 15, 12, 30, 45).unwrap();
        MarketRow::new(timestamp, 10.0, 10.5, 9.8, 10.2, 100.0, 4, 10.1)
    }

    #[test]
    fn test_json_array() {
        let formatter = JsonFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter.write_rows(&[create_test_row()], &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with('['));
        assert!(result.contains("\"vwap\":10.1"));
        assert!(result.contains("\"trade_count\":4"));
    }

    #[test]
    fn test_ndjson_bars() {
        let formatter = JsonFormatter::ndjson();
        let bars = vec![Bar::from(create_test_row()), Bar::from(create_test_row())];
        let mut output = Cursor::new(Vec::new());

        formatter.write_bars(&bars, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("{\"timestamp\":\"2024-01-15T12:30:45Z\""));
    }

    #[test]
    fn test_pretty_json() {
        let formatter = JsonFormatter::new().with_pretty(true);
        let mut output = Cursor::new(Vec::new());

        formatter.write_rows(&[create_test_row()], &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains('\n'));
        assert!(result.contains("  "));
    }
}
