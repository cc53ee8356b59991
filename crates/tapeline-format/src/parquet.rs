//! Apache Parquet output format.

use arrow::array::{Float64Array, TimestampMicrosecondArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::io::Write;
use std::sync::Arc;
use tapeline_aggregate::Bar;
use tapeline_types::MarketRow;

use crate::{FormatError, Formatter};

/// Parquet formatter.
///
/// Rows and bars share one schema; bars are written with their bucket key
/// in the `timestamp` column.
#[derive(Debug, Clone)]
pub struct ParquetFormatter {
    /// Row group size (number of rows per group).
    row_group_size: usize,
    /// Compression codec.
    compression: Compression,
}

impl Default for ParquetFormatter {
    fn default() -> Self {
        Self {
            row_group_size: 100_000,
            compression: Compression::SNAPPY,
        }
    }
}

impl ParquetFormatter {
    /// Creates a new Parquet formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the row group size.
    #[must_use]
    pub const fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Sets the compression codec.
    #[must_use]
    pub const fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    fn schema() -> Schema {
        Schema::new(vec![
            Field::new(
                "timestamp",
                DataType::Timestamp(TimeUnit::Microsecond, Some("UTC".into())),
                false,
            ),
            Field::new("open", DataType::Float64, false),
            Field::new("high", DataType::Float64, false),
            Field::new("low", DataType::Float64, false),
            Field::new("close", DataType::Float64, false),
            Field::new("volume", DataType::Float64, false),
            Field::new("trade_count", DataType::UInt64, false),
            Field::new("vwap", DataType::Float64, false),
        ])
    }

    fn to_batch(schema: &Arc<Schema>, rows: &[MarketRow]) -> Result<RecordBatch, FormatError> {
        let column =
            |f: fn(&MarketRow) -> f64| Float64Array::from_iter_values(rows.iter().map(f));
        let timestamps: Vec<_> = rows.iter().map(|r| r.timestamp.timestamp_micros()).collect();
        let trade_counts: Vec<_> = rows.iter().map(|r| r.trade_count).collect();

        RecordBatch::try_new(
            Arc::clone(schema),
            vec![
                Arc::new(TimestampMicrosecondArray::from(timestamps).with_timezone("UTC")),
                Arc::new(column(|r| r.open)),
                Arc::new(column(|r| r.high)),
                Arc::new(column(|r| r.low)),
                Arc::new(column(|r| r.close)),
                Arc::new(column(|r| r.volume)),
                Arc::new(UInt64Array::from(trade_counts)),
                Arc::new(column(|r| r.vwap)),
            ],
        )
        .map_err(|e| FormatError::Parquet(e.to_string()))
    }

    fn write_batches<W: Write + Send>(&self, rows: &[MarketRow], writer: W) -> Result<(), FormatError> {
        let schema = Arc::new(Self::schema());
        let props = WriterProperties::builder()
            .set_compression(self.compression)
            .set_max_row_group_size(self.row_group_size)
            .build();

        let mut arrow_writer = ArrowWriter::try_new(writer, Arc::clone(&schema), Some(props))
            .map_err(|e| FormatError::Parquet(e.to_string()))?;

        for chunk in rows.chunks(self.row_group_size.max(1)) {
            let batch = Self::to_batch(&schema, chunk)?;
            arrow_writer
                .write(&batch)
                .map_err(|e| FormatError::Parquet(e.to_string()))?;
        }

        arrow_writer
            .close()
            .map_err(|e| FormatError::Parquet(e.to_string()))?;

        Ok(())
    }
}

impl Formatter for ParquetFormatter {
    fn write_rows<W: Write + Send>(&self, rows: &[MarketRow], writer: W) -> Result<(), FormatError> {
        self.write_batches(rows, writer)
    }

    fn write_bars<W: Write + Send>(&self, bars: &[Bar], writer: W) -> Result<(), FormatError> {
        let rows: Vec<MarketRow> = bars.iter().map(Bar::to_row).collect();
        self.write_batches(&rows, writer)
    }

    fn extension(&self) -> &str {
        "parquet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use std::io::Cursor;

    fn create_test_row(minute: u32) -> MarketRow {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 15, 12, minute, 0).unwrap();
        MarketRow::new(timestamp, 10.0, 10.5, 9.8, 10.2, 100.0, 4, 10.1)
    }

    #[test]
    fn test_parquet_rows() {
        let formatter = ParquetFormatter::new();
        let mut output = Cursor::new(Vec::new());

        formatter.write_rows(&[create_test_row(0)], &mut output).unwrap();

        // Parquet files start and end with "PAR1" magic bytes
        let data = output.into_inner();
        assert!(data.len() > 8);
        assert_eq!(&data[0..4], b"PAR1");
        assert_eq!(&data[data.len() - 4..], b"PAR1");
    }

    #[test]
    fn test_parquet_bars_in_small_row_groups() {
        let formatter = ParquetFormatter::new().with_row_group_size(2);
        let bars: Vec<Bar> = (0..5).map(|m| Bar::from(create_test_row(m))).collect();
        let mut output = Cursor::new(Vec::new());

        formatter.write_bars(&bars, &mut output).unwrap();
        assert_eq!(&output.into_inner()[0..4], b"PAR1");
    }

    #[test]
    fn test_schema() {
        let schema = ParquetFormatter::schema();
        assert_eq!(schema.fields().len(), 8);
        assert_eq!(
            schema.field_with_name("trade_count").unwrap().data_type(),
            &DataType::UInt64
        );
        assert!(schema.field_with_name("vwap").is_ok());
    }
}
