//! Output format abstraction.

use std::io::Write;
use std::path::Path;
use tapeline_aggregate::Bar;
use tapeline_types::MarketRow;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV format.
    #[default]
    Csv,
    /// JSON array format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
    /// Apache Parquet format.
    Parquet,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
            Self::Parquet => "parquet",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Csv, Self::Json, Self::Ndjson, Self::Parquet]
    }

    /// Detects the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the path has no extension or an unknown one.
    pub fn from_path(path: &Path) -> Result<Self, FormatError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| FormatError::UnknownFormat(path.display().to_string()))?
            .parse()
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" | "tsv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            "parquet" | "pq" => Ok(Self::Parquet),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during reading or writing.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// Format that can be written but not read back.
    #[error("Reading {0} input is not supported")]
    UnsupportedInput(OutputFormat),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed NDJSON record.
    #[error("Invalid record on line {line}: {source}")]
    Record {
        /// One-based line number.
        line: usize,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    /// Arrow/Parquet error.
    #[error("Parquet error: {0}")]
    Parquet(String),
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes rows to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_rows<W: Write + Send>(&self, rows: &[MarketRow], writer: W)
    -> Result<(), FormatError>;

    /// Writes bars to the output. Bucket keys are written as `timestamp`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_bars<W: Write + Send>(&self, bars: &[Bar], writer: W) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Ndjson);
        assert!("xlsx".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_from_path() {
        let format = OutputFormat::from_path(Path::new("data/aapl.ndjson")).unwrap();
        assert_eq!(format, OutputFormat::Ndjson);
        assert!(OutputFormat::from_path(Path::new("data/aapl")).is_err());
    }
}
