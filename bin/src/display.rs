//! Display utilities and output formatting for the tapeline CLI.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, Utc};
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tapeline_lib::prelude::*;
use tracing_subscriber::EnvFilter;

/// Output format for rows and bars.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Tsv,
    Json,
    Ndjson,
    Parquet,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
            Self::Parquet => "parquet",
        }
    }

    /// Picks the format from a path's extension, falling back to CSV.
    pub(crate) fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => Self::Tsv,
            _ => match OutputFormat::from_path(path) {
                Ok(OutputFormat::Json) => Self::Json,
                Ok(OutputFormat::Ndjson) => Self::Ndjson,
                Ok(OutputFormat::Parquet) => Self::Parquet,
                Ok(OutputFormat::Csv) | Err(_) => Self::Csv,
            },
        }
    }

    /// Returns the storage format read back by the partition loader.
    pub(crate) const fn output_format(&self) -> OutputFormat {
        match self {
            Self::Csv | Self::Tsv => OutputFormat::Csv,
            Self::Json => OutputFormat::Json,
            Self::Ndjson => OutputFormat::Ndjson,
            Self::Parquet => OutputFormat::Parquet,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Initializes stderr logging from `-v` count, `--quiet` or `RUST_LOG`.
pub(crate) fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Parses an RFC 3339 timestamp or a `YYYY-MM-DD` date (midnight UTC).
pub(crate) fn parse_time(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid time: {s} (expected RFC 3339 or YYYY-MM-DD)"))?;
    Ok(date.and_time(chrono::NaiveTime::MIN).and_utc())
}

/// Write bars to a file, or to stdout when no path is given.
pub(crate) fn write_bars(bars: &[Bar], output: Option<&Path>, format: Format) -> Result<()> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            write_bars_to(bars, BufWriter::new(file), format)
        }
        None => write_bars_to(bars, BufWriter::new(io::stdout()), format),
    }
}

fn write_bars_to<W: Write + Send>(bars: &[Bar], mut writer: W, format: Format) -> Result<()> {
    match format {
        Format::Csv => {
            let formatter = CsvFormatter::new();
            formatter.write_bars(bars, &mut writer)?;
        }
        Format::Tsv => {
            let formatter = CsvFormatter::tsv();
            formatter.write_bars(bars, &mut writer)?;
        }
        Format::Json => {
            let formatter = JsonFormatter::new();
            formatter.write_bars(bars, &mut writer)?;
        }
        Format::Ndjson => {
            let formatter = JsonFormatter::ndjson();
            formatter.write_bars(bars, &mut writer)?;
        }
        Format::Parquet => {
            #[cfg(feature = "parquet")]
            {
                let formatter = ParquetFormatter::new();
                formatter.write_bars(bars, &mut writer)?;
            }
            #[cfg(not(feature = "parquet"))]
            {
                bail!("Parquet support not compiled in");
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Ensures a row file can be read back before doing any work.
pub(crate) fn check_input(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("Input file not found: {}", path.display());
    }
    Ok(())
}
