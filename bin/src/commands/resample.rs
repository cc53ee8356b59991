//! Resample command implementation.
//!
//! This module reads a row file, resamples it into OHLCV bars and writes the
//! bars in the requested format.

use crate::display::{Format, check_input, write_bars};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tapeline_lib::prelude::*;

/// Resample the rows in `input` to `timeframe` bars.
pub(crate) fn resample(
    input: &Path,
    timeframe_str: &str,
    output: Option<PathBuf>,
    format: Option<Format>,
    quiet: bool,
) -> Result<()> {
    check_input(input)?;

    let timeframe: Timeframe = timeframe_str.parse()?;

    let format = format
        .or_else(|| output.as_deref().map(Format::from_path))
        .unwrap_or(Format::Csv);

    // Progress goes to stderr, so only hide it when asked
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .context("Invalid progress template")?,
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Reading {}", input.display()));
        pb
    };

    let rows = read_rows(input).with_context(|| format!("Failed to read {}", input.display()))?;

    progress.set_message(format!("Resampling {} rows to {timeframe}", rows.len()));
    let bars = tapeline_lib::resample(&rows, timeframe);

    progress.finish_with_message(format!(
        "Resampled {} rows into {} {timeframe} bars",
        rows.len(),
        bars.len()
    ));

    write_bars(&bars, output.as_deref(), format)?;

    if let Some(path) = output.filter(|_| !quiet) {
        eprintln!("Output written to: {}", path.display());
    }

    Ok(())
}
