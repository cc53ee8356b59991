//! Month-partitioned row storage.
//!
//! Rows of one symbol are stored one file per calendar month under
//! `symbol=<SYMBOL>/year=<YYYY>/month=<MM>.<ext>`.

use chrono::{DateTime, Datelike, Utc};
use std::path::{Path, PathBuf};
use tapeline_types::{MarketQuery, MarketRow};
use tracing::{debug, warn};

use crate::{FormatError, OutputFormat, read_rows};

/// Returns the partition file holding `symbol`'s rows for `month`.
#[must_use]
pub fn partition_path(
    root: &Path,
    symbol: &str,
    month: DateTime<Utc>,
    format: OutputFormat,
) -> PathBuf {
    root.join(format!("symbol={symbol}"))
        .join(format!("year={}", month.year()))
        .join(format!("month={:02}.{}", month.month(), format.extension()))
}

/// Loads every partition touched by the query window.
///
/// Missing months are skipped with a warning. Rows are returned as stored;
/// window filtering, ordering and the limit are applied by
/// `tapeline_aggregate::select_rows`.
///
/// # Errors
///
/// Returns an error if an existing partition cannot be read.
pub fn load_partitions(
    root: &Path,
    query: &MarketQuery,
    format: OutputFormat,
) -> Result<Vec<MarketRow>, FormatError> {
    let mut rows = Vec::new();
    for month in query.window.months() {
        let path = partition_path(root, &query.symbol, month, format);
        if !path.exists() {
            warn!(path = %path.display(), "partition missing, skipping");
            continue;
        }
        rows.extend(read_rows(&path)?);
    }

    debug!(symbol = %query.symbol, rows = rows.len(), "loaded partitions");
    Ok(rows)
}
