//! Row readers for CSV, NDJSON and JSON input.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tapeline_types::MarketRow;
use tracing::debug;

use crate::{FormatError, OutputFormat};

/// Reads rows from a CSV source with a header row.
///
/// Columns are matched by name, so their order does not matter and extra
/// columns (e.g. `symbol`) are ignored.
///
/// # Errors
///
/// Returns an error if the input is not valid CSV or a record is malformed.
pub fn read_csv_rows<R: Read>(reader: R, delimiter: u8) -> Result<Vec<MarketRow>, FormatError> {
    let mut csv_reader = ::csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(::csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize()
        .map(|record| record.map_err(FormatError::from))
        .collect()
}

/// Reads rows from newline-delimited JSON. Blank lines are skipped.
///
/// # Errors
///
/// Returns an error naming the line of the first malformed record.
pub fn read_ndjson_rows<R: BufRead>(reader: R) -> Result<Vec<MarketRow>, FormatError> {
    let mut rows = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row = serde_json::from_str(&line).map_err(|source| FormatError::Record {
            line: index + 1,
            source,
        })?;
        rows.push(row);
    }
    Ok(rows)
}

/// Reads rows from a JSON array.
///
/// # Errors
///
/// Returns an error if the input is not a JSON array of rows.
pub fn read_json_rows<R: Read>(reader: R) -> Result<Vec<MarketRow>, FormatError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads rows from a file, picking the format from its extension.
///
/// `.tsv` files are read tab-separated. Parquet input is not supported.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, its format is unknown or
/// unsupported, or its contents are malformed.
pub fn read_rows(path: &Path) -> Result<Vec<MarketRow>, FormatError> {
    let format = OutputFormat::from_path(path)?;
    let file = BufReader::new(File::open(path)?);

    let rows = match format {
        OutputFormat::Csv => {
            let is_tsv = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));
            read_csv_rows(file, if is_tsv { b'\t' } else { b',' })?
        }
        OutputFormat::Ndjson => read_ndjson_rows(file)?,
        OutputFormat::Json => read_json_rows(file)?,
        OutputFormat::Parquet => return Err(FormatError::UnsupportedInput(format)),
    };

    debug!(path = %path.display(), %format, rows = rows.len(), "read rows");
    Ok(rows)
}
