// In crates/market-data/src/lib.rs

use core_types::PriceSeries;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub mod error;

pub use error::{Error, Result};

/// The column the signal job reads prices from.
pub const CLOSE_COLUMN: &str = "close";

/// Cell contents that denote a missing observation rather than a bad value.
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Loads the `close` column of the CSV file at `path` as a `PriceSeries`.
///
/// Rows keep their file order. Columns other than `close` are ignored.
pub fn load_price_series(path: impl AsRef<Path>) -> Result<PriceSeries> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::InputNotFound);
    }

    let file = File::open(path)?;
    let series = read_price_series(file)?;
    tracing::debug!(path = %path.display(), rows = series.len(), "Price series loaded.");
    Ok(series)
}

/// Reads a headed CSV stream into a `PriceSeries`.
///
/// Emptiness is checked before the column lookup, so a header-only file with
/// no `close` column still reports `EmptyInput`.
pub fn read_price_series<R: Read>(source: R) -> Result<PriceSeries> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let headers = reader.headers()?.clone();
    let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;

    if records.is_empty() {
        return Err(Error::EmptyInput);
    }

    let close_idx = headers
        .iter()
        .position(|name| name.trim_start_matches('\u{feff}') == CLOSE_COLUMN)
        .ok_or(Error::MissingColumn(CLOSE_COLUMN))?;

    records
        .iter()
        .enumerate()
        .map(|(i, record)| parse_close(record, &headers, close_idx, i + 1))
        .collect()
}

fn parse_close(
    record: &StringRecord,
    headers: &StringRecord,
    close_idx: usize,
    row: usize,
) -> Result<Option<f64>> {
    if record.len() > headers.len() {
        return Err(Error::RaggedRow {
            row,
            expected: headers.len(),
            found: record.len(),
        });
    }

    // Short rows are padded with missing values.
    let Some(raw) = record.get(close_idx) else {
        return Ok(None);
    };

    let cell = raw.trim();
    if NA_TOKENS.contains(&cell) {
        return Ok(None);
    }

    match cell.parse::<f64>() {
        Ok(value) if value.is_nan() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(_) => Err(Error::InvalidClose {
            row,
            value: raw.to_string(),
        }),
    }
}
