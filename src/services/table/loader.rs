use bytes::Bytes;
use polars::prelude::*;
use std::io::Cursor;

use crate::error::AppError;

// pandas' default NA tokens, plus upper-case `NAN` which pandas reads as a
// float NaN and therefore also counts as missing.
const NA_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "NAN", "None", "n/a", "nan", "null",
];

/// Parses an uploaded delimited-text file into a table. The first row is the
/// header and column types are inferred from the data.
pub fn load_table(file_data: Bytes) -> Result<DataFrame, AppError> {
    let start = std::time::Instant::now();
    tracing::info!("Loading table from {} bytes", file_data.len());

    if file_data.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(AppError::LoadError("uploaded file is empty".to_string()));
    }

    if let Err(e) = std::str::from_utf8(&file_data) {
        return Err(AppError::LoadError(format!("uploaded file is not valid UTF-8: {}", e)));
    }

    let null_values = NullValues::AllColumns(NA_MARKERS.iter().map(|m| m.to_string()).collect());

    let df = CsvReader::new(Cursor::new(file_data))
        .has_header(true)
        // Scan every row; a late decimal or text cell widens the column
        // instead of failing the load.
        .infer_schema(None)
        .with_null_values(Some(null_values))
        .finish()
        .map_err(|e| {
            tracing::error!("Failed to parse uploaded table: {}", e);
            AppError::LoadError(e.to_string())
        })?;

    tracing::info!(
        "Loaded table with {} rows and {} columns in {:?}",
        df.height(),
        df.width(),
        start.elapsed()
    );
    Ok(df)
}

#[cfg(test)]
pub(crate) fn table_from_csv(csv: &str) -> DataFrame {
    load_table(Bytes::copy_from_slice(csv.as_bytes())).expect("test csv should load")
}
