use polars::prelude::*;

use crate::error::AppError;

pub const EXPORT_FILE_NAME: &str = "parkinsons_analysis.csv";
pub const EXPORT_CONTENT_TYPE: &str = "text/csv";

/// Re-encodes the table as UTF-8 CSV: header row, one line per record, no
/// index column.
pub fn to_csv(df: &DataFrame) -> Result<Vec<u8>, AppError> {
    let mut buf = Vec::new();
    // CsvWriter needs a mutable frame; the caller's table is left untouched.
    let mut out = df.clone();
    CsvWriter::new(&mut buf)
        .include_header(true)
        .finish(&mut out)?;

    tracing::info!("Exported {} rows as {} bytes of CSV", df.height(), buf.len());
    Ok(buf)
}
