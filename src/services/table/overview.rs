use polars::prelude::*;
use rayon::prelude::*;
use smallvec::SmallVec;

use super::types::{ColumnSummary, DataPreview, Overview, SAMPLE_SIZE};
use super::utils::any_value_to_json;
use crate::error::AppError;

pub fn overview(df: &DataFrame) -> Overview {
    Overview {
        row_count: df.height(),
        column_count: df.width(),
        missing_values: df.get_columns().iter().map(|s| s.null_count()).sum(),
    }
}

/// First `rows` rows of the table, missing cells as `null`.
pub fn preview(df: &DataFrame, rows: usize) -> Result<DataPreview, AppError> {
    let head = df.head(Some(rows));
    let columns = head
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let rows = (0..head.height())
        .map(|row_idx| {
            head.get_columns()
                .iter()
                .map(|series| series.get(row_idx).map(any_value_to_json))
                .collect::<PolarsResult<Vec<_>>>()
        })
        .collect::<PolarsResult<Vec<_>>>()?;

    Ok(DataPreview { columns, rows })
}

pub fn column_summaries(df: &DataFrame) -> Result<Vec<ColumnSummary>, AppError> {
    df.get_columns()
        .par_iter()
        .map(summarize_column)
        .collect()
}

fn summarize_column(series: &Series) -> Result<ColumnSummary, AppError> {
    let missing_count = series.null_count();
    let present = series.drop_nulls();

    let mut sample_values = SmallVec::<[serde_json::Value; SAMPLE_SIZE]>::new();
    for idx in 0..present.len().min(SAMPLE_SIZE) {
        sample_values.push(any_value_to_json(present.get(idx)?));
    }

    Ok(ColumnSummary {
        name: series.name().to_string(),
        data_type: series.dtype().to_string(),
        valid_count: series.len() - missing_count,
        missing_count,
        unique_count: present.n_unique()?,
        sample_values,
    })
}
