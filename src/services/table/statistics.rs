use polars::prelude::*;
use rayon::prelude::*;

use super::types::DescriptiveStats;
use super::utils::{is_numeric, present_f64_values};
use crate::error::AppError;

/// Descriptive statistics for every numeric column, in table order.
/// Returns an empty list when the table has no numeric columns.
pub fn describe(df: &DataFrame) -> Result<Vec<DescriptiveStats>, AppError> {
    let numeric: Vec<&Series> = df.get_columns().iter().filter(|s| is_numeric(s)).collect();
    tracing::debug!("Describing {} numeric columns", numeric.len());

    numeric.par_iter().map(|series| describe_column(series)).collect()
}

pub fn describe_column(series: &Series) -> Result<DescriptiveStats, AppError> {
    let mut values = present_f64_values(series)?;
    values.sort_by(|a, b| a.total_cmp(b));

    let count = values.len();
    let mean = mean(&values);

    Ok(DescriptiveStats {
        column: series.name().to_string(),
        count,
        missing: series.len() - count,
        mean,
        std: mean.and_then(|m| sample_std(&values, m)),
        min: values.first().copied(),
        p25: quantile_sorted(&values, 0.25),
        p50: quantile_sorted(&values, 0.5),
        p75: quantile_sorted(&values, 0.75),
        max: values.last().copied(),
    })
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Unbiased (n - 1) standard deviation.
fn sample_std(values: &[f64], mean: f64) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
        / (values.len() - 1) as f64;
    Some(variance.sqrt())
}

/// Linear interpolation between the order statistics around `q * (n - 1)`.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let fraction = pos - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}
