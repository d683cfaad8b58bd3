use polars::prelude::*;

use super::types::{Scatter, TrendLine};
use super::utils::{numeric_column, to_f64_values};
use crate::error::AppError;

/// Point cloud of `x` against `y` with an OLS trend line. Rows missing
/// either coordinate are dropped from both the points and the fit.
pub fn scatter(df: &DataFrame, x: &str, y: &str) -> Result<Scatter, AppError> {
    let xs = to_f64_values(numeric_column(df, x)?)?;
    let ys = to_f64_values(numeric_column(df, y)?)?;

    let points: Vec<(f64, f64)> = xs
        .into_iter()
        .zip(ys)
        .filter_map(|pair| match pair {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        })
        .collect();

    let trend_line = ols(&points);
    if trend_line.is_none() {
        tracing::debug!("No trend line for '{}' vs '{}' ({} points)", x, y, points.len());
    }

    Ok(Scatter {
        x: x.to_string(),
        y: y.to_string(),
        points,
        trend_line,
    })
}

/// Ordinary least squares fit of `y = slope * x + intercept`. Needs at least
/// two points and some spread in `x`.
pub fn ols(points: &[(f64, f64)]) -> Option<TrendLine> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;

    let (sxx, sxy, syy) = points.iter().fold((0.0, 0.0, 0.0), |(sxx, sxy, syy), &(x, y)| {
        let dx = x - mean_x;
        let dy = y - mean_y;
        (sxx + dx * dx, sxy + dx * dy, syy + dy * dy)
    });

    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    let r_squared = if syy == 0.0 { None } else { Some(sxy * sxy / (sxx * syy)) };

    Some(TrendLine {
        slope,
        intercept: mean_y - slope * mean_x,
        r_squared,
    })
}
