use polars::prelude::*;
use serde_json::Value;

use crate::error::AppError;

/// Integer or floating-point columns. Booleans and strings are not numeric.
pub fn is_numeric(series: &Series) -> bool {
    series.dtype().is_numeric()
}

pub fn numeric_column_names(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|series| is_numeric(series))
        .map(|series| series.name().to_string())
        .collect()
}

/// Looks up `name` and checks that it is a numeric column.
pub fn numeric_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series, AppError> {
    let series = df
        .column(name)
        .map_err(|_| AppError::InvalidInput(format!("unknown column '{}'", name)))?;
    if !is_numeric(series) {
        return Err(AppError::InvalidInput(format!(
            "column '{}' is not numeric ({})",
            name,
            series.dtype()
        )));
    }
    Ok(series)
}

/// Values of a numeric column as `f64`, one entry per row, `None` where the
/// cell is missing.
pub fn to_f64_values(series: &Series) -> Result<Vec<Option<f64>>, AppError> {
    let cast = series.cast(&DataType::Float64)?;
    let values = cast.f64()?.into_iter().collect();
    Ok(values)
}

/// Present values of a numeric column as `f64`.
pub fn present_f64_values(series: &Series) -> Result<Vec<f64>, AppError> {
    Ok(to_f64_values(series)?.into_iter().flatten().collect())
}

pub fn any_value_to_json(value: AnyValue) -> Value {
    match value {
        AnyValue::Null => Value::Null,
        AnyValue::Boolean(v) => Value::from(v),
        AnyValue::Int32(v) => Value::from(v),
        AnyValue::Int64(v) => Value::from(v),
        AnyValue::UInt32(v) => Value::from(v),
        AnyValue::UInt64(v) => Value::from(v),
        AnyValue::Float32(v) => float_to_json(v as f64),
        AnyValue::Float64(v) => float_to_json(v),
        AnyValue::String(v) => Value::from(v),
        other => Value::from(other.to_string()),
    }
}

// JSON has no NaN or infinity.
fn float_to_json(v: f64) -> Value {
    serde_json::Number::from_f64(v)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}
