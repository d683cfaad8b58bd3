use polars::prelude::*;

use super::types::{BinCount, Histogram, HistogramBin};
use super::utils::{numeric_column, present_f64_values};
use crate::error::AppError;

/// Equal-width histogram of one numeric column.
pub fn histogram(df: &DataFrame, column: &str, bins: BinCount) -> Result<Histogram, AppError> {
    let series = numeric_column(df, column)?;
    let values = present_f64_values(series)?;
    let bins_out = bin_values(&values, bins);

    tracing::debug!(
        "Histogram for '{}': {} values into {} bins",
        column,
        values.len(),
        bins_out.len()
    );

    Ok(Histogram {
        column: column.to_string(),
        bin_count: bins,
        total: values.len(),
        bins: bins_out,
    })
}

/// Edges are `min + k * width`. Every bin is right-open except the last,
/// which also holds `max`. All-equal input collapses to a single bin.
pub fn bin_values(values: &[f64], bins: BinCount) -> Vec<HistogramBin> {
    let (min, max) = match min_max(values) {
        Some(range) => range,
        None => return Vec::new(),
    };

    if min == max {
        return vec![HistogramBin { start: min, end: max, count: values.len() }];
    }

    let n = bins.get();
    let width = (max - min) / n as f64;
    let mut counts = vec![0usize; n];
    for &value in values {
        let idx = (((value - min) / width) as usize).min(n - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(k, count)| HistogramBin {
            start: min + k as f64 * width,
            end: if k + 1 == n { max } else { min + (k + 1) as f64 * width },
            count,
        })
        .collect()
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::table::loader::table_from_csv;

    fn bins(n: usize) -> BinCount {
        BinCount::try_from(n).unwrap()
    }

    #[test]
    fn test_counts_sum_to_present_values_for_every_bin_count() {
        let mut csv = String::from("name,fo\n");
        for i in 0..97 {
            if i % 10 == 3 {
                csv.push_str(&format!("S{},\n", i));
            } else {
                csv.push_str(&format!("S{},{}\n", i, (i as f64 * 1.37).sin() * 40.0 + 120.0));
            }
        }
        let df = table_from_csv(&csv);
        let present = df.column("fo").unwrap().len() - df.column("fo").unwrap().null_count();

        for n in 5..=100 {
            let hist = histogram(&df, "fo", bins(n)).unwrap();
            assert_eq!(hist.bins.len(), n);
            assert_eq!(hist.total, present);
            assert_eq!(hist.bins.iter().map(|b| b.count).sum::<usize>(), present);
        }
    }

    #[test]
    fn test_edges_and_closed_last_bin() {
        let values = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let out = bin_values(&values, bins(5));
        assert_eq!(out.len(), 5);
        assert_eq!(out[0], HistogramBin { start: 0.0, end: 2.0, count: 2 });
        assert_eq!(out[1].start, 2.0);
        // 10.0 lands in the last bin with 8.0 and 9.0
        assert_eq!(out[4], HistogramBin { start: 8.0, end: 10.0, count: 3 });
    }

    #[test]
    fn test_single_distinct_value_collapses_to_one_bin() {
        let out = bin_values(&[3.5, 3.5, 3.5], bins(30));
        assert_eq!(out, vec![HistogramBin { start: 3.5, end: 3.5, count: 3 }]);
    }

    #[test]
    fn test_no_values_no_bins() {
        assert!(bin_values(&[], bins(10)).is_empty());
    }

    #[test]
    fn test_rejects_text_column() {
        let df = table_from_csv("name,fo\nS1,1.0\n");
        assert!(matches!(histogram(&df, "name", bins(10)), Err(AppError::InvalidInput(_))));
    }
}
